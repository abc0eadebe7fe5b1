#[derive(Debug, thiserror::Error)]
pub enum WordNamesError {
    #[error("type `{category}` is not valid. Possible values are: `{}`", .valid.join("`, `"))]
    InvalidCategory { category: String, valid: Vec<String> },

    #[error("No word list for category: {0}")]
    CategoryNotFound(String),

    #[error("Word list is empty: {0}")]
    EmptyWordList(String),

    #[error("Cannot read bundled word lists: {0}")]
    ResourceRead(String),
}

pub type Result<T> = std::result::Result<T, WordNamesError>;
