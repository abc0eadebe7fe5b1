use rust_embed::RustEmbed;
use crate::error::{Result, WordNamesError};

const FILE_SUFFIX: &str = ".txt";

#[derive(RustEmbed)]
#[folder = "data/"]
struct WordLists;

#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Embedded,
    Files(&'a [(&'a str, &'a str)]),
}

/// A fixed set of word-list files, `<category>.txt` -> contents.
#[derive(Debug, Clone, Copy)]
pub struct Bundle<'a> {
    source: Source<'a>,
}

impl Bundle<'static> {
    /// Every `.txt` file under `data/`, compiled into the crate.
    pub fn embedded() -> Self {
        Bundle {
            source: Source::Embedded,
        }
    }
}

impl<'a> Bundle<'a> {
    pub fn new(files: &'a [(&'a str, &'a str)]) -> Self {
        Bundle {
            source: Source::Files(files),
        }
    }

    /// File names in bundle order.
    pub fn file_names(&self) -> Vec<String> {
        match self.source {
            Source::Embedded => WordLists::iter().map(|name| name.into_owned()).collect(),
            Source::Files(files) => files.iter().map(|&(name, _)| name.to_string()).collect(),
        }
    }

    /// Category names, i.e. every `.txt` file name with the suffix stripped.
    /// Order follows the bundle, not sorted.
    pub fn possible_types(&self) -> Result<Vec<String>> {
        let types: Vec<String> = self
            .file_names()
            .iter()
            .filter_map(|name| name.strip_suffix(FILE_SUFFIX))
            .map(str::to_string)
            .collect();
        if types.is_empty() {
            return Err(WordNamesError::ResourceRead(
                "bundle contains no word lists".to_string(),
            ));
        }
        Ok(types)
    }

    /// Read `<category>.txt` line by line. Blank lines are kept as empty
    /// entries; line terminators are dropped.
    pub fn load_word_list(&self, category: &str) -> Result<Vec<String>> {
        let file_name = format!("{}{}", category, FILE_SUFFIX);
        let not_found = || WordNamesError::CategoryNotFound(category.to_string());

        let contents = match self.source {
            Source::Embedded => {
                let file = WordLists::get(&file_name).ok_or_else(not_found)?;
                String::from_utf8(file.data.into_owned()).map_err(|e| {
                    WordNamesError::ResourceRead(format!("{}: {}", file_name, e))
                })?
            }
            Source::Files(files) => files
                .iter()
                .find(|(name, _)| *name == file_name)
                .map(|&(_, contents)| contents.to_string())
                .ok_or_else(not_found)?,
        };

        let words: Vec<String> = contents.lines().map(str::to_string).collect();
        tracing::trace!(category, words = words.len(), "loaded word list");
        Ok(words)
    }
}

impl Default for Bundle<'static> {
    fn default() -> Self {
        Bundle::embedded()
    }
}

/// Category names available in the embedded bundle.
pub fn possible_types() -> Result<Vec<String>> {
    Bundle::embedded().possible_types()
}

/// Word list for `category` from the embedded bundle. Aliases are not resolved here.
pub fn load_word_list(category: &str) -> Result<Vec<String>> {
    Bundle::embedded().load_word_list(category)
}
