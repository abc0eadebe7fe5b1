//! Random, human-readable names like `red-beagle-482931`, built from bundled
//! word lists.

mod alias;
mod bundle;
mod error;
mod names;

pub use alias::unalias;
pub use bundle::{load_word_list, possible_types, Bundle};
pub use error::{Result, WordNamesError};
pub use names::{check_type, get_name};
