use rand::seq::SliceRandom;
use rand::Rng;

use crate::alias::unalias;
use crate::bundle::Bundle;
use crate::error::{Result, WordNamesError};

/// Bounds of the optional numeric suffix, inclusive.
const RANDOM_NUMBER_MIN: u32 = 100_000;
const RANDOM_NUMBER_MAX: u32 = 999_999;

impl<'a> Bundle<'a> {
    /// Check every category (after alias resolution) against the bundle.
    pub fn check_type<S: AsRef<str>>(&self, categories: &[S]) -> Result<()> {
        let known = self.possible_types()?;

        for category in unalias(categories) {
            if !known.contains(&category) {
                let mut valid = known;
                valid.sort();
                return Err(WordNamesError::InvalidCategory { category, valid });
            }
        }
        Ok(())
    }

    /// Build a name with one random word per category, in order, optionally
    /// followed by a six digit number. Spaces inside a word become `separator`.
    pub fn get_name<S: AsRef<str>>(
        &self,
        categories: &[S],
        separator: &str,
        random_number: bool,
    ) -> Result<String> {
        self.get_name_with_rng(categories, separator, random_number, &mut rand::thread_rng())
    }

    /// [`Bundle::get_name`] drawing from a caller-supplied generator.
    pub(crate) fn get_name_with_rng<S: AsRef<str>, R: Rng>(
        &self,
        categories: &[S],
        separator: &str,
        random_number: bool,
        rng: &mut R,
    ) -> Result<String> {
        let categories = unalias(categories);

        let lists = categories
            .iter()
            .map(|category| self.load_word_list(category))
            .collect::<Result<Vec<_>>>()?;

        let mut tokens = Vec::with_capacity(lists.len() + 1);
        for (category, words) in categories.iter().zip(&lists) {
            let word = words
                .choose(rng)
                .ok_or_else(|| WordNamesError::EmptyWordList(category.clone()))?;
            tokens.push(word.replace(' ', separator));
        }

        if random_number {
            let n = rng.gen_range(RANDOM_NUMBER_MIN..=RANDOM_NUMBER_MAX);
            tokens.push(n.to_string());
        }

        let name = tokens.join(separator);
        tracing::debug!(%name, "generated name");
        Ok(name)
    }
}

/// Validate categories against the embedded word lists.
pub fn check_type<S: AsRef<str>>(categories: &[S]) -> Result<()> {
    Bundle::embedded().check_type(categories)
}

/// Generate a name from the embedded word lists.
///
/// Categories are not validated first; an unknown one surfaces as
/// [`WordNamesError::CategoryNotFound`]. Call [`check_type`] beforehand for
/// an error that lists the valid categories.
pub fn get_name<S: AsRef<str>>(
    categories: &[S],
    separator: &str,
    random_number: bool,
) -> Result<String> {
    Bundle::embedded().get_name(categories, separator, random_number)
}
