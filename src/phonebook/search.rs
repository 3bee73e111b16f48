//! Field-based contact search.
//!
//! A [`Criteria`] is a list of `(field, value)` pairs. A contact matches when every
//! pair matches, and a pair matches when the contact's value for that field equals the
//! wanted value ignoring case. There is no substring or fuzzy matching.

use crate::error::{PhonebookError, Result};
use crate::model::{Contact, Field};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    terms: Vec<(Field, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.terms.push((field, value.into()));
        self
    }

    /// Builds criteria from field names, failing on the first unknown name.
    pub fn parse<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| -> Result<(Field, String)> {
                Ok((key.as_ref().parse()?, value.into()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[(Field, String)] {
        &self.terms
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| contact.get(*field).to_lowercase() == value.to_lowercase())
    }
}

impl FromIterator<(Field, String)> for Criteria {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Field, String)> for Criteria {
    fn extend<T: IntoIterator<Item = (Field, String)>>(&mut self, iter: T) {
        self.terms.extend(iter);
    }
}

/// A single `field=value` term, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(pub Field, pub String);

impl FromStr for Term {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| PhonebookError::InvalidField(format!("{} (expected field=value)", s)))?;
        Ok(Term(key.trim().parse()?, value.to_string()))
    }
}

impl From<Term> for (Field, String) {
    fn from(term: Term) -> Self {
        (term.0, term.1)
    }
}
