//! The `Attribute` value type: one named column of a relvar heading.

use crate::error::{NormalizationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An immutable, uniquely named column of a schema.
///
/// Two attributes are equal iff their names are equal. Ordering is by name,
/// which keeps every `AttributeSet` (and everything printed from one) stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Attribute(String);

/// The set type used for headings, determinants and dependants.
pub type AttributeSet = BTreeSet<Attribute>;

impl Attribute {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(NormalizationError::EmptyAttributeName);
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Attribute {
    type Error = NormalizationError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<Attribute> for String {
    fn from(attribute: Attribute) -> Self {
        attribute.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds an `AttributeSet` from names, rejecting empty names.
pub fn attribute_set<I, S>(names: I) -> Result<AttributeSet>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Attribute::new).collect()
}

/// Writes a set as `{A, B, C}`.
pub(crate) fn fmt_set(set: &AttributeSet, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, attribute) in set.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", attribute)?;
    }
    f.write_str("}")
}
