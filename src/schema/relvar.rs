//! The `Relvar`: a heading plus the dependencies declared over it.

use super::attribute::{fmt_set, Attribute, AttributeSet};
use super::dependency::{Dependency, FunctionalDependency, MultivaluedDependency};
use crate::algebra::{self, NormalForm};
use crate::error::{NormalizationError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// A relation variable.
///
/// Invariant: every attribute mentioned by a stored dependency belongs to
/// `heading`. Dependencies only enter through `add_*`, which validate first
/// and insert second, so a rejected dependency leaves the relvar untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RelvarDocument")]
pub struct Relvar {
    heading: AttributeSet,
    functional_dependencies: BTreeSet<FunctionalDependency>,
    multivalued_dependencies: BTreeSet<MultivaluedDependency>,
}

/// Unvalidated on-disk shape of a relvar.
#[derive(Deserialize)]
struct RelvarDocument {
    heading: Vec<Attribute>,
    #[serde(default)]
    functional_dependencies: Vec<FunctionalDependency>,
    #[serde(default)]
    multivalued_dependencies: Vec<MultivaluedDependency>,
}

impl TryFrom<RelvarDocument> for Relvar {
    type Error = NormalizationError;

    fn try_from(doc: RelvarDocument) -> Result<Self> {
        Relvar::with_dependencies(
            doc.heading.into_iter().collect(),
            doc.functional_dependencies,
            doc.multivalued_dependencies,
        )
    }
}

impl Relvar {
    /// A relvar with no dependencies.
    pub fn new(heading: AttributeSet) -> Self {
        Self {
            heading,
            ..Default::default()
        }
    }

    /// Builds a relvar and inserts every dependency, failing on the first one
    /// that references an attribute outside `heading`.
    pub fn with_dependencies(
        heading: AttributeSet,
        functional_dependencies: impl IntoIterator<Item = FunctionalDependency>,
        multivalued_dependencies: impl IntoIterator<Item = MultivaluedDependency>,
    ) -> Result<Self> {
        let mut relvar = Self::new(heading);
        for fd in functional_dependencies {
            relvar.add_functional_dependency(fd)?;
        }
        for mvd in multivalued_dependencies {
            relvar.add_multivalued_dependency(mvd)?;
        }
        Ok(relvar)
    }

    pub fn heading(&self) -> &AttributeSet {
        &self.heading
    }

    pub fn functional_dependencies(&self) -> &BTreeSet<FunctionalDependency> {
        &self.functional_dependencies
    }

    pub fn multivalued_dependencies(&self) -> &BTreeSet<MultivaluedDependency> {
        &self.multivalued_dependencies
    }

    pub fn add_functional_dependency(&mut self, fd: FunctionalDependency) -> Result<()> {
        self.validate(&fd)?;
        debug!("relvar {}: adding functional dependency {}", self, fd);
        self.functional_dependencies.insert(fd);
        Ok(())
    }

    pub fn add_multivalued_dependency(&mut self, mvd: MultivaluedDependency) -> Result<()> {
        self.validate(&mvd)?;
        debug!("relvar {}: adding multivalued dependency {}", self, mvd);
        self.multivalued_dependencies.insert(mvd);
        Ok(())
    }

    fn validate<D: Dependency + fmt::Display>(&self, dependency: &D) -> Result<()> {
        let missing = dependency
            .determinant()
            .iter()
            .chain(dependency.dependant())
            .find(|attribute| !self.heading.contains(*attribute));

        match missing {
            Some(attribute) => {
                warn!("rejecting dependency {}: {} is not in heading {}", dependency, attribute, self);
                Err(NormalizationError::InvalidDependency {
                    attribute: attribute.to_string(),
                    dependency: dependency.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    // --- Queries (delegating to the algebra) ---

    pub fn closure(&self, attributes: &AttributeSet) -> AttributeSet {
        algebra::closure(attributes, &self.functional_dependencies)
    }

    pub fn is_superkey(&self, attributes: &AttributeSet) -> bool {
        algebra::is_superkey(attributes, &self.heading, &self.functional_dependencies)
    }

    pub fn is_key(&self, attributes: &AttributeSet) -> bool {
        algebra::is_key(attributes, &self.heading, &self.functional_dependencies)
    }

    pub fn candidate_keys(&self) -> Vec<AttributeSet> {
        algebra::candidate_keys(&self.heading, &self.functional_dependencies)
    }

    pub fn is_in_bcnf(&self) -> bool {
        algebra::is_relvar_in_bcnf(self)
    }

    pub fn is_in_4nf(&self) -> bool {
        algebra::is_relvar_in_4nf(self)
    }

    /// The highest normal form among BCNF and 4NF this relvar satisfies.
    pub fn normal_form(&self) -> Option<NormalForm> {
        algebra::normal_form(self)
    }

    // --- Documents ---

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading relvar document from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl fmt::Display for Relvar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(&self.heading, f)
    }
}
