//! Functional and multivalued dependencies.
//!
//! Both variants share the same shape (a determinant and a dependant set) and
//! differ only in their triviality rule and their textual separator. The
//! common capability is the `Dependency` trait; `AnyDependency` is the sum
//! type used where either variant may appear.

use super::attribute::{fmt_set, AttributeSet};
use crate::error::{NormalizationError, Result};
use crate::expression;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait Dependency {
    /// The token between the two attribute sets in the textual form.
    const SEPARATOR: &'static str;

    fn determinant(&self) -> &AttributeSet;

    fn dependant(&self) -> &AttributeSet;

    /// Every attribute the dependency mentions.
    fn attributes(&self) -> AttributeSet {
        self.determinant().union(self.dependant()).cloned().collect()
    }

    /// Triviality with respect to a reference heading.
    fn is_trivial_in(&self, heading: &AttributeSet) -> bool;
}

macro_rules! dependency_variant {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            determinant: AttributeSet,
            dependant: AttributeSet,
        }

        impl $name {
            /// Builds the dependency, rejecting an empty side.
            pub fn new(determinant: AttributeSet, dependant: AttributeSet) -> Result<Self> {
                if determinant.is_empty() {
                    return Err(NormalizationError::EmptyAttributeSet { side: "determinant" });
                }
                if dependant.is_empty() {
                    return Err(NormalizationError::EmptyAttributeSet { side: "dependant" });
                }
                Ok(Self { determinant, dependant })
            }

            pub fn determinant(&self) -> &AttributeSet {
                &self.determinant
            }

            pub fn dependant(&self) -> &AttributeSet {
                &self.dependant
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_set(&self.determinant, f)?;
                write!(f, " {} ", <$name as Dependency>::SEPARATOR)?;
                fmt_set(&self.dependant, f)
            }
        }

        impl FromStr for $name {
            type Err = NormalizationError;

            fn from_str(s: &str) -> Result<Self> {
                let (determinant, dependant) = expression::parse(s, <$name as Dependency>::SEPARATOR)?;
                Self::new(determinant, dependant)
            }
        }

        impl TryFrom<String> for $name {
            type Error = NormalizationError;

            fn try_from(s: String) -> Result<Self> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(dependency: $name) -> Self {
                dependency.to_string()
            }
        }
    };
}

dependency_variant!(FunctionalDependency);
dependency_variant!(MultivaluedDependency);

impl FunctionalDependency {
    /// `X -> Y` is trivial when `Y ⊆ X`.
    pub fn is_trivial(&self) -> bool {
        self.dependant.is_subset(&self.determinant)
    }
}

impl MultivaluedDependency {
    /// `X ->-> Y` is trivial within `heading` when `Y ⊆ X` or `X ∪ Y = heading`.
    pub fn is_trivial(&self, heading: &AttributeSet) -> bool {
        self.dependant.is_subset(&self.determinant)
            || self.determinant.union(&self.dependant).eq(heading.iter())
    }
}

impl Dependency for FunctionalDependency {
    const SEPARATOR: &'static str = "->";

    fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    fn dependant(&self) -> &AttributeSet {
        &self.dependant
    }

    fn is_trivial_in(&self, _heading: &AttributeSet) -> bool {
        self.is_trivial()
    }
}

impl Dependency for MultivaluedDependency {
    const SEPARATOR: &'static str = "->->";

    fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    fn dependant(&self) -> &AttributeSet {
        &self.dependant
    }

    fn is_trivial_in(&self, heading: &AttributeSet) -> bool {
        self.is_trivial(heading)
    }
}

/// Either kind of dependency, for reports that mix both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyDependency {
    Functional(FunctionalDependency),
    Multivalued(MultivaluedDependency),
}

impl AnyDependency {
    pub fn determinant(&self) -> &AttributeSet {
        match self {
            AnyDependency::Functional(fd) => fd.determinant(),
            AnyDependency::Multivalued(mvd) => mvd.determinant(),
        }
    }

    pub fn dependant(&self) -> &AttributeSet {
        match self {
            AnyDependency::Functional(fd) => fd.dependant(),
            AnyDependency::Multivalued(mvd) => mvd.dependant(),
        }
    }

    pub fn is_trivial_in(&self, heading: &AttributeSet) -> bool {
        match self {
            AnyDependency::Functional(fd) => fd.is_trivial(),
            AnyDependency::Multivalued(mvd) => mvd.is_trivial(heading),
        }
    }
}

impl From<FunctionalDependency> for AnyDependency {
    fn from(fd: FunctionalDependency) -> Self {
        AnyDependency::Functional(fd)
    }
}

impl From<MultivaluedDependency> for AnyDependency {
    fn from(mvd: MultivaluedDependency) -> Self {
        AnyDependency::Multivalued(mvd)
    }
}

impl fmt::Display for AnyDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDependency::Functional(fd) => fd.fmt(f),
            AnyDependency::Multivalued(mvd) => mvd.fmt(f),
        }
    }
}
