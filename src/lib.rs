//! Relational design theory for schema normalization.
//!
//! A [`Relvar`] is a heading of attributes plus the functional and
//! multivalued dependencies declared over it. The [`algebra`] module derives
//! its properties: attribute closure, superkeys and candidate keys, and
//! membership in Boyce–Codd and Fourth Normal Form.
//!
//! ```
//! use normalization_core::{attribute_set, Relvar};
//!
//! let mut relvar = Relvar::new(attribute_set(["A", "B", "C"])?);
//! relvar.add_functional_dependency("{A} -> {B}".parse()?)?;
//!
//! assert_eq!(relvar.closure(&attribute_set(["A"])?), attribute_set(["A", "B"])?);
//! assert!(!relvar.is_in_bcnf());
//! # Ok::<(), normalization_core::NormalizationError>(())
//! ```

pub mod algebra;
pub mod error;
mod expression;
pub mod schema;

#[cfg(feature = "python")]
mod bindings;

pub use algebra::{
    bcnf_violations, candidate_keys, closure, fourth_nf_violations, is_key, is_relvar_in_4nf,
    is_relvar_in_bcnf, is_superkey, NormalForm, Violation,
};
pub use error::{NormalizationError, Result};
pub use schema::{
    attribute_set, AnyDependency, Attribute, AttributeSet, Dependency, FunctionalDependency,
    MultivaluedDependency, Relvar,
};
