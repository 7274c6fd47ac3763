//! The relvar data model: attributes, dependencies, and relvars.

pub mod attribute;
pub mod dependency;
pub mod relvar;

pub use attribute::{attribute_set, Attribute, AttributeSet};
pub use dependency::{AnyDependency, Dependency, FunctionalDependency, MultivaluedDependency};
pub use relvar::Relvar;
