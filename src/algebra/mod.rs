//! The dependency algebra.
//!
//! Pure functions over attribute sets and dependency sets: closure, superkey
//! and key tests, candidate keys, and the BCNF / 4NF decision procedures.
//! None of them fail; malformed input is rejected when the relvar is built.

mod closure;
mod keys;
mod normal_form;

pub use self::closure::{closure, is_key, is_superkey};
pub use self::keys::candidate_keys;
pub use self::normal_form::{
    bcnf_violations, fourth_nf_violations, is_relvar_in_4nf, is_relvar_in_bcnf, normal_form,
    NormalForm, Violation,
};
