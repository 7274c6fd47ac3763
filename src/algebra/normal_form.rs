//! BCNF and 4NF membership.
//!
//! The boolean tests short-circuit on the first offending dependency. The
//! `*_violations` functions walk everything and report each offender, so a
//! relvar is in a normal form exactly when its violation list is empty.

use super::closure::{closure, is_superkey};
use crate::schema::{AnyDependency, AttributeSet, Relvar};
use log::debug;
use serde::Serialize;
use std::fmt;

/// The normal forms this crate decides, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NormalForm {
    Bcnf,
    FourthNf,
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalForm::Bcnf => f.write_str("BCNF"),
            NormalForm::FourthNf => f.write_str("4NF"),
        }
    }
}

/// A non-trivial dependency whose determinant is not a superkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub dependency: AnyDependency,
    /// The normal form this dependency keeps the relvar out of.
    pub normal_form: NormalForm,
    /// What the determinant actually reaches; always a proper subset of the heading.
    pub determinant_closure: AttributeSet,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violates {}: determinant is not a superkey",
            self.dependency, self.normal_form
        )
    }
}

/// True iff every functional dependency is trivial or has a superkey determinant.
pub fn is_relvar_in_bcnf(relvar: &Relvar) -> bool {
    let heading = relvar.heading();
    let fds = relvar.functional_dependencies();

    fds.iter()
        .all(|fd| fd.is_trivial() || is_superkey(fd.determinant(), heading, fds))
}

/// True iff the relvar is in BCNF and every multivalued dependency is trivial
/// within the heading or has a superkey determinant.
pub fn is_relvar_in_4nf(relvar: &Relvar) -> bool {
    if !is_relvar_in_bcnf(relvar) {
        return false;
    }

    let heading = relvar.heading();
    let fds = relvar.functional_dependencies();

    relvar
        .multivalued_dependencies()
        .iter()
        .all(|mvd| mvd.is_trivial(heading) || is_superkey(mvd.determinant(), heading, fds))
}

/// Every functional dependency that keeps the relvar out of BCNF.
pub fn bcnf_violations(relvar: &Relvar) -> Vec<Violation> {
    let heading = relvar.heading();
    let fds = relvar.functional_dependencies();

    let violations: Vec<Violation> = fds
        .iter()
        .filter(|fd| !fd.is_trivial())
        .filter_map(|fd| {
            let reach = closure(fd.determinant(), fds);
            (reach != *heading).then(|| Violation {
                dependency: fd.clone().into(),
                normal_form: NormalForm::Bcnf,
                determinant_closure: reach,
            })
        })
        .collect();

    debug!("relvar {}: {} BCNF violations", relvar, violations.len());
    violations
}

/// Every dependency that keeps the relvar out of 4NF, BCNF offenders included.
pub fn fourth_nf_violations(relvar: &Relvar) -> Vec<Violation> {
    let heading = relvar.heading();
    let fds = relvar.functional_dependencies();

    let mut violations = bcnf_violations(relvar);
    violations.extend(
        relvar
            .multivalued_dependencies()
            .iter()
            .filter(|mvd| !mvd.is_trivial(heading))
            .filter_map(|mvd| {
                let reach = closure(mvd.determinant(), fds);
                (reach != *heading).then(|| Violation {
                    dependency: mvd.clone().into(),
                    normal_form: NormalForm::FourthNf,
                    determinant_closure: reach,
                })
            }),
    );

    debug!("relvar {}: {} 4NF violations", relvar, violations.len());
    violations
}

/// The highest normal form reached, or `None` below BCNF.
pub fn normal_form(relvar: &Relvar) -> Option<NormalForm> {
    if is_relvar_in_4nf(relvar) {
        Some(NormalForm::FourthNf)
    } else if is_relvar_in_bcnf(relvar) {
        Some(NormalForm::Bcnf)
    } else {
        None
    }
}
