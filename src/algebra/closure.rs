//! Attribute closure and the superkey / key tests built on it.

use crate::schema::{AttributeSet, FunctionalDependency};
use log::trace;
use std::collections::BTreeSet;

/// Computes the closure of `attributes` under `functional_dependencies`.
///
/// Saturates to a fixed point: every pass fires each dependency whose
/// determinant is already covered, and the loop stops after a pass that adds
/// nothing. Set union is monotone, so the result does not depend on the order
/// the dependencies are visited in.
pub fn closure(
    attributes: &AttributeSet,
    functional_dependencies: &BTreeSet<FunctionalDependency>,
) -> AttributeSet {
    let mut result = attributes.clone();
    let mut changed = true;
    let mut passes = 0;

    while changed {
        changed = false;
        passes += 1;
        for fd in functional_dependencies {
            if fd.determinant().is_subset(&result) {
                for attribute in fd.dependant() {
                    changed |= result.insert(attribute.clone());
                }
            }
        }
    }

    trace!("closure reached a fixed point after {} passes ({} -> {} attributes)", passes, attributes.len(), result.len());
    result
}

/// True iff the closure of `attributes` is exactly `heading`.
pub fn is_superkey(
    attributes: &AttributeSet,
    heading: &AttributeSet,
    functional_dependencies: &BTreeSet<FunctionalDependency>,
) -> bool {
    closure(attributes, functional_dependencies) == *heading
}

/// True iff `attributes` is a superkey and no single attribute can be dropped
/// from it while staying a superkey.
///
/// Each removal is tested against the full `attributes` set. For attribute
/// sets inside the heading this is the same as full minimality, because any
/// superset of a superkey is itself a superkey.
pub fn is_key(
    attributes: &AttributeSet,
    heading: &AttributeSet,
    functional_dependencies: &BTreeSet<FunctionalDependency>,
) -> bool {
    if !is_superkey(attributes, heading, functional_dependencies) {
        return false;
    }

    attributes.iter().all(|attribute| {
        let mut reduced = attributes.clone();
        reduced.remove(attribute);
        !is_superkey(&reduced, heading, functional_dependencies)
    })
}
