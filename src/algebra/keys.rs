//! Candidate key enumeration.

use super::closure::{closure, is_key};
use crate::schema::{Attribute, AttributeSet, FunctionalDependency};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Returns every candidate key of `heading`, smallest first.
///
/// Attributes that no dependency can produce must belong to every key, so
/// the search starts from that core and grows it one layer at a time with
/// combinations of the remaining attributes. Candidates that contain a key
/// found in an earlier layer are skipped; each layer is checked in parallel.
pub fn candidate_keys(
    heading: &AttributeSet,
    functional_dependencies: &BTreeSet<FunctionalDependency>,
) -> Vec<AttributeSet> {
    let derivable: AttributeSet = functional_dependencies
        .iter()
        .flat_map(|fd| fd.dependant().iter().cloned())
        .collect();
    let core: AttributeSet = heading.difference(&derivable).cloned().collect();
    let rest: Vec<Attribute> = heading.intersection(&derivable).cloned().collect();

    if closure(&core, functional_dependencies) == *heading {
        debug!("core {:?} already determines the heading", core);
        return vec![core];
    }

    let mut keys: Vec<AttributeSet> = Vec::new();
    for size in 1..=rest.len() {
        let layer: Vec<AttributeSet> = combinations(&rest, size)
            .into_iter()
            .map(|extra| core.iter().chain(extra).cloned().collect::<AttributeSet>())
            .filter(|candidate| !keys.iter().any(|key| key.is_subset(candidate)))
            .collect();

        if layer.is_empty() {
            break;
        }

        let found: Vec<AttributeSet> = layer
            .into_par_iter()
            .filter(|candidate| is_key(candidate, heading, functional_dependencies))
            .collect();

        debug!("candidate key layer {}: {} new keys", size, found.len());
        keys.extend(found);
    }

    keys
}

/// All `k`-element combinations of `items`, in lexicographic index order.
fn combinations(items: &[Attribute], k: usize) -> Vec<Vec<&Attribute>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.iter().map(|&i| &items[i]).collect());

        // Find the rightmost index that can still move right.
        let Some(pos) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return out;
        };
        indices[pos] += 1;
        for j in pos + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
