//! Expansion state for the citation list.
//!
//! Two mutators with deliberately different merge semantics:
//!
//! - [`ExpansionState::activate`] is additive. Clicking a reference marker
//!   opens its citation and never closes anything.
//! - [`ExpansionState::set_expanded`] replaces the whole set. This is how
//!   the citation list reports the user opening or closing sections, so a
//!   citation opened by activation can be collapsed again.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of zero-based citation indices currently expanded.
///
/// No range checking happens here. Indices outside the citation list are
/// stored but have nothing to render against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: BTreeSet<usize>,
}

impl ExpansionState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `index`, keeping everything already expanded.
    ///
    /// Returns `true` if the index was newly added.
    pub fn activate(&mut self, index: usize) -> bool {
        self.expanded.insert(index)
    }

    /// Replace the expanded set with `indices`.
    pub fn set_expanded<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.expanded = indices.into_iter().collect();
    }

    /// Whether `index` is expanded.
    pub fn contains(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Expanded indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.expanded.iter().copied().collect()
    }

    /// Number of expanded indices.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl FromIterator<usize> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}
