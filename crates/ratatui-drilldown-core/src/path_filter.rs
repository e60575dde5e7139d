//! Computes what one level of the page hierarchy looks like.
//!
//! Given the segments the user has drilled into and the flat page list, [`filter`] returns the
//! pages selectable at that level ([`FilteredEntry::Leaf`]) followed by the groups one level
//! deeper ([`FilteredEntry::Category`]). The function is pure and cheap enough to run on every
//! frame.

use crate::registry::PagePath;
use crate::registry::PageRegistry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilteredEntry {
    /// A page whose path ends one segment below the drill point.
    Leaf { caption: String, index: usize },
    /// The next segment shared by pages nested deeper than that.
    Category { caption: String },
}

impl FilteredEntry {
    pub fn caption(&self) -> &str {
        match self {
            FilteredEntry::Leaf { caption, .. } | FilteredEntry::Category { caption } => caption,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, FilteredEntry::Leaf { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            FilteredEntry::Leaf { index, .. } => Some(*index),
            FilteredEntry::Category { .. } => None,
        }
    }
}

/// Entries visible after drilling into `drill_path`.
///
/// Leaves come first in registry order, then categories in order of first appearance. Categories
/// are deduplicated by caption, leaves are not: two identical page paths show up as two leaves
/// pointing at different indices. A drill path that matches nothing yields an empty list.
pub fn filter<S: AsRef<str>>(drill_path: &[S], registry: &PageRegistry) -> Vec<FilteredEntry> {
    filter_paths(drill_path, registry.as_slice())
}

/// [`filter`] over a bare slice of paths; indices refer to positions in `paths`.
pub fn filter_paths<S: AsRef<str>>(drill_path: &[S], paths: &[PagePath]) -> Vec<FilteredEntry> {
    let depth = drill_path.len();
    let survivors = paths.iter().enumerate().filter(|(_, path)| {
        let segments = path.segments();
        segments.len() >= depth
            && segments
                .iter()
                .zip(drill_path)
                .all(|(have, want)| have == want.as_ref())
    });

    let mut leaves = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    for (index, path) in survivors {
        let rest = &path.segments()[depth..];
        match rest {
            [] => {}
            [only] => leaves.push(FilteredEntry::Leaf {
                caption: only.clone(),
                index,
            }),
            [next, ..] => {
                if !categories.iter().any(|c| c == next) {
                    categories.push(next.clone());
                }
            }
        }
    }

    leaves.extend(
        categories
            .into_iter()
            .map(|caption| FilteredEntry::Category { caption }),
    );
    leaves
}
