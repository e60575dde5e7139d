//! The flat, index-addressed list of pages a navigator presents.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("page path at index {index} has no segments")]
    EmptyPath { index: usize },
}

/// Location of one page in the hierarchy, e.g. `["Foundation", "Stateless Buttons"]`.
///
/// Always has at least one segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PagePath {
    segments: Vec<String>,
}

impl PagePath {
    /// Returns `None` for an empty segment list.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, used as the page title.
    pub fn title(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(" / "))
    }
}

/// Immutable registry of pages, validated once at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRegistry {
    paths: Vec<PagePath>,
}

impl PageRegistry {
    /// Builds a registry, rejecting the first path with no segments.
    ///
    /// ```
    /// use ratatui_drilldown_core::registry::PageRegistry;
    ///
    /// let registry = PageRegistry::new([
    ///     vec!["Home"],
    ///     vec!["Foundation", "Stateless Buttons"],
    /// ])
    /// .unwrap();
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn new<P, I, S>(paths: P) -> Result<Self, RegistryError>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths = paths
            .into_iter()
            .enumerate()
            .map(|(index, segments)| {
                PagePath::new(segments).ok_or_else(|| {
                    tracing::warn!(index, "rejecting page registry: empty page path");
                    RegistryError::EmptyPath { index }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(pages = paths.len(), "page registry built");
        Ok(Self { paths })
    }

    /// Builds a registry from slash-separated paths such as `"Foundation/Sliders"`.
    ///
    /// Segments are trimmed and blank segments skipped, so `"A//B"` is `["A", "B"]` and a line
    /// with no non-blank segment is rejected.
    pub fn parse<I, S>(lines: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let split: Vec<Vec<String>> = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .split('/')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        Self::new(split)
    }

    pub fn get(&self, index: usize) -> Option<&PagePath> {
        self.paths.get(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PagePath> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PagePath] {
        &self.paths
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a PagePath;
    type IntoIter = std::slice::Iter<'a, PagePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected_with_its_index() {
        let err = PageRegistry::new(vec![vec!["Home"], vec![], vec!["A", "B"]]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyPath { index: 1 });
        assert_eq!(err.to_string(), "page path at index 1 has no segments");
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = PageRegistry::new(Vec::<Vec<String>>::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.get(0), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let registry = PageRegistry::new([vec!["A"], vec!["A"]]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0), registry.get(1));
    }

    #[test]
    fn parse_splits_and_trims() {
        let registry = PageRegistry::parse(["Home", " Foundation / Sliders ", "A//B"]).unwrap();
        assert_eq!(registry.get(0).unwrap().segments(), ["Home"]);
        assert_eq!(
            registry.get(1).unwrap().segments(),
            ["Foundation", "Sliders"]
        );
        assert_eq!(registry.get(2).unwrap().segments(), ["A", "B"]);
        assert_eq!(registry.get(1).unwrap().to_string(), "Foundation / Sliders");
        assert_eq!(registry.get(1).unwrap().title(), "Sliders");
    }

    #[test]
    fn parse_rejects_blank_line() {
        assert_eq!(
            PageRegistry::parse(["Home", " / "]),
            Err(RegistryError::EmptyPath { index: 1 })
        );
    }
}
