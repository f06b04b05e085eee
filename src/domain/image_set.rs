// SPDX-License-Identifier: MPL-2.0
//! Ordered, cyclic set of opaque image identifiers.

use std::fmt;

/// Opaque identifier of a menu image (e.g. `"01"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Fixed-length ordered sequence of images. Navigation wraps around.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSet {
    ids: Vec<ImageId>,
}

impl ImageSet {
    #[must_use]
    pub fn new(ids: Vec<ImageId>) -> Self {
        Self { ids }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageId> {
        self.ids.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageId> {
        self.ids.iter()
    }

    /// Index following `current`, wrapping to the first image.
    ///
    /// Returns `None` for an empty set. A single-image set returns `Some(0)`.
    #[must_use]
    pub fn next_index(&self, current: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        Some((current % len + 1) % len)
    }

    /// Index preceding `current`, wrapping to the last image.
    #[must_use]
    pub fn previous_index(&self, current: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        Some((current % len + len - 1) % len)
    }

    /// Clamps a caller-supplied index into range. `None` when the set is empty.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(index.min(self.len() - 1))
        }
    }
}

impl<S: Into<ImageId>> FromIterator<S> for ImageSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> ImageSet {
        ["01", "02", "03", "04", "05", "06"].into_iter().collect()
    }

    #[test]
    fn next_wraps_to_first() {
        let set = six();
        assert_eq!(set.next_index(2), Some(3));
        assert_eq!(set.next_index(5), Some(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let set = six();
        assert_eq!(set.previous_index(3), Some(2));
        assert_eq!(set.previous_index(0), Some(5));
    }

    #[test]
    fn single_image_navigates_to_itself() {
        let set: ImageSet = ["only"].into_iter().collect();
        assert_eq!(set.next_index(0), Some(0));
        assert_eq!(set.previous_index(0), Some(0));
    }

    #[test]
    fn empty_set_has_no_navigation() {
        let set = ImageSet::default();
        assert!(set.is_empty());
        assert_eq!(set.next_index(0), None);
        assert_eq!(set.previous_index(0), None);
        assert_eq!(set.clamp_index(3), None);
    }

    #[test]
    fn clamp_index_saturates_at_last() {
        let set = six();
        assert_eq!(set.clamp_index(2), Some(2));
        assert_eq!(set.clamp_index(42), Some(5));
    }

    #[test]
    fn get_returns_identifier_in_order() {
        let set = six();
        assert_eq!(set.get(0).map(ImageId::as_str), Some("01"));
        assert_eq!(set.get(3).map(ImageId::as_str), Some("04"));
        assert_eq!(set.get(6), None);
    }
}
