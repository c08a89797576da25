#![forbid(unsafe_code)]

//! Item handles and group tags.

use std::fmt;

/// Opaque handle for one draggable clip.
///
/// The reorder engine never looks inside an id; it only compares them and
/// hands them back to the [`ClipLayout`](crate::layout::ClipLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label identifying which items are mutually reorderable.
///
/// Two items only affect each other's position when their tags are equal.
/// A tag is fixed for the lifetime of its item.
///
/// ```
/// # use cliprail_reorder::item::GroupTag;
/// let bg = GroupTag::new("background");
/// assert_eq!(bg.as_str(), "background");
/// assert_ne!(bg, GroupTag::new("video"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupTag(String);

impl GroupTag {
    /// Create a tag from any string-like value.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for GroupTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
