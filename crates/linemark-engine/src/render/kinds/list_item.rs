/// Unordered list item owning its prefix constant.
///
/// Only `- ` at column zero opens an item; ordered lists and `*`/`+`
/// markers are outside the supported subset.
pub struct ListItem;

impl ListItem {
    /// The list item prefix, marker plus the mandatory space.
    pub const PREFIX: &'static str = "- ";

    /// Strips the item prefix, returning the trimmed remainder.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
