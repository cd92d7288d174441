/// Heading block type owning its prefix constant.
///
/// Only level-3 source headings are recognized; they render one step
/// smaller (`<h5>`) so chat messages don't shout over the page chrome.
pub struct Heading;

impl Heading {
    /// The heading prefix, hashes plus the mandatory space.
    pub const PREFIX: &'static str = "### ";

    /// Strips the heading prefix, returning the trimmed remainder.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
