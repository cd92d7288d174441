/// Blockquote block type owning its prefix constant.
///
/// Quotes are single-level and single-line; nesting is not part of the
/// supported subset.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus the mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Strips the quote prefix, returning the trimmed remainder.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
