/// Horizontal rule block type.
pub struct Rule;

impl Rule {
    /// The exact rule marker; longer dash runs are plain text.
    pub const MARKER: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_marker_matches() {
        assert!(Rule::matches("---"));
    }

    #[test]
    fn longer_runs_do_not_match() {
        assert!(!Rule::matches("----"));
        assert!(!Rule::matches("--"));
    }
}
