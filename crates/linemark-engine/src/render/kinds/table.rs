use std::sync::OnceLock;

use regex::Regex;

/// Pipe table knowledge: row splitting and header separator detection.
pub struct Table;

impl Table {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// Splits a table row into trimmed cells.
    ///
    /// A row must both start and end with a pipe. The empty fragments
    /// produced by the boundary pipes are discarded, so `|a|b|` yields
    /// two cells and a lone `|` yields zero.
    ///
    /// Returns `None` if the line is not a table row.
    pub fn split_row(line: &str) -> Option<Vec<&str>> {
        if !(line.starts_with(Self::PIPE) && line.ends_with(Self::PIPE)) {
            return None;
        }
        let fragments: Vec<&str> = line.split(Self::PIPE).collect();
        Some(
            fragments[1..fragments.len() - 1]
                .iter()
                .map(|cell| cell.trim())
                .collect(),
        )
    }

    /// Whether a line is a header separator (`|---|---|` and friends).
    ///
    /// Only consulted as lookahead from a table row; a separator standing
    /// on its own classifies as an ordinary row of dash cells.
    pub fn is_separator(line: &str) -> bool {
        re_separator().is_match(line)
    }
}

fn re_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\|[-\s|]+\|$").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_two_cells() {
        assert_eq!(Table::split_row("| a | b |"), Some(vec!["a", "b"]));
    }

    #[test]
    fn split_keeps_inner_empties() {
        assert_eq!(Table::split_row("|a||b|"), Some(vec!["a", "", "b"]));
    }

    #[test]
    fn lone_pipe_is_empty_row() {
        assert_eq!(Table::split_row("|"), Some(vec![]));
    }

    #[test]
    fn unterminated_row_rejected() {
        assert_eq!(Table::split_row("| a | b"), None);
        assert_eq!(Table::split_row("a | b |"), None);
    }

    #[test]
    fn separator_detected() {
        assert!(Table::is_separator("|---|---|"));
        assert!(Table::is_separator("| --- | --- |"));
        assert!(Table::is_separator("|-|"));
    }

    #[test]
    fn separator_rejects_content() {
        assert!(!Table::is_separator("| a | b |"));
        assert!(!Table::is_separator("---"));
        assert!(!Table::is_separator("||"));
    }
}
