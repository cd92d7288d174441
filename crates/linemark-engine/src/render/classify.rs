use super::kinds::{BlockQuote, Heading, ListItem, Rule, Table};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; block context (open list, open
/// table) lives in the emitter. Classes are mutually exclusive and decided
/// in priority order: table row, heading, rule, blockquote, list item,
/// blank, plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A pipe-delimited table row with trimmed cell contents.
    TableRow(Vec<&'a str>),
    /// A `### ` heading with the trimmed remainder.
    Heading(&'a str),
    /// A `---` horizontal rule.
    Rule,
    /// A `> ` blockquote with the trimmed remainder.
    Quote(&'a str),
    /// A `- ` list item with the trimmed remainder.
    ListItem(&'a str),
    /// Empty after right-trimming.
    Blank,
    /// Anything else; gets inline enrichment on emit.
    Text(&'a str),
}

/// Classifies individual lines for the rendering pass.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a right-trimmed line into a [`LineClass`].
    ///
    /// Leading whitespace is significant: an indented `- ` line is plain
    /// text, not a list item.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end();

        if let Some(cells) = Table::split_row(line) {
            return LineClass::TableRow(cells);
        }
        if let Some(rest) = Heading::strip(line) {
            return LineClass::Heading(rest);
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if let Some(rest) = BlockQuote::strip(line) {
            return LineClass::Quote(rest);
        }
        if let Some(rest) = ListItem::strip(line) {
            return LineClass::ListItem(rest);
        }
        if line.is_empty() {
            return LineClass::Blank;
        }
        LineClass::Text(line)
    }
}
