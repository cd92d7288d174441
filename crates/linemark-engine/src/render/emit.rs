use std::borrow::Cow;

use super::{RenderOptions, classify::LineClass, inline, kinds::Table};

/// How much input a single push consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumed {
    /// The classified line only.
    Line,
    /// The classified line plus the header separator that followed it.
    LineAndSeparator,
}

#[derive(Debug, Clone, Copy)]
enum TableState {
    Closed,
    Open { header_emitted: bool },
}

/// Accumulates HTML fragments while tracking open blocks.
///
/// The emitter owns all per-render state: whether a list or table is
/// open, and whether the current table already has a header row.
/// [`HtmlEmitter::finish`] closes anything still open, so the output
/// never contains a dangling block tag.
pub struct HtmlEmitter<'a> {
    opts: &'a RenderOptions,
    out: String,
    list_open: bool,
    table: TableState,
}

impl<'a> HtmlEmitter<'a> {
    pub fn new(opts: &'a RenderOptions) -> Self {
        Self {
            opts,
            out: String::new(),
            list_open: false,
            table: TableState::Closed,
        }
    }

    /// Emits HTML for one classified line.
    ///
    /// `lookahead` is the raw next line, consulted only for table header
    /// detection. Returns how many input lines were consumed.
    pub fn push(&mut self, lc: &LineClass<'_>, lookahead: Option<&str>) -> Consumed {
        if let LineClass::TableRow(cells) = lc {
            self.close_list();
            return self.push_table_row(cells, lookahead);
        }

        // Any non-row line ends an open table before its own handling.
        self.close_table();

        match lc {
            LineClass::TableRow(_) => unreachable!("handled above"),
            LineClass::Heading(rest) => {
                self.close_list();
                let text = self.text(rest);
                self.out.push_str(&format!("<h5>{text}</h5>"));
            }
            LineClass::Rule => {
                self.close_list();
                self.out.push_str("<hr>");
            }
            LineClass::Quote(rest) => {
                self.close_list();
                let text = self.text(rest);
                self.out.push_str(&format!("<blockquote>{text}</blockquote>"));
            }
            LineClass::ListItem(rest) => {
                if !self.list_open {
                    self.out.push_str("<ul>");
                    self.list_open = true;
                }
                let text = self.text(rest);
                self.out.push_str(&format!("<li>{text}</li>"));
            }
            LineClass::Blank => {
                self.close_list();
                self.out.push_str("<br>");
            }
            LineClass::Text(line) => {
                self.close_list();
                self.out
                    .push_str(&inline::enrich(line, self.opts.escape_text));
                self.out.push_str("<br>");
            }
        }
        Consumed::Line
    }

    /// Closes any open block and returns the buffer, with consecutive
    /// line breaks collapsed.
    pub fn finish(mut self) -> String {
        self.close_list();
        self.close_table();
        // Block elements carry their own spacing; a <br> right after one
        // would double the gap.
        self.out.replace("<br><br>", "<br>")
    }

    fn push_table_row(&mut self, cells: &[&str], lookahead: Option<&str>) -> Consumed {
        if matches!(self.table, TableState::Closed) {
            self.out.push_str("<table><tbody>");
            self.table = TableState::Open {
                header_emitted: false,
            };
        }

        let header_pending = matches!(
            self.table,
            TableState::Open {
                header_emitted: false
            }
        );
        if header_pending && lookahead.is_some_and(Table::is_separator) {
            self.push_row(cells, "th");
            self.table = TableState::Open {
                header_emitted: true,
            };
            return Consumed::LineAndSeparator;
        }

        self.push_row(cells, "td");
        Consumed::Line
    }

    fn push_row(&mut self, cells: &[&str], tag: &str) {
        self.out.push_str("<tr>");
        for cell in cells {
            let text = self.text(cell);
            self.out.push_str(&format!("<{tag}>{text}</{tag}>"));
        }
        self.out.push_str("</tr>");
    }

    fn close_list(&mut self) {
        if self.list_open {
            self.out.push_str("</ul>");
            self.list_open = false;
        }
    }

    fn close_table(&mut self) {
        if matches!(self.table, TableState::Open { .. }) {
            self.out.push_str("</tbody></table>");
            self.table = TableState::Closed;
        }
    }

    fn text<'t>(&self, s: &'t str) -> Cow<'t, str> {
        if self.opts.escape_text {
            html_escape::encode_text(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}
