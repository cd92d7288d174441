pub mod classify;
pub mod emit;
pub mod inline;
pub mod kinds;

use classify::LineClassifier;
use emit::{Consumed, HtmlEmitter};

/// Options controlling HTML output.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Escape HTML special characters in text content and URLs.
    ///
    /// Off by default: the renderer historically passed text through
    /// verbatim, and callers that sanitize elsewhere rely on that.
    pub escape_text: bool,
}

/// Renders a Markdown message to an HTML fragment with default options.
///
/// Supports a constrained subset: `### ` headings, `---` rules, `> ` quotes,
/// `- ` list items, pipe tables with an optional `|---|` header separator,
/// and inline bold/italic/code/link/image spans. Anything else passes
/// through as plain text followed by a line break.
///
/// Never fails: malformed constructs simply don't match and are emitted
/// literally. The empty input produces the empty output.
///
/// The output is a fragment for insertion into a containing document node.
/// Feeding the renderer its own output is undefined and unsupported.
pub fn render(text: &str) -> String {
    render_with(text, &RenderOptions::default())
}

/// Renders a Markdown message to an HTML fragment.
///
/// Single forward pass over the lines of `text`. Each line is classified
/// independently, then fed to the emitter along with one line of lookahead
/// (needed for table header detection, which consumes the separator line).
pub fn render_with(text: &str, opts: &RenderOptions) -> String {
    let classifier = LineClassifier;
    let mut emitter = HtmlEmitter::new(opts);

    let lines: Vec<&str> = text.lines().collect();
    let mut i = 0;
    while i < lines.len() {
        let lc = classifier.classify(lines[i]);
        let lookahead = lines.get(i + 1).copied();
        i += match emitter.push(&lc, lookahead) {
            Consumed::Line => 1,
            Consumed::LineAndSeparator => 2,
        };
    }

    emitter.finish()
}
