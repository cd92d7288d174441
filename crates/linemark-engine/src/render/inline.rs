//! Inline enrichment for plain text lines.
//!
//! Each pattern is a global, non-greedy substitution applied in a fixed
//! order over the whole line: bold+italic, bold, italic, code, link,
//! image. Unterminated spans don't match and pass through literally.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Bounded display size for inline images in chat bubbles.
const IMG_STYLE: &str = "max-width:100px;max-height:100px;";

fn re_bold_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap())
}

fn re_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn re_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").unwrap())
}

fn re_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap())
}

// The optional leading `!` capture keeps the link rule off image syntax,
// which the image rule consumes afterwards.
fn re_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").unwrap())
}

fn re_image() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap())
}

/// Applies inline substitutions to one plain text line.
///
/// With `escape` set, text is HTML-escaped before any pattern runs and
/// URLs landing in attributes get their double quotes encoded.
pub fn enrich(line: &str, escape: bool) -> String {
    let line: Cow<'_, str> = if escape {
        html_escape::encode_text(line)
    } else {
        Cow::Borrowed(line)
    };
    let line = re_bold_italic().replace_all(&line, "<strong><em>$1</em></strong>");
    let line = re_bold().replace_all(&line, "<strong>$1</strong>");
    let line = re_italic().replace_all(&line, "<em>$1</em>");
    let line = re_code().replace_all(&line, "<code>$1</code>");
    let line = re_link().replace_all(&line, |caps: &Captures<'_>| {
        if &caps[1] == "!" {
            // Image syntax, leave it for the image rule.
            caps[0].to_string()
        } else {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                attr_url(&caps[3], escape),
                &caps[2]
            )
        }
    });
    let line = re_image().replace_all(&line, |caps: &Captures<'_>| {
        format!(
            r#"<img alt="{}" src="{}" style="{IMG_STYLE}">"#,
            &caps[1],
            attr_url(&caps[2], escape)
        )
    });
    line.into_owned()
}

/// Quote-encodes a URL for attribute position.
///
/// Ampersands and angle brackets were already handled by the whole-line
/// escape, so only double quotes remain to encode here.
fn attr_url(url: &str, escape: bool) -> String {
    if escape {
        url.replace('"', "&quot;")
    } else {
        url.to_string()
    }
}
