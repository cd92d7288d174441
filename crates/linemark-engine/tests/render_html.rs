use linemark_engine::{RenderOptions, render, render_with};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(render(""), "");
}

#[test]
fn plain_line_gets_break() {
    assert_eq!(render("hola"), "hola<br>");
}

#[test]
fn list_renders_without_stray_breaks() {
    assert_eq!(render("- a\n- b\n"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn blank_line_between_paragraphs_collapses() {
    assert_eq!(render("line1\n\nline2"), "line1<br>line2<br>");
}

#[test]
fn mixed_inline_enrichment() {
    assert_eq!(
        render("**bold** and *italic* and `code`"),
        "<strong>bold</strong> and <em>italic</em> and <code>code</code><br>"
    );
}

#[test]
fn heading_rule_quote() {
    assert_eq!(
        render("### Oferta\n---\n> vale hasta el viernes"),
        "<h5>Oferta</h5><hr><blockquote>vale hasta el viernes</blockquote>"
    );
}

#[test]
fn table_with_header_consumes_separator() {
    assert_eq!(
        render("| Producto | Precio |\n|---|---|\n| Pan | 2 |"),
        "<table><tbody><tr><th>Producto</th><th>Precio</th></tr><tr><td>Pan</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn table_without_separator_has_no_header() {
    assert_eq!(
        render("| Pan | 2 |\n| Leche | 3 |"),
        "<table><tbody><tr><td>Pan</td><td>2</td></tr><tr><td>Leche</td><td>3</td></tr></tbody></table>"
    );
}

#[test]
fn input_ending_inside_table_still_closes() {
    let html = render("texto\n| a | b |");
    assert!(html.ends_with("</tbody></table>"));
}

#[test]
fn crlf_input_handled() {
    assert_eq!(render("- a\r\n- b\r\n"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn chat_message_end_to_end() {
    let md = "### Carrito\n- 2x Pan\n- 1x Leche\n\nTotal: **7.50**\n";
    assert_eq!(
        render(md),
        "<h5>Carrito</h5><ul><li>2x Pan</li><li>1x Leche</li></ul><br>Total: <strong>7.50</strong><br>"
    );
}

// Every opened block tag gets a matching close, whatever the input shape.
#[rstest]
#[case("- a")]
#[case("- a\n- b")]
#[case("| a |")]
#[case("| a |\n|---|")]
#[case("| a |\n|---|\n| b |")]
#[case("- a\n| x |\n- b")]
#[case("### h\n- a\n---\n| x |\n> q\n\ntext")]
#[case("|")]
#[case("- ")]
fn no_dangling_block_tags(#[case] input: &str) {
    let html = render(input);
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    assert_eq!(
        html.matches("<table>").count(),
        html.matches("</tbody></table>").count()
    );
    assert_eq!(html.matches("<tr>").count(), html.matches("</tr>").count());
}

#[test]
fn escaping_is_off_by_default() {
    assert_eq!(render("<script>"), "<script><br>");
}

#[test]
fn escaping_covers_all_text_positions() {
    let opts = RenderOptions { escape_text: true };
    assert_eq!(
        render_with("### a<b\n> c<d\n- e<f\n| g<h |\nx<y", &opts),
        "<h5>a&lt;b</h5><blockquote>c&lt;d</blockquote><ul><li>e&lt;f</li></ul>\
         <table><tbody><tr><td>g&lt;h</td></tr></tbody></table>x&lt;y<br>"
    );
}
