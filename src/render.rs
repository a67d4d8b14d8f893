//! HTML rendering of banner lines.
//!
//! Produces the markup a host page injects above its attendance table:
//! lines joined by `<br>`, bold segments in `<b>`, and colored segments in
//! a `<span>` with an inline color.

use crate::models::{BannerLine, BannerSegment};

/// Renders banner lines as an HTML fragment.
///
/// # Example
///
/// ```
/// use balance_engine::models::{BannerColor, BannerLine, BannerSegment};
/// use balance_engine::render::render_banner_html;
///
/// let lines = vec![
///     BannerLine::new(vec![BannerSegment::bold("Remaining 3 days")]),
///     BannerLine::new(vec![
///         BannerSegment::plain("Time balance: "),
///         BannerSegment::colored("+1:00", BannerColor::Green),
///     ]),
/// ];
///
/// assert_eq!(
///     render_banner_html(&lines),
///     "<b>Remaining 3 days</b><br>Time balance: <span style=\"color:green\">+1:00</span>"
/// );
/// ```
pub fn render_banner_html(lines: &[BannerLine]) -> String {
    lines
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_line(line: &BannerLine) -> String {
    line.segments.iter().map(render_segment).collect()
}

fn render_segment(segment: &BannerSegment) -> String {
    let mut html = escape_html(&segment.text);
    if segment.bold {
        html = format!("<b>{}</b>", html);
    }
    if let Some(color) = segment.color {
        html = format!("<span style=\"color:{}\">{}</span>", color.as_css(), html);
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
