//! Pure renderers for the generated text artifacts.
//!
//! Each function turns [`ScaffoldOptions`](crate::domain::ScaffoldOptions)
//! (and, for the stylesheet and HTML shell, the classified colours) into the
//! full file content. Writing is the generator services' job.

mod html;
mod static_files;
mod stylesheet;

pub use html::render_html;
pub use static_files::{render_htaccess, render_robots, render_sitemap};
pub use stylesheet::render_stylesheet;

/// Escape text for use in HTML element content and double-quoted attributes.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
