use std::fmt::Write as _;

use super::escape_html;
use crate::domain::{
    color::NamedColor,
    entities::{
        layout::{AssetSources, MAIN_SCRIPT, SCRIPT_DIR, VENDOR_DIR},
        options::ScaffoldOptions,
    },
};

/// Social preview image expected under `img/social/`.
const OG_IMAGE: &str = "img/social/og-image.jpg";

/// Render `index.html`.
///
/// The OpenGraph block is emitted only when enabled, the theme block only
/// when at least one colour was configured (it uses the first one), and the
/// script-library tag only when the library is downloaded.
pub fn render_html(options: &ScaffoldOptions, colors: &[NamedColor]) -> String {
    let title = escape_html(options.title());
    let description = escape_html(options.description());
    let url = escape_html(&options.url().root());
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(
        out,
        "<html lang=\"{}\" dir=\"{}\">",
        options.lang(),
        options.direction()
    );
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(out, "  <title>{title}</title>");
    let _ = writeln!(out, "  <meta name=\"description\" content=\"{description}\">");
    let _ = writeln!(out, "  <link rel=\"canonical\" href=\"{url}\">");

    if options.opengraph() {
        out.push_str("\n  <!-- OpenGraph -->\n");
        let _ = writeln!(out, "  <meta property=\"og:title\" content=\"{title}\">");
        let _ = writeln!(
            out,
            "  <meta property=\"og:description\" content=\"{description}\">"
        );
        out.push_str("  <meta property=\"og:type\" content=\"website\">\n");
        let _ = writeln!(out, "  <meta property=\"og:url\" content=\"{url}\">");
        let _ = writeln!(
            out,
            "  <meta property=\"og:image\" content=\"{}\">",
            escape_html(&options.url().join(OG_IMAGE))
        );
        let _ = writeln!(
            out,
            "  <meta property=\"og:locale\" content=\"{}\">",
            options.lang().as_str().replace('-', "_")
        );
    }

    if let Some(theme) = colors.first() {
        let hex = theme.hex();
        out.push_str("\n  <!-- Theme -->\n");
        let _ = writeln!(out, "  <meta name=\"theme-color\" content=\"{hex}\">");
        let _ = writeln!(
            out,
            "  <meta name=\"msapplication-navbutton-color\" content=\"{hex}\">"
        );
        let _ = writeln!(
            out,
            "  <meta name=\"apple-mobile-web-app-status-bar-style\" content=\"{hex}\">"
        );
    }

    // Compiled by the user from sass/main.scss; nothing here writes it.
    out.push_str("\n  <link rel=\"stylesheet\" href=\"css/main.css\">\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("  <header>\n  </header>\n\n");
    out.push_str("  <main>\n");
    for section in options.sections() {
        let _ = writeln!(
            out,
            "    <section id=\"{section}\" class=\"{section}\">\n    </section>"
        );
    }
    out.push_str("  </main>\n\n");
    out.push_str("  <footer>\n  </footer>\n\n");

    if options.script_library() {
        let _ = writeln!(
            out,
            "  <script src=\"{SCRIPT_DIR}/{}\"></script>",
            AssetSources::SCRIPT_LIBRARY_FILE
        );
    }
    let _ = writeln!(
        out,
        "  <script src=\"{SCRIPT_DIR}/{VENDOR_DIR}/bin/materialize.min.js\"></script>"
    );
    let _ = writeln!(out, "  <script src=\"{MAIN_SCRIPT}\"></script>");
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::ColorClassifier;
    use crate::domain::entities::options::ScaffoldOptionsBuilder;

    fn render(builder: ScaffoldOptionsBuilder) -> String {
        let opts = builder.build().unwrap();
        let named = ColorClassifier::classify(opts.colors());
        render_html(&opts, &named)
    }

    fn base() -> ScaffoldOptionsBuilder {
        ScaffoldOptions::builder()
            .name("demo")
            .title("Demo")
            .description("A demo site")
    }

    #[test]
    fn document_attributes() {
        let html = render(base().lang("fr").direction("rtl"));
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"fr\" dir=\"rtl\">"));
        assert!(html.contains("<title>Demo</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"A demo site\">"));
    }

    #[test]
    fn opengraph_only_when_enabled() {
        let on = render(base().opengraph(true));
        let off = render(base().opengraph(false));
        assert!(on.contains("<!-- OpenGraph -->"));
        assert!(on.contains("og:title"));
        assert!(on.contains("content=\"https://www.example.com/img/social/og-image.jpg\""));
        assert!(!off.contains("og:"));
    }

    #[test]
    fn theme_block_requires_a_color() {
        let none = render(base());
        assert!(!none.contains("theme-color"));

        let some = render(base().colors(["#FF0000", "#0000ff"]));
        assert!(some.contains("<meta name=\"theme-color\" content=\"#ff0000\">"));
        assert!(!some.contains("#0000ff"));
    }

    #[test]
    fn one_container_per_section_in_order() {
        let html = render(base().sections(["intro", "work", "contact"]));
        let ids = ["intro", "work", "contact"];
        for id in ids {
            assert_eq!(html.matches(&format!("<section id=\"{id}\"")).count(), 1);
        }
        assert_eq!(html.matches("<section ").count(), 3);
        let positions: Vec<_> = ids
            .iter()
            .map(|id| html.find(&format!("id=\"{id}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn script_library_tag_is_conditional() {
        let with = render(base().script_library(true));
        let without = render(base().script_library(false));
        assert!(with.contains("<script src=\"js/jquery-3.4.1.min.js\"></script>"));
        assert!(!without.contains("jquery"));
        assert!(without.contains("js/materialize/bin/materialize.min.js"));
        assert!(without.contains("<script src=\"js/main.js\"></script>"));
    }

    #[test]
    fn canonical_url_is_escaped_and_keeps_its_path() {
        let bare = render(base().url("example.com").opengraph(true));
        assert!(bare.contains("<link rel=\"canonical\" href=\"https://example.com/\">"));
        assert!(bare.contains("<meta property=\"og:url\" content=\"https://example.com/\">"));

        let page = render(base().url("example.com/a&b/page.html").opengraph(true));
        assert!(page.contains("href=\"https://example.com/a&amp;b/page.html\""));
        assert!(page.contains("content=\"https://example.com/a&amp;b/page.html\""));
        assert!(!page.contains("page.html/\""));
        assert!(!page.contains("a&b"));
    }

    #[test]
    fn markup_in_url_is_refused() {
        let err = base()
            .url("example.com/?a=1&b=\"><script>x</script>")
            .build()
            .unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::InvalidUrl { .. }));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render(base().title("Fish & <Chips>").opengraph(true));
        assert!(html.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
        assert!(!html.contains("<Chips>"));
    }
}
