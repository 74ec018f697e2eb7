use std::fmt::Write as _;

use crate::domain::{
    color::NamedColor,
    entities::{layout::VENDOR_DIR, options::ScaffoldOptions},
};

/// Breakpoints shared with the framework grid (small / medium / large).
const SMALL_MAX: u32 = 600;
const MEDIUM_MAX: u32 = 992;
const LARGE_MIN: u32 = 1200;

fn marker(out: &mut String, label: &str) {
    out.push_str("// ==========================================================================\n");
    let _ = writeln!(out, "// {label}");
    out.push_str("// ==========================================================================\n\n");
}

/// Render `sass/main.scss`.
///
/// Layout: GLOBAL (framework import), COLORS (only with colours), HEADER,
/// MAIN (one empty block per section), FOOTER, RESPONSIVE.
pub fn render_stylesheet(options: &ScaffoldOptions, colors: &[NamedColor]) -> String {
    let mut out = String::new();

    marker(&mut out, "GLOBAL");
    let _ = writeln!(out, "@import \"{VENDOR_DIR}/materialize\";\n");
    out.push_str("html {\n  scroll-behavior: smooth;\n}\n\n");

    if !colors.is_empty() {
        marker(&mut out, "COLORS");
        for color in colors {
            let _ = writeln!(out, "${}: {};", color.name, color.hex());
        }
        out.push('\n');
        for color in colors {
            let name = &color.name;
            let _ = writeln!(out, ".{name} {{\n  background-color: ${name} !important;\n}}");
            let _ = writeln!(out, ".{name}-text {{\n  color: ${name} !important;\n}}\n");
        }
    }

    marker(&mut out, "HEADER");
    out.push_str("header {\n}\n\n");

    marker(&mut out, "MAIN");
    out.push_str("main {\n}\n\n");
    for section in options.sections() {
        let _ = writeln!(out, "#{section} {{\n}}\n");
    }

    marker(&mut out, "FOOTER");
    out.push_str("footer {\n}\n\n");

    marker(&mut out, "RESPONSIVE");
    let _ = writeln!(out, "@media only screen and (max-width: {SMALL_MAX}px) {{\n}}\n");
    let _ = writeln!(
        out,
        "@media only screen and (min-width: {}px) and (max-width: {MEDIUM_MAX}px) {{\n}}\n",
        SMALL_MAX + 1
    );
    let _ = writeln!(
        out,
        "@media only screen and (min-width: {}px) {{\n}}\n",
        MEDIUM_MAX + 1
    );
    let _ = writeln!(out, "@media only screen and (min-width: {}px) {{\n}}", LARGE_MIN + 1);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::ColorClassifier;

    fn options(colors: &[&str], sections: &[&str]) -> ScaffoldOptions {
        ScaffoldOptions::builder()
            .name("demo")
            .colors(colors.iter().copied())
            .sections(sections.iter().copied())
            .build()
            .unwrap()
    }

    fn render(colors: &[&str], sections: &[&str]) -> String {
        let opts = options(colors, sections);
        let named = ColorClassifier::classify(opts.colors());
        render_stylesheet(&opts, &named)
    }

    #[test]
    fn no_colors_no_color_block() {
        let css = render(&[], &["intro"]);
        assert!(!css.contains("COLORS"));
        assert!(!css.contains('$'));
    }

    #[test]
    fn one_variable_and_utility_pair_per_color() {
        let css = render(&["#ff0000", "#0000ff"], &[]);
        assert!(css.contains("// COLORS"));
        assert!(css.contains("$red: #ff0000;"));
        assert!(css.contains("$blue: #0000ff;"));
        assert_eq!(css.matches(".red {").count(), 1);
        assert_eq!(css.matches(".red-text {").count(), 1);
        assert_eq!(css.matches(".blue {").count(), 1);
    }

    #[test]
    fn nearby_colors_do_not_share_a_variable() {
        let css = render(&["#ff0000", "#fe0000"], &[]);
        assert_eq!(css.matches("$red:").count(), 1);
        assert!(css.contains("$red: #ff0000;"));
        assert!(css.contains("$red-2: #fe0000;"));
        assert_eq!(css.matches(".red-2 {").count(), 1);
    }

    #[test]
    fn one_empty_block_per_section_in_order() {
        let css = render(&[], &["intro", "gallery", "contact"]);
        for section in ["intro", "gallery", "contact"] {
            assert_eq!(css.matches(&format!("#{section} {{\n}}")).count(), 1);
        }
        let intro = css.find("#intro {").unwrap();
        let gallery = css.find("#gallery {").unwrap();
        let contact = css.find("#contact {").unwrap();
        assert!(intro < gallery && gallery < contact);
    }

    #[test]
    fn markers_appear_in_order() {
        let css = render(&["#000"], &[]);
        let positions: Vec<_> = ["GLOBAL", "COLORS", "HEADER", "MAIN", "FOOTER", "RESPONSIVE"]
            .iter()
            .map(|label| css.find(&format!("// {label}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn responsive_block_is_fixed() {
        let a = render(&[], &[]);
        let b = render(&["#123456"], &["x"]);
        let tail = |s: &str| s[s.find("// RESPONSIVE").unwrap()..].to_string();
        assert_eq!(tail(&a), tail(&b));
        assert!(a.contains("(max-width: 600px)"));
        assert!(a.contains("(min-width: 601px) and (max-width: 992px)"));
        assert!(a.contains("(min-width: 1201px)"));
    }

    #[test]
    fn imports_vendored_framework() {
        assert!(render(&[], &[]).contains("@import \"materialize/materialize\";"));
    }
}
