// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sitecraft.
//!
//! This module contains pure logic with no I/O. Fetching, unpacking and
//! writing are reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: options are validated once and never mutated
//! - **Pure rules**: colour naming, archive routing and rendering are plain
//!   functions of their inputs
//!
// Public API - what the world sees
pub mod archive;
pub mod color;
pub mod entities;
pub mod error;
pub mod render;
pub mod value_objects;

// Static data - reached through `color`
mod color_names;

// Re-exports for convenience
pub use archive::{EntryPath, EntryRoute, route_entry};
pub use color::{ColorClassifier, HexColor, NamedColor};
pub use entities::{
    layout::{self, AssetSources},
    options::{ScaffoldOptions, ScaffoldOptionsBuilder},
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{CanonicalUrl, Direction, LanguageCode, ProjectName, SectionId};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module scenario
    // ========================================================================

    #[test]
    fn demo_scenario_renders_consistently() {
        let options = ScaffoldOptions::builder()
            .name("demo")
            .colors(["#ff0000"])
            .sections(["intro", "contact"])
            .opengraph(true)
            .build()
            .unwrap();

        let colors = ColorClassifier::classify(options.colors());
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "red");

        let css = render::render_stylesheet(&options, &colors);
        assert_eq!(css.matches("$red: #ff0000;").count(), 1);
        assert!(css.contains("#intro {\n}"));
        assert!(css.contains("#contact {\n}"));

        let html = render::render_html(&options, &colors);
        assert!(html.contains("<!-- OpenGraph -->"));
        assert!(html.contains("content=\"#ff0000\""));
        assert_eq!(html.matches("<section ").count(), 2);
    }

    #[test]
    fn empty_colors_render_no_color_artifacts() {
        let options = ScaffoldOptions::builder()
            .name("plain")
            .sections(["a"])
            .build()
            .unwrap();
        let colors = ColorClassifier::classify(options.colors());

        assert!(colors.is_empty());
        assert!(!render::render_stylesheet(&options, &colors).contains("// COLORS"));
        assert!(!render::render_html(&options, &colors).contains("theme-color"));
    }
}
