//! Generators - write rendered documents into the project.
//!
//! Rendering is pure (`domain::render`); these types only decide where the
//! output goes and push it through the `Filesystem` port, overwriting
//! whatever placeholder was there.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{
        NamedColor, ScaffoldOptions,
        layout::{HTACCESS, HTML_ENTRY, MAIN_STYLESHEET, ROBOTS, SITEMAP},
        render,
    },
    error::SitecraftResult,
};

fn write(filesystem: &dyn Filesystem, root: &Path, relative: &str, content: &str) -> SitecraftResult<PathBuf> {
    let path = root.join(relative);
    filesystem.write_file(&path, content.as_bytes())?;
    debug!(path = %path.display(), bytes = content.len(), "Generated");
    Ok(path)
}

/// Writes the stylesheet and the HTML entry page.
pub struct TemplateGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    pub fn write_stylesheet(
        &self,
        root: &Path,
        options: &ScaffoldOptions,
        colors: &[NamedColor],
    ) -> SitecraftResult<PathBuf> {
        let css = render::render_stylesheet(options, colors);
        write(self.filesystem, root, MAIN_STYLESHEET, &css)
    }

    pub fn write_html(
        &self,
        root: &Path,
        options: &ScaffoldOptions,
        colors: &[NamedColor],
    ) -> SitecraftResult<PathBuf> {
        let html = render::render_html(options, colors);
        write(self.filesystem, root, HTML_ENTRY, &html)
    }
}

/// Writes the server and crawler files.
pub struct StaticFileGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> StaticFileGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    pub fn write_htaccess(&self, root: &Path) -> SitecraftResult<PathBuf> {
        write(self.filesystem, root, HTACCESS, &render::render_htaccess())
    }

    pub fn write_robots(&self, root: &Path, options: &ScaffoldOptions) -> SitecraftResult<PathBuf> {
        write(self.filesystem, root, ROBOTS, &render::render_robots(options))
    }

    pub fn write_sitemap(&self, root: &Path, options: &ScaffoldOptions) -> SitecraftResult<PathBuf> {
        write(self.filesystem, root, SITEMAP, &render::render_sitemap(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockFilesystem;
    use crate::error::ErrorKind;
    use mockall::predicate::eq;

    fn options() -> ScaffoldOptions {
        ScaffoldOptions::builder().name("demo").sitemap(true).build().unwrap()
    }

    #[test]
    fn stylesheet_goes_to_sass_main() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("demo/sass/main.scss")
                    && String::from_utf8_lossy(content).contains("// GLOBAL")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let path = TemplateGenerator::new(&fs)
            .write_stylesheet(Path::new("demo"), &options(), &[])
            .unwrap();
        assert_eq!(path, PathBuf::from("demo/sass/main.scss"));
    }

    #[test]
    fn html_goes_to_index() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("demo/index.html") && content.starts_with(b"<!DOCTYPE html>")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        TemplateGenerator::new(&fs)
            .write_html(Path::new("demo"), &options(), &[])
            .unwrap();
    }

    #[test]
    fn static_files_use_fixed_names() {
        let mut fs = MockFilesystem::new();
        for name in [".htaccess", "robots.txt", "sitemap.xml"] {
            fs.expect_write_file()
                .with(eq(Path::new("site").join(name)), mockall::predicate::always())
                .times(1)
                .returning(|_, _| Ok(()));
        }

        let generator = StaticFileGenerator::new(&fs);
        let root = Path::new("site");
        generator.write_htaccess(root).unwrap();
        generator.write_robots(root, &options()).unwrap();
        generator.write_sitemap(root, &options()).unwrap();
    }

    #[test]
    fn io_errors_propagate() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemFailure {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let err = StaticFileGenerator::new(&fs)
            .write_htaccess(Path::new("demo"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FilesystemFailure);
    }
}
