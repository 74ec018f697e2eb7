use std::fmt::Write as _;

use super::escape_html;
use crate::domain::entities::{layout::SITEMAP, options::ScaffoldOptions};

/// Render `.htaccess`: HTTPS redirect, compression, caching, custom 404.
pub fn render_htaccess() -> String {
    let mut out = String::new();

    out.push_str("# Disable directory listing\n");
    out.push_str("Options -Indexes\n\n");

    out.push_str("# Force HTTPS\n");
    out.push_str("<IfModule mod_rewrite.c>\n");
    out.push_str("  RewriteEngine On\n");
    out.push_str("  RewriteCond %{HTTPS} off\n");
    out.push_str("  RewriteRule ^(.*)$ https://%{HTTP_HOST}%{REQUEST_URI} [L,R=301]\n");
    out.push_str("</IfModule>\n\n");

    out.push_str("# Compression\n");
    out.push_str("<IfModule mod_deflate.c>\n");
    out.push_str(
        "  AddOutputFilterByType DEFLATE text/html text/plain text/css text/xml application/xml\n",
    );
    out.push_str("  AddOutputFilterByType DEFLATE application/javascript image/svg+xml\n");
    out.push_str("</IfModule>\n\n");

    out.push_str("# Browser caching\n");
    out.push_str("<IfModule mod_expires.c>\n");
    out.push_str("  ExpiresActive On\n");
    out.push_str("  ExpiresDefault \"access plus 1 month\"\n");
    out.push_str("  ExpiresByType text/html \"access plus 0 seconds\"\n");
    out.push_str("  ExpiresByType text/css \"access plus 1 year\"\n");
    out.push_str("  ExpiresByType application/javascript \"access plus 1 year\"\n");
    out.push_str("  ExpiresByType image/jpeg \"access plus 1 year\"\n");
    out.push_str("  ExpiresByType image/png \"access plus 1 year\"\n");
    out.push_str("  ExpiresByType image/svg+xml \"access plus 1 year\"\n");
    out.push_str("</IfModule>\n\n");

    out.push_str("# Errors\n");
    out.push_str("ErrorDocument 404 /index.html\n");

    out
}

/// Render `robots.txt`. Points crawlers at the sitemap when one is generated.
pub fn render_robots(options: &ScaffoldOptions) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    if options.sitemap() {
        let _ = writeln!(out, "\nSitemap: {}", options.url().join(SITEMAP));
    }
    out
}

/// Render `sitemap.xml` with the canonical URL as its single location.
pub fn render_sitemap(options: &ScaffoldOptions) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    out.push_str("  <url>\n");
    let _ = writeln!(out, "    <loc>{}</loc>", escape_html(&options.url().root()));
    if let Some(date) = options.last_modified() {
        let _ = writeln!(out, "    <lastmod>{}</lastmod>", date.format("%Y-%m-%d"));
    }
    out.push_str("    <changefreq>monthly</changefreq>\n");
    out.push_str("    <priority>1.0</priority>\n");
    out.push_str("  </url>\n");
    out.push_str("</urlset>\n");

    out
}
