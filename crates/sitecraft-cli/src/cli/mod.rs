//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sitecraft",
    bin_name = "sitecraft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Materialize website scaffolding",
    long_about = "Sitecraft creates a ready-to-edit static website: directory skeleton, \
                  Materialize sources, jQuery, a colour-aware stylesheet, an HTML page \
                  and optional server and crawler files.",
    after_help = "EXAMPLES:\n\
        \x20 sitecraft new demo -y -c '#ff0000' -s intro contact\n\
        \x20 sitecraft new shop --title 'My Shop' --no-jquery\n\
        \x20 sitecraft config get presets.lang\n\
        \x20 sitecraft completions bash > /usr/share/bash-completion/completions/sitecraft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new website.
    #[command(
        visible_alias = "n",
        about = "Create a new website",
        after_help = "EXAMPLES:\n\
            \x20 sitecraft new demo -y\n\
            \x20 sitecraft new demo -c '#ff0000' '#00ff00' -s intro contact\n\
            \x20 sitecraft new demo --lang ar --direction rtl --no-sitemap"
    )]
    New(NewArgs),

    /// Initialise a Sitecraft configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sitecraft init           # user config directory\n\
            \x20 sitecraft init --local   # .sitecraft.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sitecraft completions bash > ~/.local/share/bash-completion/completions/sitecraft\n\
            \x20 sitecraft completions zsh  > ~/.zfunc/_sitecraft\n\
            \x20 sitecraft completions fish > ~/.config/fish/completions/sitecraft.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sitecraft configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sitecraft config get presets.lang\n\
            \x20 sitecraft config list\n\
            \x20 sitecraft config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sitecraft new`.
///
/// Every option left unset is asked for interactively, or taken from the
/// configured presets with `--yes`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Directory created under the current directory.
    #[arg(value_name = "NAME", help = "Project directory name")]
    pub name: String,

    /// Accept presets for everything not given on the command line.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and use presets")]
    pub yes: bool,

    #[arg(short = 't', long = "title", value_name = "TEXT", help = "Page title")]
    pub title: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Page description"
    )]
    pub description: Option<String>,

    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "Canonical site URL"
    )]
    pub url: Option<String>,

    #[arg(
        short = 'l',
        long = "lang",
        value_name = "CODE",
        help = "Language code, e.g. en"
    )]
    pub lang: Option<String>,

    #[arg(
        long = "direction",
        value_name = "DIR",
        value_enum,
        help = "Text direction"
    )]
    pub direction: Option<TextDirection>,

    /// Theme colours in `#rrggbb` or `#rgb` form. `-c` alone means none.
    #[arg(
        short = 'c',
        long = "color",
        value_name = "HEX",
        num_args = 0..,
        help = "Theme colours (#rrggbb)"
    )]
    pub colors: Option<Vec<String>>,

    /// Page section identifiers. `-s` alone means none.
    #[arg(
        short = 's',
        long = "section",
        value_name = "ID",
        num_args = 0..,
        help = "Page sections"
    )]
    pub sections: Option<Vec<String>>,

    #[arg(
        short = 'o',
        long = "opengraph",
        overrides_with = "no_opengraph",
        help = "Add OpenGraph tags"
    )]
    pub opengraph: bool,
    #[arg(long = "no-opengraph", overrides_with = "opengraph", help = "Omit OpenGraph tags")]
    pub no_opengraph: bool,

    #[arg(
        short = 'j',
        long = "jquery",
        overrides_with = "no_jquery",
        help = "Download jQuery"
    )]
    pub jquery: bool,
    #[arg(long = "no-jquery", overrides_with = "jquery", help = "Skip jQuery")]
    pub no_jquery: bool,

    #[arg(long = "htaccess", overrides_with = "no_htaccess", help = "Write .htaccess")]
    pub htaccess: bool,
    #[arg(long = "no-htaccess", overrides_with = "htaccess", help = "Skip .htaccess")]
    pub no_htaccess: bool,

    #[arg(
        short = 'r',
        long = "robots",
        overrides_with = "no_robots",
        help = "Write robots.txt"
    )]
    pub robots: bool,
    #[arg(long = "no-robots", overrides_with = "robots", help = "Skip robots.txt")]
    pub no_robots: bool,

    #[arg(long = "sitemap", overrides_with = "no_sitemap", help = "Write sitemap.xml")]
    pub sitemap: bool,
    #[arg(long = "no-sitemap", overrides_with = "sitemap", help = "Skip sitemap.xml")]
    pub no_sitemap: bool,
}

impl NewArgs {
    pub fn opengraph_flag(&self) -> Option<bool> {
        switch(self.opengraph, self.no_opengraph)
    }

    pub fn jquery_flag(&self) -> Option<bool> {
        switch(self.jquery, self.no_jquery)
    }

    pub fn htaccess_flag(&self) -> Option<bool> {
        switch(self.htaccess, self.no_htaccess)
    }

    pub fn robots_flag(&self) -> Option<bool> {
        switch(self.robots, self.no_robots)
    }

    pub fn sitemap_flag(&self) -> Option<bool> {
        switch(self.sitemap, self.no_sitemap)
    }
}

/// `--x` / `--no-x` pair to tri-state; `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Text direction accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sitecraft init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.sitecraft.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sitecraft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sitecraft config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `presets.lang`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
