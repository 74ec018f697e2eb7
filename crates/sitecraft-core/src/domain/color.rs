//! Colour parsing and naming.
//!
//! A user supplies raw hex values; the stylesheet and HTML need stable,
//! slug-safe identifiers for them. [`ColorClassifier`] maps each value to the
//! nearest entry of the standard colour-name table in [`super::color_names`]
//! using the Name-That-Color metric (RGB distance plus weighted HSL distance).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::color_names::COLOR_NAMES;
use crate::domain::error::DomainError;

// ── HexColor ─────────────────────────────────────────────────────────────────

/// A parsed `#rgb` / `#rrggbb` colour.
///
/// Keeps the user's spelling for display; equality and hashing use the RGB
/// triple, so `#f00` and `#FF0000` are the same colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgb: [u8; 3],
}

impl HexColor {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref().trim();
        let invalid = |reason: &str| DomainError::InvalidColor {
            value: raw.to_string(),
            reason: reason.into(),
        };

        let digits = raw.strip_prefix('#').unwrap_or(raw);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid("expected 3 or 6 hex digits")),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| invalid("expected hexadecimal digits"))
        };

        Ok(Self {
            raw: raw.to_string(),
            rgb: [channel(0)?, channel(2)?, channel(4)?],
        })
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            raw: String::new(),
            rgb: [r, g, b],
        }
    }

    /// The value as the user typed it (falls back to the hex form).
    pub fn raw(&self) -> String {
        if self.raw.is_empty() {
            self.hex()
        } else {
            self.raw.clone()
        }
    }

    /// Normalised lower-case `#rrggbb`.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// HSL triple scaled to 0–255 per channel.
    fn hsl(&self) -> [f64; 3] {
        let [r, g, b] = self.rgb.map(|c| f64::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta > 0.0 && l > 0.0 && l < 1.0 {
            delta / if l < 0.5 { 2.0 * l } else { 2.0 - 2.0 * l }
        } else {
            0.0
        };

        let h = if delta > 0.0 {
            let sector = if max == r {
                (g - b) / delta
            } else if max == g {
                2.0 + (b - r) / delta
            } else {
                4.0 + (r - g) / delta
            };
            (sector / 6.0).rem_euclid(1.0)
        } else {
            0.0
        };

        [h * 255.0, s * 255.0, l * 255.0]
    }

    /// Name-That-Color distance: squared RGB distance + 2 × squared HSL distance.
    fn distance(&self, other: &Self) -> f64 {
        let rgb: f64 = self
            .rgb
            .iter()
            .zip(other.rgb.iter())
            .map(|(a, b)| (f64::from(*a) - f64::from(*b)).powi(2))
            .sum();
        let hsl: f64 = self
            .hsl()
            .iter()
            .zip(other.hsl().iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        rgb + 2.0 * hsl
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for HexColor {}

impl std::hash::Hash for HexColor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.hex()
    }
}

// ── NamedColor ───────────────────────────────────────────────────────────────

/// A colour paired with its slug-safe display name (`#ff0000` → `red`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub color: HexColor,
    pub name: String,
}

impl NamedColor {
    pub fn hex(&self) -> String {
        self.color.hex()
    }
}

// ── ColorClassifier ──────────────────────────────────────────────────────────

/// Maps raw colours to [`NamedColor`]s. Pure: no I/O, no state.
pub struct ColorClassifier;

impl ColorClassifier {
    /// Classify every colour, preserving order and cardinality.
    ///
    /// Distinct colours that land on the same table entry get numbered
    /// (`red`, `red-2`) so each one keeps its own Sass variable and classes.
    pub fn classify(colors: &[HexColor]) -> Vec<NamedColor> {
        let mut claimed: HashMap<String, Vec<[u8; 3]>> = HashMap::new();

        colors
            .iter()
            .map(|color| {
                let base = Self::name_of(color);
                let owners = claimed.entry(base.clone()).or_default();
                let rank = match owners.iter().position(|rgb| *rgb == color.rgb) {
                    Some(rank) => rank,
                    None => {
                        owners.push(color.rgb);
                        owners.len() - 1
                    }
                };
                let name = if rank == 0 {
                    base
                } else {
                    format!("{base}-{}", rank + 1)
                };
                NamedColor {
                    color: color.clone(),
                    name,
                }
            })
            .collect()
    }

    /// Slug of the closest standard colour name.
    pub fn name_of(color: &HexColor) -> String {
        slugify(Self::nearest(color))
    }

    /// Closest table entry's display name. Exact matches short-circuit; ties
    /// keep the earlier entry.
    pub fn nearest(color: &HexColor) -> &'static str {
        let mut best: Option<(&'static str, f64)> = None;

        for &(name, value) in COLOR_NAMES {
            let candidate = HexColor::from_rgb(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            );
            if candidate.rgb == color.rgb {
                return name;
            }
            let d = color.distance(&candidate);
            if best.is_none_or(|(_, current)| d < current) {
                best = Some((name, d));
            }
        }

        best.map_or("unknown", |(name, _)| name)
    }
}

/// Lower-case, drop apostrophes, and join the remaining words with single
/// hyphens (`"Robin's Egg Blue"` → `robins-egg-blue`, `"Cyan / Aqua"` →
/// `cyan-aqua`).
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
