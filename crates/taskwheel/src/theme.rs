use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid hex color `{0}`: {1}")]
    InvalidHex(String, palette::rgb::FromHexError),
}

/// A `#rrggbb` (or `#rgb`) color as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    pub fn with_alpha(self, alpha: f64) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(alpha)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|e| ThemeError::InvalidHex(s.to_string(), e))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Theme section as written; each entry is resolved on its own so one bad color
/// only falls back that color.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeEntries {
    wheel: Option<String>,
    guide: Option<String>,
    petal: Option<String>,
    outline: Option<String>,
    text: Option<String>,
}

fn resolve(key: &str, entry: Option<String>, fallback: HexColor) -> HexColor {
    entry.map_or(fallback, |s| {
        s.parse().unwrap_or_else(|e| {
            log::warn!("theme.{}: {}, using {}", key, e, fallback);
            fallback
        })
    })
}

impl From<ThemeEntries> for ThemeConfig {
    fn from(entries: ThemeEntries) -> Self {
        let fallback = Self::default();
        Self {
            wheel: resolve("wheel", entries.wheel, fallback.wheel),
            guide: resolve("guide", entries.guide, fallback.guide),
            petal: resolve("petal", entries.petal, fallback.petal),
            outline: resolve("outline", entries.outline, fallback.outline),
            text: resolve("text", entries.text, fallback.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "ThemeEntries")]
pub struct ThemeConfig {
    pub wheel: HexColor,
    pub guide: HexColor,
    pub petal: HexColor,
    pub outline: HexColor,
    pub text: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            wheel: HexColor::rgb(0x26, 0x26, 0x26),
            guide: HexColor::rgb(0x5a, 0x5a, 0x5a),
            petal: HexColor::rgb(0x66, 0x66, 0xcc),
            outline: HexColor::rgb(0xe0, 0xe0, 0xe0),
            text: HexColor::rgb(0xff, 0xff, 0xff),
        }
    }
}

pub struct ThemeColors {
    pub wheel: Srgba<f64>,
    pub guide: Srgba<f64>,
    pub petal: Srgba<f64>,
    pub outline: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            wheel: theme.wheel.with_alpha(0.5),
            guide: theme.guide.with_alpha(0.6),
            petal: theme.petal.with_alpha(0.9),
            outline: theme.outline.with_alpha(0.85),
            text: theme.text.with_alpha(1.0),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
