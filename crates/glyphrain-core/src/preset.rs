//! Named rain looks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RainConfig;

/// Built-in rain presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Classic,
    Crimson,
    LargeTiles,
    SmallTiles,
    Binary,
    SlowFade,
    Ocean,
    Amethyst,
}

impl Preset {
    /// All presets in cycle order.
    pub const ALL: [Preset; 8] = [
        Preset::Classic,
        Preset::Crimson,
        Preset::LargeTiles,
        Preset::SmallTiles,
        Preset::Binary,
        Preset::SlowFade,
        Preset::Ocean,
        Preset::Amethyst,
    ];

    /// Cycle to the next preset.
    pub fn next(&self) -> Self {
        match self {
            Preset::Classic => Preset::Crimson,
            Preset::Crimson => Preset::LargeTiles,
            Preset::LargeTiles => Preset::SmallTiles,
            Preset::SmallTiles => Preset::Binary,
            Preset::Binary => Preset::SlowFade,
            Preset::SlowFade => Preset::Ocean,
            Preset::Ocean => Preset::Amethyst,
            Preset::Amethyst => Preset::Classic,
        }
    }

    /// Stable name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Crimson => "crimson",
            Preset::LargeTiles => "large-tiles",
            Preset::SmallTiles => "small-tiles",
            Preset::Binary => "binary",
            Preset::SlowFade => "slow-fade",
            Preset::Ocean => "ocean",
            Preset::Amethyst => "amethyst",
        }
    }

    /// Full rain settings for this preset.
    pub fn config(&self) -> RainConfig {
        let green_on_black = RainConfig {
            background_color: "#000000".to_string(),
            font_color: "#00FF00".to_string(),
            glow_color: "#00FF00".to_string(),
            ..RainConfig::default()
        };

        match self {
            Preset::Classic => RainConfig::default(),
            Preset::Crimson => RainConfig {
                background_color: "#000000".to_string(),
                font_color: "#FF0000".to_string(),
                glow_color: "#FF4444".to_string(),
                ..RainConfig::default()
            },
            Preset::LargeTiles => RainConfig {
                tile_size: 30,
                ..green_on_black
            },
            Preset::SmallTiles => RainConfig {
                tile_size: 12,
                ..green_on_black
            },
            Preset::Binary => RainConfig {
                tile_set: Some(RainConfig::tiles_from_chars("01")),
                ..green_on_black
            },
            Preset::SlowFade => RainConfig {
                fade_factor: 0.1,
                ..green_on_black
            },
            Preset::Ocean => RainConfig {
                background_color: "#000033".to_string(),
                font_color: "#0088FF".to_string(),
                glow_color: "#00AAFF".to_string(),
                tile_set: Some(RainConfig::tiles_from_chars("@#$%&*")),
                ..RainConfig::default()
            },
            Preset::Amethyst => RainConfig {
                tile_size: 25,
                fade_factor: 0.3,
                background_color: "#1a0033".to_string(),
                font_color: "#9933ff".to_string(),
                glow_color: "#bf80ff".to_string(),
                ..RainConfig::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
                format!("unknown preset '{s}', expected one of: {}", names.join(", "))
            })
    }
}
