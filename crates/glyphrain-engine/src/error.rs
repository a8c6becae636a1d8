//! Configuration errors raised before anything is drawn.

/// A rain configuration that cannot be rendered.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid background color. Use a hex value e.g. #030303")]
    InvalidBackgroundColor,

    #[error("Invalid font color. Use a hex value e.g. #030303")]
    InvalidFontColor,

    #[error("Invalid tile size {0}. Use at least 3 pixels")]
    InvalidTileSize(u32),

    #[error("Invalid fade factor {0}. Use a value between 0 and 1")]
    InvalidFadeFactor(f64),

    #[error("Invalid frame rate {0}. Use at least 1 frame per second")]
    InvalidFps(u32),
}
