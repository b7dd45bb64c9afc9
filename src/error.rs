use std::path::PathBuf;

/// Message shown to the user for any rejected commit.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid range";

/// Rejected pressure input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The raw text is not a whole number.
    #[error("`{0}` is not a whole number")]
    Parse(String),

    /// The number lies outside 0..=100.
    #[error("{0} is outside the accepted range 0..=100")]
    Range(i64),
}

impl InputError {
    /// Both kinds share one notification text.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Errors raised while configuring or running the gauge window.
#[derive(Debug, thiserror::Error)]
pub enum GaugeError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("could not read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} does not contain a usable TrueType/OpenType font")]
    InvalidFont(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(String),
}
