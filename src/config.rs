//! Gauge configuration, command-line arguments and font lookup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bon::Builder;
use clap::Parser;
use rusttype::Font;
use tracing::{info, warn};

use crate::color::Color;
use crate::easing::Easing;
use crate::error::GaugeError;
use crate::geometry::ScreenLayout;
use crate::pressure::Pressure;

/// Fonts tried in order when no font path is configured.
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    #[builder(into, default = "Pressure Gauge".to_string())]
    pub title: String,
    #[builder(default = Pressure::ZERO)]
    pub initial_pressure: Pressure,

    // Dial
    #[builder(default = 300.0)]
    pub gauge_size: f64,
    #[builder(default = 40.0)]
    pub gauge_width: f64,
    #[builder(default = 20.0)]
    pub gauge_padding: f64,
    #[builder(default = 2.0)]
    pub segment_stroke: f32,

    // Needle
    #[builder(default = 4.0)]
    pub hub_radius: f64,
    #[builder(default = 4.0)]
    pub needle_margin: f64,
    #[builder(default = 2.0)]
    pub needle_width: f32,

    // Readout
    #[builder(default = 50.0)]
    pub readout_offset: f64,
    #[builder(default = 30.0)]
    pub readout_font_size: f32,

    // Animation
    #[builder(default = 500)]
    pub animation_ms: u64,
    #[builder(default)]
    pub easing: Easing,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Controls
    #[builder(default = 2000)]
    pub toast_ms: u64,
    #[builder(default = 18.0)]
    pub ui_font_size: f32,

    // Colors
    #[builder(default = Color::WHITE)]
    pub background_color: Color,
    #[builder(default = Color::RED)]
    pub segment_color: Color,
    #[builder(default = Color::BLACK)]
    pub needle_color: Color,
    #[builder(default = Color::BLACK)]
    pub text_color: Color,
    #[builder(default = Color::new(0x62, 0x00, 0xee))]
    pub accent_color: Color,

    #[builder(into)]
    pub font_path: Option<PathBuf>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<(), GaugeError> {
        if !(self.gauge_size > 0.0) {
            return Err(GaugeError::Config(format!(
                "gauge size must be positive, got {}",
                self.gauge_size
            )));
        }
        if !(self.gauge_width > 0.0 && self.gauge_width < self.gauge_size / 2.0) {
            return Err(GaugeError::Config(format!(
                "ring width must be positive and smaller than the radius ({}), got {}",
                self.gauge_size / 2.0,
                self.gauge_width
            )));
        }
        if self.gauge_padding < 0.0 {
            return Err(GaugeError::Config("padding must not be negative".into()));
        }
        if !(self.max_framerate > 0.0) {
            return Err(GaugeError::Config(format!(
                "frame rate must be positive, got {}",
                self.max_framerate
            )));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.max_framerate)
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self)
    }

    /// Load the configured font, or the first system font found. A missing
    /// configured font is an error; a missing fallback only disables text.
    pub fn load_font(&self) -> Result<Option<Font<'static>>, GaugeError> {
        if let Some(path) = &self.font_path {
            let font = read_font(path)?;
            info!(path = %path.display(), "loaded font");
            return Ok(Some(font));
        }
        for candidate in FONT_SEARCH_PATHS.iter().map(Path::new) {
            if !candidate.is_file() {
                continue;
            }
            match read_font(candidate) {
                Ok(font) => {
                    info!(path = %candidate.display(), "loaded system font");
                    return Ok(Some(font));
                }
                Err(err) => warn!(error = %err, "skipping system font"),
            }
        }
        warn!("no usable font found, text will not be drawn (use --font)");
        Ok(None)
    }
}

fn read_font(path: &Path) -> Result<Font<'static>, GaugeError> {
    let data = std::fs::read(path).map_err(|source| GaugeError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| GaugeError::InvalidFont(path.to_path_buf()))
}

/// Command-line arguments of the `pressure-gauge` binary.
#[derive(Debug, Parser)]
#[command(name = "pressure-gauge", version, about = "Animated pressure gauge with manual input")]
pub struct AppArgs {
    /// Window title
    #[arg(long, default_value = "Pressure Gauge")]
    pub title: String,

    /// Dial diameter in pixels
    #[arg(long, default_value_t = 300.0)]
    pub size: f64,

    /// Ring width in pixels
    #[arg(long, default_value_t = 40.0)]
    pub ring_width: f64,

    /// Needle animation duration in milliseconds
    #[arg(long, default_value_t = 500)]
    pub duration_ms: u64,

    /// Needle easing curve (bounce or linear)
    #[arg(long, default_value_t = Easing::Bounce)]
    pub easing: Easing,

    /// TrueType/OpenType font used for all text
    #[arg(long, env = "GAUGE_FONT")]
    pub font: Option<PathBuf>,

    /// Pressure shown at startup (0-100)
    #[arg(long, default_value = "0", value_parser = Pressure::parse)]
    pub pressure: Pressure,

    /// Submit each line read from stdin as if typed and applied
    #[arg(long)]
    pub stdin: bool,
}

impl AppArgs {
    pub fn to_config(&self) -> GaugeConfig {
        GaugeConfig::builder()
            .title(self.title.clone())
            .initial_pressure(self.pressure)
            .gauge_size(self.size)
            .gauge_width(self.ring_width)
            .animation_ms(self.duration_ms)
            .easing(self.easing)
            .maybe_font_path(self.font.clone())
            .build()
    }
}
