//! Gauge geometry and window layout, all in buffer pixels.

use crate::config::GaugeConfig;
use crate::pressure::START_ANGLE;

pub const SEGMENT_COUNT: usize = 5;
/// Angular width of one background segment, degrees.
pub const SEGMENT_SWEEP: f64 = 28.0;
/// Angular gap between background segments, degrees.
pub const SEGMENT_GAP: f64 = 5.0;

/// An angular interval: `start` plus a signed `sweep`, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub sweep: f64,
}

impl ArcSpan {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub hub_radius: f64,
    pub needle_length: f64,
}

impl GaugeGeometry {
    /// `origin` is the top-left corner of the square the dial fills.
    pub fn new(origin: (f64, f64), diameter: f64, ring_width: f64, hub_radius: f64, needle_margin: f64) -> Self {
        let outer_radius = diameter / 2.0;
        Self {
            cx: origin.0 + outer_radius,
            cy: origin.1 + outer_radius,
            outer_radius,
            inner_radius: outer_radius - ring_width,
            hub_radius,
            needle_length: outer_radius - ring_width - needle_margin,
        }
    }

    pub fn ring_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// The fixed red outline segments.
    pub fn background_segments(&self) -> [ArcSpan; SEGMENT_COUNT] {
        std::array::from_fn(|i| ArcSpan {
            start: START_ANGLE + (SEGMENT_SWEEP + SEGMENT_GAP) * i as f64,
            sweep: SEGMENT_SWEEP,
        })
    }

    /// Filled level arc for a displayed needle angle.
    pub fn level_span(&self, angle: f64) -> ArcSpan {
        ArcSpan {
            start: START_ANGLE,
            sweep: angle - START_ANGLE,
        }
    }

    pub fn needle_tip(&self, angle: f64) -> (f64, f64) {
        self.point_at(angle, self.needle_length)
    }

    pub fn point_at(&self, degrees: f64, radius: f64) -> (f64, f64) {
        let rad = degrees.to_radians();
        (self.cx + rad.cos() * radius, self.cy + rad.sin() * radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rect of the given size centered horizontally on `cx` with its top at `y`.
    pub fn centered(cx: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, y, width, height)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

const SPACER: f64 = 10.0;
const INPUT_SIZE: (f64, f64) = (280.0, 56.0);
const BUTTON_SIZE: (f64, f64) = (96.0, 36.0);
const TOAST_HEIGHT: f64 = 32.0;

/// Column layout: gauge, text field, button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub width: u32,
    pub height: u32,
    pub gauge: GaugeGeometry,
    pub input: Rect,
    pub button: Rect,
    /// Vertical center of the notification toast.
    pub toast_y: f64,
}

impl ScreenLayout {
    pub fn new(config: &GaugeConfig) -> Self {
        let padding = config.gauge_padding;
        let gauge_box = config.gauge_size + 2.0 * padding;
        let width = gauge_box.max(INPUT_SIZE.0 + 2.0 * padding);
        let cx = width / 2.0;

        let gauge = GaugeGeometry::new(
            (cx - config.gauge_size / 2.0, padding),
            config.gauge_size,
            config.gauge_width,
            config.hub_radius,
            config.needle_margin,
        );
        let input = Rect::centered(cx, gauge_box + SPACER, INPUT_SIZE.0, INPUT_SIZE.1);
        let button = Rect::centered(cx, input.y + input.height + SPACER, BUTTON_SIZE.0, BUTTON_SIZE.1);
        let height = button.y + button.height + padding;

        Self {
            width: width.ceil() as u32,
            height: height.ceil() as u32,
            gauge,
            input,
            button,
            toast_y: gauge_box - padding - TOAST_HEIGHT,
        }
    }
}
