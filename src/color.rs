//! RGB colors and the angular severity gradient.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
    pub const YELLOW: Color = Color::new(0xff, 0xff, 0x00);
    pub const GREY: Color = Color::new(0x80, 0x80, 0x80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Angular gradient around a center point.
///
/// Stop positions are fractions of a full turn measured clockwise from +x,
/// so a pixel's color depends only on its absolute angle. Before the first
/// stop the first color holds, after the last stop the last color holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    stops: Vec<(f64, Color)>,
}

impl SweepGradient {
    pub fn new(mut stops: Vec<(f64, Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Green at 40%, yellow at 80%, red at 99% of the turn.
    pub fn severity() -> Self {
        Self::new(vec![
            (0.4, Color::GREEN),
            (0.8, Color::YELLOW),
            (0.99, Color::RED),
        ])
    }

    pub fn stops(&self) -> &[(f64, Color)] {
        &self.stops
    }

    pub fn color_at(&self, fraction: f64) -> Color {
        let (Some(&(first_pos, first)), Some(&(last_pos, last))) =
            (self.stops.first(), self.stops.last())
        else {
            return Color::BLACK;
        };
        if fraction <= first_pos {
            return first;
        }
        if fraction >= last_pos {
            return last;
        }
        self.stops
            .windows(2)
            .find(|pair| fraction <= pair[1].0)
            .map(|pair| {
                let ((p0, c0), (p1, c1)) = (pair[0], pair[1]);
                c0.lerp(c1, (fraction - p0) / (p1 - p0))
            })
            .unwrap_or(last)
    }

    /// Color for a screen angle in degrees (any range).
    pub fn color_at_degrees(&self, degrees: f64) -> Color {
        self.color_at(degrees.rem_euclid(360.0) / 360.0)
    }
}
