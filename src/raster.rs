// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::color::{Color, SweepGradient};

/// An RGBA8 frame buffer with anti-aliased drawing operations.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `height` is clamped to the rows `frame` actually holds.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let height = height.min(frame.len() / (width * 4).max(1));
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(self.frame[idx], self.frame[idx + 1], self.frame[idx + 2]))
    }

    /// Alpha-blend `color` over the pixel at (x, y). Out-of-bounds is a no-op.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
        let out = [
            mix(color.r, self.frame[idx]),
            mix(color.g, self.frame[idx + 1]),
            mix(color.b, self.frame[idx + 2]),
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }

    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, thickness: f32, color: Color) {
        let half = thickness as f64 / 2.0;
        let pad = thickness.ceil() as f64 + 1.0;
        let (min_x, max_x) = ((x0.min(x1) - pad).floor() as i32, (x0.max(x1) + pad).ceil() as i32);
        let (min_y, max_y) = ((y0.min(y1) - pad).floor() as i32, (y0.max(y1) + pad).ceil() as i32);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len_sq = dx * dx + dy * dy;
        for y in min_y.max(0)..=max_y.min(self.height as i32 - 1) {
            for x in min_x.max(0)..=max_x.min(self.width as i32 - 1) {
                let (px, py) = (x as f64 - x0, y as f64 - y0);
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dist = ((x0 + t * dx - x as f64).powi(2) + (y0 + t * dy - y as f64).powi(2)).sqrt();
                let aa = 1.0 - (dist - half).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend(x, y, color, aa as f32);
                }
            }
        }
    }

    /// Stroke a circular arc as a polyline of roughly one-degree steps.
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_deg: f64, sweep_deg: f64, thickness: f32, color: Color) {
        let steps = (sweep_deg.abs().ceil() as usize).max(1);
        let at = |i: usize| {
            let rad = (start_deg + sweep_deg * i as f64 / steps as f64).to_radians();
            (cx + rad.cos() * radius, cy + rad.sin() * radius)
        };
        let mut prev = at(0);
        for i in 1..=steps {
            let next = at(i);
            self.line(prev.0, prev.1, next.0, next.1, thickness, color);
            prev = next;
        }
    }

    /// Closed outline of a ring segment: outer arc, inner arc, radial ends.
    pub fn ring_outline(
        &mut self,
        cx: f64,
        cy: f64,
        inner: f64,
        outer: f64,
        start_deg: f64,
        sweep_deg: f64,
        thickness: f32,
        color: Color,
    ) {
        self.arc(cx, cy, outer, start_deg, sweep_deg, thickness, color);
        self.arc(cx, cy, inner, start_deg, sweep_deg, thickness, color);
        for deg in [start_deg, start_deg + sweep_deg] {
            let rad = deg.to_radians();
            let (cos, sin) = (rad.cos(), rad.sin());
            self.line(
                cx + cos * inner,
                cy + sin * inner,
                cx + cos * outer,
                cy + sin * outer,
                thickness,
                color,
            );
        }
    }

    /// Fill the region between `inner` and `outer` from `start_deg` through
    /// `start_deg + sweep_deg`, coloring each pixel by its absolute angle.
    pub fn ring_sector(
        &mut self,
        cx: f64,
        cy: f64,
        inner: f64,
        outer: f64,
        start_deg: f64,
        sweep_deg: f64,
        gradient: &SweepGradient,
    ) {
        if sweep_deg == 0.0 || outer <= 0.0 {
            return;
        }
        let sweep = sweep_deg.clamp(-360.0, 360.0);
        let min_x = ((cx - outer - 1.0).floor() as i32).max(0);
        let max_x = ((cx + outer + 1.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = ((cy - outer - 1.0).floor() as i32).max(0);
        let max_y = ((cy + outer + 1.0).ceil() as i32).min(self.height as i32 - 1);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (dx, dy) = (x as f64 - cx, y as f64 - cy);
                let dist = (dx * dx + dy * dy).sqrt();
                let radial = (dist - (inner - 0.5))
                    .clamp(0.0, 1.0)
                    .min((outer + 0.5 - dist).clamp(0.0, 1.0));
                if radial <= 0.0 {
                    continue;
                }
                let theta = dy.atan2(dx).to_degrees();
                let inside = if sweep > 0.0 {
                    (theta - start_deg).rem_euclid(360.0) <= sweep
                } else {
                    (start_deg - theta).rem_euclid(360.0) <= -sweep
                };
                if inside {
                    self.blend(x, y, gradient.color_at_degrees(theta), radial as f32);
                }
            }
        }
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let reach = radius.ceil() as i32 + 1;
        let (ccx, ccy) = (cx.round() as i32, cy.round() as i32);
        for y in -reach..=reach {
            for x in -reach..=reach {
                let (px, py) = (ccx + x, ccy + y);
                let dist = ((px as f64 - cx).powi(2) + (py as f64 - cy).powi(2)).sqrt();
                let aa = 1.0 - (dist - radius).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.blend(px, py, color, aa as f32);
                }
            }
        }
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let (x0, y0) = (x.round() as i32, y.round() as i32);
        let (x1, y1) = ((x + width).round() as i32, (y + height).round() as i32);
        for py in y0.max(0)..y1.min(self.height as i32) {
            for px in x0.max(0)..x1.min(self.width as i32) {
                self.blend(px, py, color, 1.0);
            }
        }
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, thickness: f32, color: Color) {
        let (right, bottom) = (x + width, y + height);
        for (x0, y0, x1, y1) in [
            (x, y, right, y),
            (x, bottom, right, bottom),
            (x, y, x, bottom),
            (right, y, right, bottom),
        ] {
            self.line(x0, y0, x1, y1, thickness, color);
        }
    }

    /// Draw `text` centered on (x, y).
    pub fn text(&mut self, x: f64, y: f64, text: &str, font: &Font, size: f32, color: Color) {
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, v_metrics.ascent)).collect();
        let Some((min_x, max_x, min_y, max_y)) = pixel_bounds(&glyphs) else {
            return;
        };
        let offset_x = x.round() as i32 - (max_x - min_x) / 2;
        let offset_y = y.round() as i32 - (max_y - min_y) / 2;
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + gx as i32 + bb.min.x - min_x;
                    let py = offset_y + gy as i32 + bb.min.y - min_y;
                    self.blend(px, py, color, v);
                });
            }
        }
    }
}

/// Width in pixels of `text` rendered at `size`.
pub fn text_width(text: &str, font: &Font, size: f32) -> f64 {
    let glyphs: Vec<PositionedGlyph> = font.layout(text, Scale::uniform(size), point(0.0, 0.0)).collect();
    pixel_bounds(&glyphs).map_or(0.0, |(min_x, max_x, _, _)| (max_x - min_x) as f64)
}

fn pixel_bounds(glyphs: &[PositionedGlyph]) -> Option<(i32, i32, i32, i32)> {
    glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .fold(None, |acc, bb| {
            let (min_x, max_x, min_y, max_y) = acc.unwrap_or((i32::MAX, i32::MIN, i32::MAX, i32::MIN));
            Some((
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: usize, height: usize) -> Vec<u8> {
        vec![0xff; width * height * 4]
    }

    #[test]
    fn short_frame_clamps_height() {
        let mut frame = blank(4, 2);
        let mut canvas = Canvas::new(&mut frame, 4, 10);
        assert_eq!(canvas.pixel(3, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 2), None);
        canvas.line(0.0, 0.0, 0.0, 9.0, 2.0, Color::BLACK);
        assert_eq!(canvas.pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn blend_ignores_out_of_bounds() {
        let mut frame = blank(4, 4);
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.blend(-1, 0, Color::BLACK, 1.0);
        canvas.blend(4, 0, Color::BLACK, 1.0);
        canvas.blend(0, 4, Color::BLACK, 1.0);
        assert!(frame.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn half_alpha_mixes_evenly() {
        let mut frame = blank(1, 1);
        let mut canvas = Canvas::new(&mut frame, 1, 1);
        canvas.blend(0, 0, Color::BLACK, 0.5);
        assert_eq!(canvas.pixel(0, 0), Some(Color::new(0x80, 0x80, 0x80)));
    }

    #[test]
    fn line_covers_its_midpoint() {
        let mut frame = blank(20, 20);
        let mut canvas = Canvas::new(&mut frame, 20, 20);
        canvas.line(2.0, 10.0, 18.0, 10.0, 2.0, Color::RED);
        assert_eq!(canvas.pixel(10, 10), Some(Color::RED));
        assert_eq!(canvas.pixel(10, 15), Some(Color::WHITE));
    }

    #[test]
    fn circle_fills_its_center() {
        let mut frame = blank(20, 20);
        let mut canvas = Canvas::new(&mut frame, 20, 20);
        canvas.circle(10.0, 10.0, 4.0, Color::BLACK);
        assert_eq!(canvas.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 13), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 17), Some(Color::WHITE));
    }

    #[test]
    fn sector_only_fills_its_angles() {
        let mut frame = blank(100, 100);
        let mut canvas = Canvas::new(&mut frame, 100, 100);
        let solid = SweepGradient::new(vec![(0.0, Color::GREEN)]);
        // Upper-left quadrant: from straight left (-180) to straight up (-90).
        canvas.ring_sector(50.0, 50.0, 20.0, 40.0, -180.0, 90.0, &solid);
        assert_eq!(canvas.pixel(50 - 21, 50 - 21), Some(Color::GREEN));
        assert_eq!(canvas.pixel(50 + 21, 50 - 21), Some(Color::WHITE));
        assert_eq!(canvas.pixel(50 - 21, 50 + 21), Some(Color::WHITE));
        // Inside the hole.
        assert_eq!(canvas.pixel(45, 45), Some(Color::WHITE));
    }

    #[test]
    fn empty_sweep_draws_nothing() {
        let mut frame = blank(50, 50);
        let mut canvas = Canvas::new(&mut frame, 50, 50);
        canvas.ring_sector(25.0, 25.0, 5.0, 20.0, -170.0, 0.0, &SweepGradient::severity());
        assert!(frame.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn ring_outline_leaves_interior_empty() {
        let mut frame = blank(100, 100);
        let mut canvas = Canvas::new(&mut frame, 100, 100);
        canvas.ring_outline(50.0, 50.0, 20.0, 40.0, -120.0, 60.0, 2.0, Color::RED);
        // Straight up on the outer and inner arcs.
        assert_eq!(canvas.pixel(50, 10), Some(Color::RED));
        assert_eq!(canvas.pixel(50, 30), Some(Color::RED));
        // Between the arcs.
        assert_eq!(canvas.pixel(50, 20), Some(Color::WHITE));
    }
}
