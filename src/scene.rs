// ============================================================================
// RETAINED MODE SCENE
// ============================================================================

use rusttype::Font;

use crate::color::{Color, SweepGradient};
use crate::config::GaugeConfig;
use crate::geometry::{GaugeGeometry, Rect, ScreenLayout};
use crate::pressure::pressure_of;
use crate::raster::{text_width, Canvas};

const PLACEHOLDER: &str = "Enter pressure";
const BUTTON_LABEL: &str = "APPLY";

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    RingOutline {
        cx: f64,
        cy: f64,
        inner: f64,
        outer: f64,
        start: f64,
        sweep: f64,
        thickness: f32,
        color: Color,
    },
    RingSector {
        cx: f64,
        cy: f64,
        inner: f64,
        outer: f64,
        start: f64,
        sweep: f64,
        gradient: SweepGradient,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        thickness: f32,
        color: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
        /// `None` fills, `Some(thickness)` strokes.
        stroke: Option<f32>,
    },
    /// Text centered on (x, y); a `backdrop` box is drawn behind it first.
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f32,
        color: Color,
        backdrop: Option<Color>,
    },
}

/// An ordered list of draw commands, rebuilt every frame.
#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rasterize every command in order. Text is skipped without a font.
    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::RingOutline {
                    cx,
                    cy,
                    inner,
                    outer,
                    start,
                    sweep,
                    thickness,
                    color,
                } => canvas.ring_outline(*cx, *cy, *inner, *outer, *start, *sweep, *thickness, *color),
                DrawCommand::RingSector {
                    cx,
                    cy,
                    inner,
                    outer,
                    start,
                    sweep,
                    gradient,
                } => canvas.ring_sector(*cx, *cy, *inner, *outer, *start, *sweep, gradient),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => canvas.line(*x0, *y0, *x1, *y1, *thickness, *color),
                DrawCommand::Circle { cx, cy, radius, color } => canvas.circle(*cx, *cy, *radius, *color),
                DrawCommand::Rect { rect, color, stroke } => match stroke {
                    Some(thickness) => canvas.stroke_rect(rect.x, rect.y, rect.width, rect.height, *thickness, *color),
                    None => canvas.fill_rect(rect.x, rect.y, rect.width, rect.height, *color),
                },
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                    backdrop,
                } => {
                    let Some(font) = font else { continue };
                    if let Some(fill) = backdrop {
                        let pad = *font_size as f64;
                        let width = text_width(text, font, *font_size) + 2.0 * pad;
                        let height = *font_size as f64 * 1.8;
                        canvas.fill_rect(x - width / 2.0, y - height / 2.0, width, height, *fill);
                    }
                    canvas.text(*x, *y, text, font, *font_size, *color);
                }
            }
        }
    }
}

/// Add the dial for a displayed needle `angle`: level arc, background
/// segments, hub, needle and readout, in that order.
pub fn add_gauge(scene: &mut Scene, geometry: &GaugeGeometry, angle: f64, config: &GaugeConfig) {
    let level = geometry.level_span(angle);
    scene.add_command(DrawCommand::RingSector {
        cx: geometry.cx,
        cy: geometry.cy,
        inner: geometry.inner_radius,
        outer: geometry.outer_radius,
        start: level.start,
        sweep: level.sweep,
        gradient: SweepGradient::severity(),
    });

    for segment in geometry.background_segments() {
        scene.add_command(DrawCommand::RingOutline {
            cx: geometry.cx,
            cy: geometry.cy,
            inner: geometry.inner_radius,
            outer: geometry.outer_radius,
            start: segment.start,
            sweep: segment.sweep,
            thickness: config.segment_stroke,
            color: config.segment_color,
        });
    }

    scene.add_command(DrawCommand::Circle {
        cx: geometry.cx,
        cy: geometry.cy,
        radius: geometry.hub_radius,
        color: config.needle_color,
    });

    let (tip_x, tip_y) = geometry.needle_tip(angle);
    scene.add_command(DrawCommand::Line {
        x0: geometry.cx,
        y0: geometry.cy,
        x1: tip_x,
        y1: tip_y,
        thickness: config.needle_width,
        color: config.needle_color,
    });

    scene.add_command(DrawCommand::Text {
        x: geometry.cx,
        y: geometry.cy - config.readout_offset,
        text: pressure_of(angle).to_string(),
        font_size: config.readout_font_size,
        color: config.text_color,
        backdrop: None,
    });
}

/// Add the text field, the apply button and an optional toast.
pub fn add_controls(scene: &mut Scene, layout: &ScreenLayout, raw_input: &str, toast: Option<&str>, config: &GaugeConfig) {
    let (input_x, input_y) = layout.input.center();
    scene.add_command(DrawCommand::Rect {
        rect: layout.input,
        color: Color::new(0xee, 0xee, 0xee),
        stroke: None,
    });
    let underline_y = layout.input.y + layout.input.height;
    scene.add_command(DrawCommand::Line {
        x0: layout.input.x,
        y0: underline_y,
        x1: layout.input.x + layout.input.width,
        y1: underline_y,
        thickness: 2.0,
        color: config.accent_color,
    });
    let (text, color) = if raw_input.is_empty() {
        (PLACEHOLDER, Color::GREY)
    } else {
        (raw_input, config.text_color)
    };
    scene.add_command(DrawCommand::Text {
        x: input_x,
        y: input_y,
        text: text.to_string(),
        font_size: config.ui_font_size,
        color,
        backdrop: None,
    });

    let (button_x, button_y) = layout.button.center();
    scene.add_command(DrawCommand::Rect {
        rect: layout.button,
        color: config.accent_color,
        stroke: None,
    });
    scene.add_command(DrawCommand::Text {
        x: button_x,
        y: button_y,
        text: BUTTON_LABEL.to_string(),
        font_size: config.ui_font_size,
        color: Color::WHITE,
        backdrop: None,
    });

    if let Some(message) = toast {
        scene.add_command(DrawCommand::Text {
            x: layout.width as f64 / 2.0,
            y: layout.toast_y,
            text: message.to_string(),
            font_size: config.ui_font_size,
            color: Color::WHITE,
            backdrop: Some(Color::new(0x32, 0x32, 0x32)),
        });
    }
}
