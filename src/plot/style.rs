use peniko::Color;
use vello::kurbo::{Circle, Point, Stroke};

use crate::components::shapes::series::LineStyle;
use crate::config;

// all lengths in points, converted with `Style::px`
pub const LINE_WIDTH: f64 = 1.5;
pub const DASH_PATTERN: [f64; 2] = [3.7, 1.6];
pub const MARKER_RADIUS: f64 = 3.0;
pub const GRID_WIDTH: f64 = 0.8;
pub const SPINE_WIDTH: f64 = 0.8;
pub const TICK_LENGTH: f64 = 3.5;
pub const TICK_PAD: f64 = 3.5;
pub const LABEL_PAD: f64 = 4.0;
pub const TITLE_PAD: f64 = 6.0;
pub const FONT_SIZE: f64 = 10.0;
pub const TITLE_SIZE: f64 = 12.0;

pub const GRID_COLOR: Color = Color::rgb8(0xb0, 0xb0, 0xb0);
pub const SPINE_COLOR: Color = Color::BLACK;

/// Converts point sizes into device pixels for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Device pixels per point.
    pub pt: f64,
}

impl Style {
    pub fn new(scale_factor: f64) -> Self {
        Style {
            pt: scale_factor * config::DPI / 72.0,
        }
    }

    pub fn px(&self, points: f64) -> f64 {
        points * self.pt
    }

    pub fn font_px(&self, points: f64) -> f32 {
        self.px(points) as f32
    }

    pub fn line_stroke(&self, style: LineStyle) -> Stroke {
        let width = self.px(LINE_WIDTH);
        let stroke = Stroke::new(width);
        match style {
            LineStyle::Solid => stroke,
            LineStyle::Dashed => stroke.with_dashes(0.0, DASH_PATTERN.map(|d| d * width)),
        }
    }

    pub fn marker(&self, center: Point) -> Circle {
        Circle::new(center, self.px(MARKER_RADIUS))
    }
}
