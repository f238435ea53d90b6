use nalgebra::Vector2 as Vec2;
use peniko::Color;

pub const START: [f64; 2] = [50.0, 50.0];
pub const END: [f64; 2] = [750.0, 550.0];

pub const SPLINE_SAMPLES: usize = 100;

// 10 x 8 inches at 100 dpi
pub const FIGURE_WIDTH: f64 = 1000.0;
pub const FIGURE_HEIGHT: f64 = 800.0;
pub const DPI: f64 = 100.0;

pub const TITLE: &str = "Brachistochrone Problem - Optimized Triangle and Spline Approximations";
pub const X_LABEL: &str = "X";
pub const Y_LABEL: &str = "Y";

pub const TRIANGLE_LABEL: &str = "Triangle Approximation";
pub const START_LABEL: &str = "Start Point";
pub const END_LABEL: &str = "End Point";
pub const SPLINE_LABEL: &str = "Quadratic Spline Approximation";

pub const TRIANGLE_COLOR: Color = Color::rgb8(0, 0, 255);
pub const START_COLOR: Color = Color::rgb8(0, 128, 0);
pub const END_COLOR: Color = Color::rgb8(255, 0, 0);
pub const SPLINE_COLOR: Color = Color::rgb8(255, 0, 0);

pub fn start() -> Vec2<f64> {
    Vec2::new(START[0], START[1])
}

pub fn end() -> Vec2<f64> {
    Vec2::new(END[0], END[1])
}
