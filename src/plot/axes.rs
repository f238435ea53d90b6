use nalgebra::Vector2 as Vec2;
use vello::kurbo::{Point, Rect};

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;
const TARGET_TICKS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub lo: f64,
    pub hi: f64,
}

impl Limits {
    pub fn new(lo: f64, hi: f64) -> Self {
        Limits { lo, hi }
    }

    /// Smallest range holding every value, `None` for an empty input.
    pub fn enclosing(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Limits::new(v, v)),
            Some(l) => Some(Limits::new(l.lo.min(v), l.hi.max(v))),
        })
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn with_margin(self, fraction: f64) -> Self {
        let span = self.span();
        if span == 0.0 {
            let pad = if self.lo == 0.0 { 1.0 } else { self.lo.abs() * fraction };
            return Limits::new(self.lo - pad, self.hi + pad);
        }
        Limits::new(self.lo - span * fraction, self.hi + span * fraction)
    }

    pub fn tick_step(&self) -> f64 {
        nice_step(self.span(), TARGET_TICKS)
    }

    /// Multiples of `tick_step` that fall inside the limits.
    pub fn ticks(&self) -> Vec<f64> {
        let step = self.tick_step();
        let first = (self.lo / step - 1e-9).ceil() as i64;
        let last = (self.hi / step + 1e-9).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    fn fraction(&self, v: f64) -> f64 {
        (v - self.lo) / self.span()
    }
}

/// Rounds `span / target` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !(raw > 0.0 && raw.is_finite()) {
        return 1.0;
    }
    let exponent = raw.log10().floor() as i32;
    // scale by an exact power of ten so steps like 0.2 come out as the nearest f64
    let scale = |m: f64| {
        let magnitude = 10f64.powi(exponent.abs());
        if exponent >= 0 { m * magnitude } else { m / magnitude }
    };
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(scale)
        .find(|step| *step >= raw * (1.0 - 1e-9))
        .unwrap_or_else(|| scale(10.0))
}

pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..10)
        .find(|d| {
            let scaled = step * 10f64.powi(*d);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(10) as usize;
    // avoid "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Maps data coordinates onto a screen rectangle, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub x: Limits,
    pub y: Limits,
    pub viewport: Rect,
}

impl Axes {
    pub fn autoscale(points: &[Vec2<f64>], viewport: Rect) -> Self {
        let unit = Limits::new(0.0, 1.0);
        let x = Limits::enclosing(points.iter().map(|p| p.x)).map_or(unit, |l| l.with_margin(MARGIN));
        let y = Limits::enclosing(points.iter().map(|p| p.y)).map_or(unit, |l| l.with_margin(MARGIN));
        Axes { x, y, viewport }
    }

    pub fn screen_x(&self, x: f64) -> f64 {
        self.viewport.x0 + self.x.fraction(x) * self.viewport.width()
    }

    pub fn screen_y(&self, y: f64) -> f64 {
        self.viewport.y1 - self.y.fraction(y) * self.viewport.height()
    }

    pub fn to_screen(&self, p: Vec2<f64>) -> Point {
        Point::new(self.screen_x(p.x), self.screen_y(p.y))
    }
}
