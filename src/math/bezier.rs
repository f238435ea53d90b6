use nalgebra::Vector2 as Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec2<f64>,
    pub control: Vec2<f64>,
    pub end: Vec2<f64>,
}

impl QuadraticBezier {
    pub fn new(start: Vec2<f64>, control: Vec2<f64>, end: Vec2<f64>) -> Self {
        QuadraticBezier { start, control, end }
    }

    /// Evaluates the curve at `t` as a blend of the two linear interpolations
    /// (one de Casteljau step). Exact at `t = 0` and `t = 1`.
    pub fn eval(&self, t: f64) -> Vec2<f64> {
        let mt = 1.0 - t;
        let a = self.start * mt + self.control * t;
        let b = self.control * mt + self.end * t;
        a * mt + b * t
    }

    /// Samples the curve at `n` evenly spaced parameters over `[0, 1]`.
    pub fn sample(&self, n: usize) -> Vec<Vec2<f64>> {
        linspace(0.0, 1.0, n)
            .into_iter()
            .map(|t| self.eval(t))
            .collect()
    }
}

/// `n` evenly spaced values from `lo` to `hi`, both ends included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
            // keep the last value exact so curves end on their end point
            values[n - 1] = hi;
            values
        }
    }
}

pub fn midpoint(a: Vec2<f64>, b: Vec2<f64>) -> Vec2<f64> {
    (a + b) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vec2<f64>, b: Vec2<f64>) {
        assert!((a - b).norm() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn midpoint_is_the_mean() {
        assert_eq!(midpoint(Vec2::new(50.0, 50.0), Vec2::new(750.0, 550.0)), Vec2::new(400.0, 300.0));
        assert_eq!(midpoint(Vec2::new(-3.0, 8.0), Vec2::new(5.0, -2.0)), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let ts = linspace(0.0, 1.0, 100);
        assert_eq!(ts.len(), 100);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[99], 1.0);
        assert!(ts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn samples_start_and_end_on_the_end_points() {
        let curves = [
            QuadraticBezier::new(Vec2::new(50.0, 50.0), Vec2::new(400.0, 300.0), Vec2::new(750.0, 550.0)),
            QuadraticBezier::new(Vec2::new(0.1, -7.3), Vec2::new(1e3, 42.0), Vec2::new(-0.3, 0.7)),
            QuadraticBezier::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)),
        ];

        for curve in curves {
            let samples = curve.sample(100);
            assert_eq!(samples.len(), 100);
            assert_close(samples[0], curve.start);
            assert_close(samples[99], curve.end);
        }
    }

    #[test]
    fn brachistochrone_curve_passes_through_its_midpoint() {
        let start = Vec2::new(50.0, 50.0);
        let end = Vec2::new(750.0, 550.0);
        let mid = midpoint(start, end);
        let curve = QuadraticBezier::new(start, mid, end);

        assert_close(curve.eval(0.5), Vec2::new(400.0, 300.0));
        // 0.25 * p0 + 0.5 * p1 + 0.25 * p2
        let blend = start * 0.25 + mid * 0.5 + end * 0.25;
        assert_close(curve.eval(0.5), blend);
    }

    #[test]
    fn off_axis_control_point_bends_the_curve() {
        let curve = QuadraticBezier::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0), Vec2::new(2.0, 2.0));
        assert_close(curve.eval(0.5), Vec2::new(0.5, 1.5));
    }
}
