use nalgebra::Vector2 as Vec2;

/// Corners of the right-angle path: down the x of `mid`, across at the height of `end`.
pub fn triangle_corners(start: Vec2<f64>, end: Vec2<f64>, mid: Vec2<f64>) -> [Vec2<f64>; 3] {
    [start, Vec2::new(mid.x, end.y), end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bezier::midpoint;

    #[test]
    fn corner_sits_at_mid_x_and_end_y() {
        let start = Vec2::new(50.0, 50.0);
        let end = Vec2::new(750.0, 550.0);
        let corners = triangle_corners(start, end, midpoint(start, end));

        assert_eq!(corners, [start, Vec2::new(400.0, 550.0), end]);
    }
}
