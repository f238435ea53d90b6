use bevy_ecs::world::World;
use nalgebra::Vector2 as Vec2;

use crate::components::figure::Figure;
use crate::components::shapes::curve::QuadraticCurve;
use crate::components::shapes::marker::Marker;
use crate::components::shapes::series::{LineStyle, Series};
use crate::config;
use crate::math::approx::triangle_corners;
use crate::math::bezier::QuadraticBezier;

/// Adds the right-angle path from `start` to `end` plus the two end point markers.
pub fn draw_triangle_approximation(world: &mut World, start: Vec2<f64>, end: Vec2<f64>, mid: Vec2<f64>) {
    let series = Series {
        points: triangle_corners(start, end, mid).to_vec(),
        color: config::TRIANGLE_COLOR,
        style: LineStyle::Dashed,
        label: Some(config::TRIANGLE_LABEL.to_string()),
    };
    let order = world.resource_mut::<Figure>().next_order();
    world.spawn((series, order));

    for (at, color, label) in [
        (start, config::START_COLOR, config::START_LABEL),
        (end, config::END_COLOR, config::END_LABEL),
    ] {
        let order = world.resource_mut::<Figure>().next_order();
        world.spawn((
            Marker { at, color, label: Some(label.to_string()) },
            order,
        ));
    }
}

/// Adds the quadratic spline through `mid` and turns the legend on.
///
/// The series starts empty; `sys_sample_curves` fills it in.
pub fn draw_quadratic_spline(world: &mut World, start: Vec2<f64>, end: Vec2<f64>, mid: Vec2<f64>) {
    let curve = QuadraticCurve {
        bezier: QuadraticBezier::new(start, mid, end),
        samples: config::SPLINE_SAMPLES,
    };
    let series = Series {
        points: Vec::new(),
        color: config::SPLINE_COLOR,
        style: LineStyle::Solid,
        label: Some(config::SPLINE_LABEL.to_string()),
    };

    let order = {
        let mut figure = world.resource_mut::<Figure>();
        figure.legend = true;
        figure.next_order()
    };
    world.spawn((series, curve, order));
}
