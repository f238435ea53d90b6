use bevy_ecs::system::Query;

use crate::components::shapes::curve::QuadraticCurve;
use crate::components::shapes::series::Series;

// any series attached to a curve is redrawn from the curve's samples
pub fn sys_sample_curves(mut query: Query<(&QuadraticCurve, &mut Series)>) {
    for (curve, mut series) in query.iter_mut() {
        series.points = curve.bezier.sample(curve.samples);
        log::debug!("sampled {} points along {:?}", series.points.len(), curve.bezier);
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::system::RunSystemOnce;
    use bevy_ecs::world::World;
    use nalgebra::Vector2 as Vec2;
    use peniko::Color;

    use super::*;
    use crate::components::shapes::series::LineStyle;
    use crate::math::bezier::QuadraticBezier;

    #[test]
    fn fills_series_from_curve() {
        let mut world = World::default();
        let bezier = QuadraticBezier::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
        let entity = world
            .spawn((
                Series { points: Vec::new(), color: Color::BLACK, style: LineStyle::Solid, label: None },
                QuadraticCurve { bezier, samples: 11 },
            ))
            .id();
        let untouched = world
            .spawn(Series {
                points: vec![Vec2::new(5.0, 5.0)],
                color: Color::BLACK,
                style: LineStyle::Dashed,
                label: None,
            })
            .id();

        world.run_system_once(sys_sample_curves);

        let series = world.get::<Series>(entity).unwrap();
        assert_eq!(series.points.len(), 11);
        assert_eq!(series.points[0], bezier.start);
        assert_eq!(series.points[10], bezier.end);
        assert_eq!(series.points[5], Vec2::new(1.0, 1.0));

        assert_eq!(world.get::<Series>(untouched).unwrap().points, vec![Vec2::new(5.0, 5.0)]);
    }
}
