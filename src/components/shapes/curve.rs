use bevy_ecs::component::Component;

use crate::math::bezier::QuadraticBezier;

// entities carrying a QuadraticCurve get their Series points resampled from it
#[derive(Component, Clone, Copy, Debug)]
pub struct QuadraticCurve {
    pub bezier: QuadraticBezier,
    pub samples: usize,
}
