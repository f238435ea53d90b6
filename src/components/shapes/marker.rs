use bevy_ecs::component::Component;
use nalgebra::Vector2 as Vec2;
use peniko::Color;

#[derive(Component, Clone, Debug)]
pub struct Marker {
    pub at: Vec2<f64>,
    pub color: Color,
    pub label: Option<String>,
}
