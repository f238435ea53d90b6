use bevy_ecs::component::Component;
use nalgebra::Vector2 as Vec2;
use peniko::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A polyline through `points`, in data coordinates.
#[derive(Component, Clone, Debug)]
pub struct Series {
    pub points: Vec<Vec2<f64>>,
    pub color: Color,
    pub style: LineStyle,
    pub label: Option<String>,
}
