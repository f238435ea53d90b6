use bevy_ecs::prelude::Resource;

use super::shapes::DrawOrder;

/// Figure-wide state shared by everything drawn into the world.
#[derive(Resource, Clone, Debug, Default)]
pub struct Figure {
    /// Logical size of the figure in pixels.
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub grid: bool,
    pub legend: bool,
    next_order: usize,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Self {
        Figure {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn next_order(&mut self) -> DrawOrder {
        let order = DrawOrder(self.next_order);
        self.next_order += 1;
        order
    }
}
