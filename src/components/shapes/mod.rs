pub mod curve;
pub mod marker;
pub mod series;

use bevy_ecs::component::Component;

/// Position of an artist in the order it was added to the figure.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DrawOrder(pub usize);
