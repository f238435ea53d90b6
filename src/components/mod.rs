pub mod figure;
pub mod shapes;
