pub mod axes;
pub mod figure;
pub mod legend;
pub mod style;
pub mod text;
