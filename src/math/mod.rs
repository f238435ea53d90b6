pub mod approx;
pub mod bezier;
