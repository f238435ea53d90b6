pub mod sample_curve;
