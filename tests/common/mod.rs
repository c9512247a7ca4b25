pub mod synthetic_segments;
