//! Measurement: the one-shot collapse of a fully committed board.

pub mod collapse;

pub use collapse::collapse;
