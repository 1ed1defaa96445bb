pub mod schwarzschild;

pub use schwarzschild::{PhysicalConstants, SchwarzschildParams};
