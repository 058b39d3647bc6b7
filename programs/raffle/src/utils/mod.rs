pub mod math;

pub use math::*;
