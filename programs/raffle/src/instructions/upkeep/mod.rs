pub mod request_draw;

pub use request_draw::*;
