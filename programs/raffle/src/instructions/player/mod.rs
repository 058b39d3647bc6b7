pub mod enter_raffle;

pub use enter_raffle::*;
