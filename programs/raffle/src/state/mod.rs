pub mod raffle;
pub mod oracle_config;
pub mod ledger;
pub mod eligibility;
pub mod draw;

pub use raffle::*;
pub use oracle_config::*;
pub use eligibility::*;
pub use draw::*;
