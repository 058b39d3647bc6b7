pub mod check_upkeep;
pub mod get_participant;

pub use check_upkeep::*;
pub use get_participant::*;

use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED};

/// Read-only access to the raffle for simulated (view) calls.
#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
