use anchor_lang::prelude::*;
use crate::state::OracleParams;

#[event]
pub struct RaffleInitialized {
    pub authority: Pubkey,
    pub entrance_fee: u64,
    pub interval: u64,
    pub oracle: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub entrant_count: u64,
    pub pool_balance: u64,
}

#[event]
pub struct DrawRequested {
    pub request_id: u64,
    pub entrant_count: u64,
    pub pool_balance: u64,
}

/// Picked up by the off-chain oracle, which answers with `fulfill_randomness`.
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub oracle: Pubkey,
    pub seed: [u8; 32],
    pub params: OracleParams,
}

#[event]
pub struct WinnerPicked {
    pub request_id: u64,
    pub winner: Pubkey,
    pub prize: u64,
    pub round: u64,
    pub timestamp: i64,
}
