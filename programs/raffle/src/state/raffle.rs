use anchor_lang::prelude::*;

pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const VAULT_SEED: &[u8] = b"vault";

/// The current round. Only one round exists at a time; resolution restarts
/// it in place.
#[account]
pub struct Raffle {
    pub authority: Pubkey,
    pub entrance_fee: u64,              // lamports, minimum payment
    pub interval: u64,                  // seconds between draws
    pub state: RaffleState,
    pub entrants: Vec<Pubkey>,          // insertion order is the draw index space
    pub pool_balance: u64,
    pub last_draw_timestamp: i64,
    pub pending_request_id: Option<u64>,
    pub recent_winner: Option<Pubkey>,
    pub completed_rounds: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Raffle {
    // 8 (discriminator)
    // 32 (authority) + 8 (entrance_fee) + 8 (interval) + 1 (state)
    // 4 (entrants vec prefix) + 8 (pool_balance) + 8 (last_draw_timestamp)
    // 1+8 (pending_request_id option) + 1+32 (recent_winner option)
    // 8 (completed_rounds) + 1 (bump) + 1 (vault_bump)
    pub const BASE_LEN: usize = 8 + 32 + 8 + 8 + 1 + 4 + 8 + 8 + 9 + 33 + 8 + 1 + 1;
    pub const ENTRANT_LEN: usize = 32;
    // Resolution deserializes the whole list inside the 32 KiB program heap.
    pub const MAX_ENTRANTS: usize = 200;

    /// Account size needed to hold `entrants` participants.
    pub fn space(entrants: usize) -> usize {
        Self::BASE_LEN + entrants * Self::ENTRANT_LEN
    }

    /// Builds a fresh Open round. `now` becomes the start of the first interval.
    pub fn new(authority: Pubkey, entrance_fee: u64, interval: u64, now: i64) -> Self {
        Self {
            authority,
            entrance_fee,
            interval,
            state: RaffleState::Open,
            entrants: Vec::new(),
            pool_balance: 0,
            last_draw_timestamp: now,
            pending_request_id: None,
            recent_winner: None,
            completed_rounds: 0,
            bump: 0,
            vault_bump: 0,
        }
    }

    pub fn entrant_count(&self) -> u64 {
        self.entrants.len() as u64
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RaffleState {
    Open,
    Calculating,
}
