use anchor_lang::prelude::*;
use super::{Raffle, RaffleState};

/// Snapshot of the draw preconditions at a given time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Eligibility {
    pub is_open: bool,
    pub has_players: bool,
    pub has_balance: bool,
    pub time_passed: bool,
}

impl Eligibility {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.has_players && self.has_balance && self.time_passed
    }

    pub fn log(&self) {
        msg!(
            "open: {}, players: {}, balance: {}, time passed: {}",
            self.is_open,
            self.has_players,
            self.has_balance,
            self.time_passed
        );
    }
}

impl Raffle {
    pub fn eligibility(&self, now: i64) -> Eligibility {
        let elapsed = now.saturating_sub(self.last_draw_timestamp);
        Eligibility {
            is_open: self.state == RaffleState::Open,
            has_players: !self.entrants.is_empty(),
            has_balance: self.pool_balance > 0,
            time_passed: elapsed >= 0 && elapsed as u64 >= self.interval,
        }
    }

    pub fn upkeep_needed(&self, now: i64) -> bool {
        self.eligibility(now).upkeep_needed()
    }
}
