use anchor_lang::prelude::*;
use crate::errors::RaffleError;
use super::{Raffle, RaffleState};

impl Raffle {
    /// Records one entry for `participant`. Each call takes its own slot, so
    /// entering twice doubles the chance of being drawn.
    pub fn enter(&mut self, participant: Pubkey, payment: u64) -> Result<()> {
        if payment < self.entrance_fee {
            msg!("Payment {} below entrance fee {}", payment, self.entrance_fee);
            return err!(RaffleError::InsufficientPayment);
        }
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(self.entrants.len() < Self::MAX_ENTRANTS, RaffleError::RaffleFull);

        let pool_balance = self
            .pool_balance
            .checked_add(payment)
            .ok_or(RaffleError::MathOverflow)?;

        self.entrants.push(participant);
        self.pool_balance = pool_balance;
        Ok(())
    }

    pub fn participant_at(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entrants.get(i))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub(crate) fn reset(&mut self) {
        self.entrants.clear();
        self.pool_balance = 0;
    }
}
