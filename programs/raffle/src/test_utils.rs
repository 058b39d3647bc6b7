use anchor_lang::prelude::*;
use crate::errors::RaffleError;
use crate::gateway::RandomnessGateway;

pub fn raffle_err(e: RaffleError) -> anchor_lang::error::Error {
    e.into()
}

/// Big-endian 256-bit word holding `value`.
pub fn random_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Hands out sequential request ids without touching any account.
pub struct StubGateway {
    next_id: u64,
    pub submitted: u64,
    pub fail: bool,
}

impl StubGateway {
    pub fn starting_at(next_id: u64) -> Self {
        Self { next_id, submitted: 0, fail: false }
    }
}

impl RandomnessGateway for StubGateway {
    fn submit_request(&mut self) -> Result<u64> {
        if self.fail {
            return Err(ProgramError::Custom(0).into());
        }
        let id = self.next_id;
        self.next_id += 1;
        self.submitted += 1;
        Ok(id)
    }
}
