//! Boundary to the external randomness oracle.
//!
//! Requests leave the program as `RandomnessRequested` events; the oracle
//! answers later, at a time of its choosing, through `fulfill_randomness`.
//! Nothing here decides who wins.

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;
use crate::errors::RaffleError;
use crate::events::RandomnessRequested;
use crate::state::OracleConfig;

pub trait RandomnessGateway {
    /// Submits a request and returns its correlation id. The result arrives
    /// asynchronously, at most once per id.
    fn submit_request(&mut self) -> Result<u64>;
}

/// Issues requests against the on-chain `OracleConfig`.
pub struct OracleQueue<'a> {
    config: &'a mut OracleConfig,
    raffle: Pubkey,
    slot: u64,
}

impl<'a> OracleQueue<'a> {
    pub fn new(config: &'a mut OracleConfig, raffle: Pubkey, slot: u64) -> Self {
        Self { config, raffle, slot }
    }
}

impl RandomnessGateway for OracleQueue<'_> {
    fn submit_request(&mut self) -> Result<u64> {
        let request_id = self
            .config
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;
        self.config.request_counter = request_id;

        let seed = request_seed(&self.raffle, request_id, self.slot);

        emit!(RandomnessRequested {
            request_id,
            oracle: self.config.oracle,
            seed,
            params: self.config.params,
        });
        msg!("Randomness request {} submitted to {}", request_id, self.config.oracle);

        Ok(request_id)
    }
}

pub fn request_seed(raffle: &Pubkey, request_id: u64, slot: u64) -> [u8; 32] {
    hashv(&[
        raffle.as_ref(),
        &request_id.to_le_bytes(),
        &slot.to_le_bytes(),
    ])
    .to_bytes()
}
