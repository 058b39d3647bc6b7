use anchor_lang::prelude::*;

pub const ORACLE_CONFIG_SEED: &[u8] = b"oracle_config";

/// Randomness oracle endpoint and request parameters. The raffle core never
/// reads this account; only the gateway does.
#[account]
pub struct OracleConfig {
    pub oracle: Pubkey,                 // only signer allowed to deliver randomness
    pub params: OracleParams,
    pub request_counter: u64,           // last issued request id, 0 = none yet
    pub bump: u8,
}

impl OracleConfig {
    pub const LEN: usize = 8 + 32 + OracleParams::INIT_SPACE + 8 + 1;
}

/// Passed through untouched with every randomness request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct OracleParams {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}
