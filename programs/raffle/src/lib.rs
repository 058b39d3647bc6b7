use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod gateway;
pub mod errors;
pub mod events;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;

declare_id!("FYCypPFQuCnY1jF5PBB1MmZVRhbfworKSc99QrniNeag");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<InitializeRaffle>, params: InitializeParams) -> Result<()> {
        instructions::admin::initialize::process_initialize_raffle(ctx, params)
    }

    pub fn enter(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::player::enter_raffle::process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
        instructions::view::check_upkeep::process_check_upkeep(ctx)
    }

    pub fn get_participant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        instructions::view::get_participant::process_get_participant(ctx, index)
    }

    pub fn request_draw(ctx: Context<RequestDraw>) -> Result<()> {
        instructions::upkeep::request_draw::process_request_draw(ctx)
    }

    pub fn fulfill_randomness(ctx: Context<FulfillRandomness>, request_id: u64, randomness: [u8; 32]) -> Result<()> {
        instructions::oracle::fulfill_randomness::process_fulfill_randomness(ctx, request_id, randomness)
    }
}
