use anchor_lang::prelude::*;
use crate::state::{OracleConfig, Raffle, ORACLE_CONFIG_SEED, RAFFLE_SEED};
use crate::events::DrawRequested;
use crate::gateway::OracleQueue;

/// Permissionless: any keeper may trigger the draw once the round is eligible.
#[derive(Accounts)]
pub struct RequestDraw<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [ORACLE_CONFIG_SEED],
        bump = oracle_config.bump,
    )]
    pub oracle_config: Account<'info, OracleConfig>,

    pub keeper: Signer<'info>,
}

pub fn process_request_draw(ctx: Context<RequestDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();

    let mut gateway = OracleQueue::new(&mut ctx.accounts.oracle_config, raffle_key, clock.slot);
    let request_id = ctx
        .accounts
        .raffle
        .request_draw(&mut gateway, clock.unix_timestamp)?;

    let raffle = &ctx.accounts.raffle;
    emit!(DrawRequested {
        request_id,
        entrant_count: raffle.entrant_count(),
        pool_balance: raffle.pool_balance,
    });

    Ok(())
}
