use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{OracleConfig, OracleParams, Raffle, ORACLE_CONFIG_SEED, RAFFLE_SEED, VAULT_SEED};
use crate::events::RaffleInitialized;
use crate::errors::RaffleError;

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        seeds = [RAFFLE_SEED],
        bump,
        payer = authority,
        space = Raffle::space(0)
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        seeds = [ORACLE_CONFIG_SEED],
        bump,
        payer = authority,
        space = OracleConfig::LEN
    )]
    pub oracle_config: Account<'info, OracleConfig>,

    /// Holds the pool. Seeded with its rent reserve here so that any entry
    /// fee, however small, can be deposited.
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeParams {
    pub entrance_fee: u64,
    pub interval: u64,
    pub oracle: Pubkey,
    pub oracle_params: OracleParams,
}

pub fn process_initialize_raffle(ctx: Context<InitializeRaffle>, params: InitializeParams) -> Result<()> {
    require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);

    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let mut raffle = Raffle::new(authority, params.entrance_fee, params.interval, clock.unix_timestamp);
    raffle.bump = ctx.bumps.raffle;
    raffle.vault_bump = ctx.bumps.vault;
    ctx.accounts.raffle.set_inner(raffle);

    ctx.accounts.oracle_config.set_inner(OracleConfig {
        oracle: params.oracle,
        params: params.oracle_params,
        request_counter: 0,
        bump: ctx.bumps.oracle_config,
    });

    let rent_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = rent_reserve.saturating_sub(ctx.accounts.vault.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    msg!(
        "Raffle initialized: fee {}, interval {}s, oracle {}",
        params.entrance_fee,
        params.interval,
        params.oracle
    );

    emit!(RaffleInitialized {
        authority,
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        oracle: params.oracle,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
