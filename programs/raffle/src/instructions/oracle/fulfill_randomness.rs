use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{OracleConfig, Raffle, ORACLE_CONFIG_SEED, RAFFLE_SEED, VAULT_SEED};
use crate::events::WinnerPicked;
use crate::errors::RaffleError;
use crate::utils::credit_stays_rent_exempt;

/// Delivery path of the randomness gateway. Only the configured oracle may
/// sign it; the request id is checked against the pending one by the raffle.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [ORACLE_CONFIG_SEED],
        bump = oracle_config.bump,
        constraint = oracle_config.oracle == oracle.key() @ RaffleError::UnauthorizedOracle
    )]
    pub oracle_config: Account<'info, OracleConfig>,

    pub oracle: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// The oracle computes the winner off-chain from the same random word.
    /// CHECK: Compared against the drawn winner before any lamports move
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    randomness: [u8; 32],
) -> Result<()> {
    let clock = Clock::get()?;
    let rent_floor = Rent::get()?.minimum_balance(0);
    let raffle_key = ctx.accounts.raffle.key();
    let vault_bump = ctx.accounts.raffle.vault_bump;
    let vault = ctx.accounts.vault.to_account_info();
    let winner_account = ctx.accounts.winner.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();

    let outcome = ctx.accounts.raffle.resolve_draw(
        request_id,
        &randomness,
        clock.unix_timestamp,
        move |winner, prize| {
            require_keys_eq!(*winner_account.key, *winner, RaffleError::TransferFailed);
            if !credit_stays_rent_exempt(winner_account.lamports(), prize, rent_floor) {
                msg!(
                    "Prize {} would leave {} below the rent-exempt minimum {}; fund the account and redeliver",
                    prize,
                    winner,
                    rent_floor
                );
                return err!(RaffleError::TransferFailed);
            }

            let bump = [vault_bump];
            let seeds: &[&[u8]] = &[VAULT_SEED, raffle_key.as_ref(), &bump];
            system_program::transfer(
                CpiContext::new_with_signer(
                    system_program_info,
                    system_program::Transfer {
                        from: vault,
                        to: winner_account,
                    },
                    &[seeds],
                ),
                prize,
            )
        },
    )?;

    emit!(WinnerPicked {
        request_id: outcome.request_id,
        winner: outcome.winner,
        prize: outcome.prize,
        round: outcome.round,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
