use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{Raffle, RAFFLE_SEED, VAULT_SEED};
use crate::events::RaffleEntered;

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    // Grows by one slot per entry up to MAX_ENTRANTS; never shrinks, so rent
    // paid by earlier entrants stays with the account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        realloc = Raffle::space((raffle.entrants.len() + 1).min(Raffle::MAX_ENTRANTS)).max(raffle.to_account_info().data_len()),
        realloc::payer = player,
        realloc::zero = false,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    // Validate and record first; nothing is taken from a rejected entrant.
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let raffle = &ctx.accounts.raffle;
    msg!("{} entered with {}, pool {}", player, amount, raffle.pool_balance);

    emit!(RaffleEntered {
        player,
        amount,
        entrant_count: raffle.entrant_count(),
        pool_balance: raffle.pool_balance,
    });

    Ok(())
}
