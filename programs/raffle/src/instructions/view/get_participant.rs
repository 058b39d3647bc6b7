use anchor_lang::prelude::*;
use super::ViewRaffle;

pub fn process_get_participant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.participant_at(index)
}
