use anchor_lang::prelude::*;
use super::ViewRaffle;

/// Tells a keeper whether `request_draw` would currently succeed.
pub fn process_check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
    let clock = Clock::get()?;
    let eligibility = ctx.accounts.raffle.eligibility(clock.unix_timestamp);
    eligibility.log();
    Ok(eligibility.upkeep_needed())
}
