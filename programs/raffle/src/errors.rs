use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Raffle is not open")]
    RoundNotOpen,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Request id does not match the pending request")]
    UnknownRequest,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("Raffle has reached its entrant limit")]
    RaffleFull,
    #[msg("Participant index out of range")]
    IndexOutOfRange,
    #[msg("Signer is not the configured randomness oracle")]
    UnauthorizedOracle,
    #[msg("Entrance fee must be greater than 0")]
    InvalidEntranceFee,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
