/// Reduces a 256-bit big-endian random word modulo `count`.
///
/// The whole word takes part in the reduction, so every entrant slot is
/// reachable regardless of how many entrants there are. Returns `None` when
/// there is nothing to pick from.
pub fn winner_index(randomness: &[u8; 32], count: u64) -> Option<u64> {
    if count == 0 {
        return None;
    }
    let modulus = count as u128;
    let remainder = randomness
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);
    Some(remainder as u64)
}

/// Whether crediting `amount` leaves a system account at or above the
/// rent-exempt floor. The runtime rejects transfers that would not.
pub fn credit_stays_rent_exempt(balance: u64, amount: u64, rent_floor: u64) -> bool {
    balance.saturating_add(amount) >= rent_floor
}
