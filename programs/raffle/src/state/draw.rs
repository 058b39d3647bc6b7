use anchor_lang::prelude::*;
use crate::errors::RaffleError;
use crate::gateway::RandomnessGateway;
use crate::utils::winner_index;
use super::{Raffle, RaffleState};

/// Result of a resolved draw, as reported to observers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrawOutcome {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    pub round: u64,
}

/// Round fields touched by resolution, kept so a failed payout can put
/// them back. The entrant list is moved in, not copied.
struct RoundSnapshot {
    state: RaffleState,
    entrants: Vec<Pubkey>,
    pool_balance: u64,
    last_draw_timestamp: i64,
    pending_request_id: Option<u64>,
    recent_winner: Option<Pubkey>,
    completed_rounds: u64,
}

impl RoundSnapshot {
    fn take(raffle: &mut Raffle) -> Self {
        Self {
            state: raffle.state,
            entrants: std::mem::take(&mut raffle.entrants),
            pool_balance: raffle.pool_balance,
            last_draw_timestamp: raffle.last_draw_timestamp,
            pending_request_id: raffle.pending_request_id,
            recent_winner: raffle.recent_winner,
            completed_rounds: raffle.completed_rounds,
        }
    }

    fn restore(self, raffle: &mut Raffle) {
        raffle.state = self.state;
        raffle.entrants = self.entrants;
        raffle.pool_balance = self.pool_balance;
        raffle.last_draw_timestamp = self.last_draw_timestamp;
        raffle.pending_request_id = self.pending_request_id;
        raffle.recent_winner = self.recent_winner;
        raffle.completed_rounds = self.completed_rounds;
    }
}

impl Raffle {
    /// Moves an eligible round to `Calculating` and records the request the
    /// gateway hands back. Anyone may call this; eligibility is the only guard.
    pub fn request_draw<G: RandomnessGateway>(&mut self, gateway: &mut G, now: i64) -> Result<u64> {
        let eligibility = self.eligibility(now);
        if !eligibility.upkeep_needed() {
            eligibility.log();
            msg!(
                "Pool: {}, players: {}, state: {:?}",
                self.pool_balance,
                self.entrants.len(),
                self.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = gateway.submit_request()?;
        self.pending_request_id = Some(request_id);
        self.state = RaffleState::Calculating;

        msg!("Draw requested, request id {}", request_id);
        Ok(request_id)
    }

    /// Settles the pending draw with the oracle's random word.
    ///
    /// All bookkeeping is applied before `payout` runs, so anything `payout`
    /// re-enters sees an Open, empty round. If `payout` fails the round is
    /// restored exactly and `TransferFailed` is returned; the same request
    /// can then be delivered again.
    pub fn resolve_draw<P>(
        &mut self,
        request_id: u64,
        randomness: &[u8; 32],
        now: i64,
        payout: P,
    ) -> Result<DrawOutcome>
    where
        P: FnOnce(&Pubkey, u64) -> Result<()>,
    {
        match self.pending_request_id {
            Some(pending) if pending == request_id => {}
            pending => {
                msg!("Delivered request {} but pending is {:?}", request_id, pending);
                return err!(RaffleError::UnknownRequest);
            }
        }

        let index = winner_index(randomness, self.entrant_count())
            .ok_or(RaffleError::IndexOutOfRange)?;
        let winner = self.participant_at(index)?;
        let prize = self.pool_balance;
        let round = self
            .completed_rounds
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        let snapshot = RoundSnapshot::take(self);

        self.pending_request_id = None;
        self.state = RaffleState::Open;
        self.last_draw_timestamp = now;
        self.recent_winner = Some(winner);
        self.completed_rounds = round;
        self.reset();

        if let Err(e) = payout(&winner, prize) {
            msg!("Payout of {} to {} failed: {}", prize, winner, e);
            snapshot.restore(self);
            return err!(RaffleError::TransferFailed);
        }

        msg!("Winner {} at index {} receives {}", winner, index, prize);
        Ok(DrawOutcome {
            request_id,
            winner,
            winner_index: index,
            prize,
            round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::test_utils::{raffle_err, random_word, StubGateway};

    const FEE: u64 = 100;
    const INTERVAL: u64 = 60;

    fn raffle() -> Raffle {
        Raffle::new(Pubkey::new_unique(), FEE, INTERVAL, 0)
    }

    fn paid(payments: &RefCell<Vec<(Pubkey, u64)>>) -> impl FnOnce(&Pubkey, u64) -> Result<()> + '_ {
        move |winner: &Pubkey, amount: u64| {
            payments.borrow_mut().push((*winner, amount));
            Ok(())
        }
    }

    fn failing(_: &Pubkey, _: u64) -> Result<()> {
        Err(ProgramError::Custom(0).into())
    }

    #[test]
    fn single_entrant_round_end_to_end() {
        let mut raffle = raffle();
        let a = Pubkey::new_unique();
        let mut gateway = StubGateway::starting_at(7);

        raffle.enter(a, 100).unwrap();
        assert_eq!(raffle.pool_balance, 100);
        assert_eq!(raffle.entrants, vec![a]);

        let request_id = raffle.request_draw(&mut gateway, 61).unwrap();
        assert_eq!(request_id, 7);
        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_eq!(raffle.pending_request_id, Some(7));

        let payments = RefCell::new(Vec::new());
        let outcome = raffle
            .resolve_draw(7, &random_word(42), 62, paid(&payments))
            .unwrap();

        assert_eq!(outcome.winner, a);
        assert_eq!(outcome.winner_index, 0);
        assert_eq!(outcome.prize, 100);
        assert_eq!(outcome.round, 1);
        assert_eq!(payments.into_inner(), vec![(a, 100)]);

        assert_eq!(raffle.state, RaffleState::Open);
        assert!(raffle.entrants.is_empty());
        assert_eq!(raffle.pool_balance, 0);
        assert_eq!(raffle.pending_request_id, None);
        assert_eq!(raffle.last_draw_timestamp, 62);
        assert_eq!(raffle.recent_winner, Some(a));
        assert_eq!(raffle.completed_rounds, 1);
    }

    #[test]
    fn duplicate_entries_weight_the_draw() {
        let mut raffle = raffle();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut gateway = StubGateway::starting_at(1);

        raffle.enter(a, FEE).unwrap();
        raffle.enter(b, FEE).unwrap();
        raffle.enter(a, FEE).unwrap();
        assert_eq!(raffle.entrants, vec![a, b, a]);
        assert_eq!(raffle.pool_balance, 300);

        let request_id = raffle.request_draw(&mut gateway, 100).unwrap();
        let payments = RefCell::new(Vec::new());
        let outcome = raffle
            .resolve_draw(request_id, &random_word(5), 100, paid(&payments))
            .unwrap();

        assert_eq!(outcome.winner_index, 2);
        assert_eq!(outcome.winner, a);
        assert_eq!(payments.into_inner(), vec![(a, 300)]);
    }

    #[test]
    fn middle_slot_can_win() {
        let mut raffle = raffle();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut gateway = StubGateway::starting_at(1);

        raffle.enter(a, FEE).unwrap();
        raffle.enter(b, FEE).unwrap();
        raffle.enter(a, FEE).unwrap();
        let request_id = raffle.request_draw(&mut gateway, 100).unwrap();

        let outcome = raffle
            .resolve_draw(request_id, &random_word(4), 100, |_, _| Ok(()))
            .unwrap();
        assert_eq!(outcome.winner, b);
    }

    #[test]
    fn draw_with_no_entrants_is_rejected() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);

        for now in [0, 61, 1_000_000] {
            let err = raffle.request_draw(&mut gateway, now).unwrap_err();
            assert_eq!(err, raffle_err(RaffleError::UpkeepNotNeeded));
        }
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(gateway.submitted, 0);
    }

    #[test]
    fn draw_before_interval_is_rejected() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();

        let err = raffle.request_draw(&mut gateway, 59).unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::UpkeepNotNeeded));
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.pending_request_id, None);
    }

    #[test]
    fn only_one_draw_in_flight() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();

        raffle.request_draw(&mut gateway, 61).unwrap();
        let err = raffle.request_draw(&mut gateway, 120).unwrap_err();

        assert_eq!(err, raffle_err(RaffleError::UpkeepNotNeeded));
        assert_eq!(raffle.pending_request_id, Some(1));
        assert_eq!(gateway.submitted, 1);
    }

    #[test]
    fn gateway_failure_leaves_round_open() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        gateway.fail = true;
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();

        assert!(raffle.request_draw(&mut gateway, 61).is_err());
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.pending_request_id, None);
    }

    #[test]
    fn unknown_request_is_rejected_without_mutation() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(7);
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        raffle.request_draw(&mut gateway, 61).unwrap();

        for forged in [0, 6, 8, 99] {
            let err = raffle
                .resolve_draw(forged, &random_word(1), 70, |_, _| panic!("paid on forged id"))
                .unwrap_err();
            assert_eq!(err, raffle_err(RaffleError::UnknownRequest));
        }

        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_eq!(raffle.pending_request_id, Some(7));
        assert_eq!(raffle.entrant_count(), 1);
        assert_eq!(raffle.pool_balance, FEE);
    }

    #[test]
    fn delivery_without_pending_request_is_rejected() {
        let mut raffle = raffle();
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();

        for id in [0, 1] {
            let err = raffle
                .resolve_draw(id, &random_word(1), 70, |_, _| Ok(()))
                .unwrap_err();
            assert_eq!(err, raffle_err(RaffleError::UnknownRequest));
        }
        assert_eq!(raffle.state, RaffleState::Open);
    }

    #[test]
    fn a_request_resolves_only_once() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(3);
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        raffle.request_draw(&mut gateway, 61).unwrap();

        raffle.resolve_draw(3, &random_word(0), 62, |_, _| Ok(())).unwrap();

        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        let err = raffle
            .resolve_draw(3, &random_word(0), 63, |_, _| panic!("paid twice"))
            .unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::UnknownRequest));
        assert_eq!(raffle.entrant_count(), 1);
        assert_eq!(raffle.pool_balance, FEE);
        assert_eq!(raffle.state, RaffleState::Open);
    }

    #[test]
    fn failed_payout_restores_the_round() {
        let mut raffle = raffle();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut gateway = StubGateway::starting_at(7);
        raffle.enter(a, FEE).unwrap();
        raffle.enter(b, FEE).unwrap();
        raffle.request_draw(&mut gateway, 61).unwrap();

        let err = raffle
            .resolve_draw(7, &random_word(1), 70, failing)
            .unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::TransferFailed));

        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_eq!(raffle.pending_request_id, Some(7));
        assert_eq!(raffle.entrants, vec![a, b]);
        assert_eq!(raffle.pool_balance, 2 * FEE);
        assert_eq!(raffle.last_draw_timestamp, 0);
        assert_eq!(raffle.recent_winner, None);
        assert_eq!(raffle.completed_rounds, 0);

        // Redelivery of the same request succeeds once the payout path works.
        let payments = RefCell::new(Vec::new());
        let outcome = raffle
            .resolve_draw(7, &random_word(1), 80, paid(&payments))
            .unwrap();
        assert_eq!(outcome.winner, b);
        assert_eq!(payments.into_inner(), vec![(b, 2 * FEE)]);
        assert_eq!(gateway.submitted, 1);
    }

    #[test]
    fn next_round_starts_its_interval_at_resolution() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        raffle.request_draw(&mut gateway, 61).unwrap();
        raffle.resolve_draw(1, &random_word(0), 100, |_, _| Ok(())).unwrap();

        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        let err = raffle.request_draw(&mut gateway, 159).unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::UpkeepNotNeeded));

        assert_eq!(raffle.request_draw(&mut gateway, 160).unwrap(), 2);
        assert_eq!(raffle.completed_rounds, 1);
    }

    #[test]
    fn full_raffle_still_resolves() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        let players: Vec<Pubkey> = (0..Raffle::MAX_ENTRANTS).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.enter(*player, FEE).unwrap();
        }
        let err = raffle.enter(Pubkey::new_unique(), FEE).unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::RaffleFull));

        let last = Raffle::MAX_ENTRANTS as u64 - 1;
        raffle.request_draw(&mut gateway, 61).unwrap();
        let payments = RefCell::new(Vec::new());
        let outcome = raffle
            .resolve_draw(1, &random_word(last), 62, paid(&payments))
            .unwrap();

        let prize = FEE * Raffle::MAX_ENTRANTS as u64;
        assert_eq!(outcome.winner_index, last);
        assert_eq!(payments.into_inner(), vec![(players[last as usize], prize)]);
        assert!(raffle.entrants.is_empty());

        // The emptied round accepts entries again.
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        assert_eq!(raffle.entrant_count(), 1);
    }

    #[test]
    fn failed_payout_on_a_full_raffle_keeps_every_entrant() {
        let mut raffle = raffle();
        let mut gateway = StubGateway::starting_at(1);
        let players: Vec<Pubkey> = (0..Raffle::MAX_ENTRANTS).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.enter(*player, FEE).unwrap();
        }
        raffle.request_draw(&mut gateway, 61).unwrap();

        let err = raffle.resolve_draw(1, &random_word(3), 62, failing).unwrap_err();
        assert_eq!(err, raffle_err(RaffleError::TransferFailed));
        assert_eq!(raffle.entrants, players);
        assert_eq!(raffle.state, RaffleState::Calculating);
    }
}
