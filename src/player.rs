//! Player interface and the shared turn-taking loop.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;

/// Interface implemented by the two player types.
pub trait Player {
    /// Choose the next target on the opposing board. This is a pure query:
    /// legality is enforced by [`take_turn`], which re-asks on a rejected
    /// target.
    fn produce_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord;

    /// Inform the player of the outcome of its accepted shot.
    fn announce_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that its chosen target was rejected.
    fn report_rejected(&mut self, _target: Coord, _err: BoardError) {}
}

/// Run one turn for `player` against `enemy`: ask for targets until the
/// board accepts one, then report the outcome. Returns whether the same
/// player shoots again.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    enemy: &mut Board,
    continue_on_hit: bool,
) -> bool {
    loop {
        let target = player.produce_target(rng, enemy.size());
        match enemy.resolve_shot(target) {
            Ok(outcome) => {
                player.announce_result(target, outcome);
                return outcome.continues_turn(continue_on_hit);
            }
            Err(e) => {
                log::debug!("target {} rejected: {}", target, e);
                player.report_rejected(target, e);
            }
        }
    }
}
