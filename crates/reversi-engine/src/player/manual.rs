use crate::board::Board;
use crate::decision::Decision;
use crate::error::{Error, Result, require_color};
use crate::player::Player;
use crate::stone::Stone;

/// Forwards a decision chosen elsewhere, typically by a human.
///
/// A decision is queued with [`ManualPlayer::set_next_decision`] and handed
/// out by the next [`Player::play`] call, which consumes it.
#[derive(Debug, Clone)]
pub struct ManualPlayer {
    color: Stone,
    next_decision: Option<Decision>,
}

impl ManualPlayer {
    pub fn new(color: Stone) -> Result<ManualPlayer> {
        Ok(ManualPlayer {
            color: require_color(color, "player")?,
            next_decision: None,
        })
    }

    /// Queues the decision for the next turn, replacing any earlier one.
    pub fn set_next_decision(&mut self, decision: Decision) {
        self.next_decision = Some(decision);
    }

    pub fn has_pending_decision(&self) -> bool {
        self.next_decision.is_some()
    }
}

impl Player for ManualPlayer {
    fn color(&self) -> Stone {
        self.color
    }

    /// # Errors
    ///
    /// Returns [`Error::NoPendingDecision`] if nothing is queued and
    /// [`Error::IllegalMove`] if the queued placement is not legal on `board`.
    fn play(&mut self, board: &Board) -> Result<Decision> {
        let decision = self
            .next_decision
            .take()
            .ok_or(Error::NoPendingDecision { color: self.color })?;
        if let Decision::Place(sq) = decision
            && !board.is_legal(sq, self.color)
        {
            return Err(Error::IllegalMove {
                decision,
                color: self.color,
            });
        }
        Ok(decision)
    }
}
