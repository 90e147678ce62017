//! Engine error types.
//!
//! Illegal moves are not errors (they come back as `MoveOutcome::Rejected`).
//! Everything here means the caller handed the engine something inconsistent.

use thiserror::Error;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The entity is not one of the 52 cards of this game.
    #[error("Unknown card entity {0:?}")]
    UnknownCard(Entity),

    /// The pile id does not exist on the board (e.g. `Tableau(9)`).
    #[error("No such pile: {0}")]
    InvalidPile(StackType),

    /// Tried to take more cards off a pile than it holds.
    #[error("Cannot remove {requested} cards from {stack}: only {available} present")]
    EmptySourceViolation {
        stack: StackType,
        requested: usize,
        available: usize,
    },

    /// `commit_drag` was called without a matching `begin_drag`.
    #[error("No drag in progress")]
    NoDragInProgress,

    /// Board bookkeeping went out of sync (duplicate/missing card, stale back-reference).
    #[error("Board integrity violated: {0}")]
    IntegrityViolation(String),
}

pub type GameResult<T> = Result<T, GameError>;
