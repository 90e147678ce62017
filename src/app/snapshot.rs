//! Read-only view of the board for the presentation layer.
//!
//! The renderer asks for this after every command and redraws from it.

use serde::{Serialize, Serializer};

use crate::board::Board;
use crate::components::card::{Rank, Suit};
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::systems::MoveCardSystem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSnapshot {
    pub entity: Entity,
    pub suit: Suit,
    /// JSON では 1 (A) から 13 (K) の数値。
    #[serde(serialize_with = "rank_as_value")]
    pub rank: Rank,
    pub is_face_up: bool,
    /// Whether a drag may start on this card (see `MoveCardSystem::pick_up`).
    pub draggable: bool,
}

fn rank_as_value<S: Serializer>(rank: &Rank, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(rank.value())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PileSnapshot {
    pub stack_type: StackType,
    pub name: String,
    /// Bottom to top.
    pub cards: Vec<CardSnapshot>,
}

/// All 13 piles in board order: Stock, Waste, Foundation 0..4, Tableau 0..7.
pub fn piles_snapshot(board: &Board) -> GameResult<Vec<PileSnapshot>> {
    board
        .piles()
        .iter()
        .map(|pile| {
            let cards = pile
                .cards()
                .iter()
                .map(|&entity| {
                    let card = board.card(entity)?;
                    Ok(CardSnapshot {
                        entity,
                        suit: card.suit,
                        rank: card.rank,
                        is_face_up: card.is_face_up,
                        draggable: MoveCardSystem.pick_up(board, entity)?.is_some(),
                    })
                })
                .collect::<GameResult<Vec<_>>>()?;
            Ok(PileSnapshot { stack_type: pile.stack_type(), name: pile.name(), cards })
        })
        .collect()
}
