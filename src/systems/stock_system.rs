// src/systems/stock_system.rs
//! Handles clicks on the Stock pile: dealing one card to Waste, or recycling Waste back into Stock.

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::logic::rules::stock_waste;

/// What a Stock activation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOutcome {
    /// The top Stock card went to Waste face-up.
    Drew(Entity),
    /// Stock was empty; this many Waste cards were turned back into Stock.
    Recycled(usize),
    /// Both Stock and Waste were empty.
    Nothing,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StockSystem;

impl StockSystem {
    /// Draw if Stock has cards, otherwise recycle Waste.
    pub fn activate(&self, board: &mut Board) -> GameResult<StockOutcome> {
        if let Some(entity) = self.deal_one_card_from_stock(board)? {
            return Ok(StockOutcome::Drew(entity));
        }
        match self.reset_waste_to_stock(board)? {
            0 => Ok(StockOutcome::Nothing),
            n => Ok(StockOutcome::Recycled(n)),
        }
    }

    /// Moves the top Stock card to Waste and turns it face-up.
    /// Returns the dealt card, or `None` if Stock is empty.
    pub fn deal_one_card_from_stock(&self, board: &mut Board) -> GameResult<Option<Entity>> {
        if !stock_waste::can_deal_from_stock(board.stock().is_empty()) {
            info!("Stock is empty. Cannot deal.");
            return Ok(None);
        }
        let moved = board.transfer(StackType::Stock, 1, StackType::Waste)?;
        let Some(&entity) = moved.first() else {
            return Ok(None);
        };
        let card = board.card_mut(entity)?;
        if card.is_face_down() {
            card.flip();
        }
        info!("Placed {} to the waste.", card);
        Ok(Some(entity))
    }

    /// Turns the whole Waste pile back into a face-down Stock when Stock is empty.
    ///
    /// Waste is reversed on the way so the first card ever discarded becomes the next draw,
    /// which keeps the draw order identical from one pass to the next.
    /// Returns the number of cards moved (0 when nothing happened).
    pub fn reset_waste_to_stock(&self, board: &mut Board) -> GameResult<usize> {
        if !stock_waste::can_reset_stock_from_waste(board.stock().is_empty(), board.waste().is_empty()) {
            info!("Cannot reset Waste to Stock (Stock not empty or Waste empty).");
            return Ok(0);
        }

        // 裏返しは捨て札に入ったままやる。途中で失敗しても、どのカードも山から外れない。
        let waste: Vec<Entity> = board.waste().cards().to_vec();
        for &entity in &waste {
            board.card_mut(entity)?.is_face_up = false;
        }

        let mut cards = board.take_all(StackType::Waste)?;
        cards.reverse();
        let count = cards.len();
        for entity in cards {
            board.place(StackType::Stock, entity)?;
        }
        info!("Stock refilled from discard pile ({} cards).", count);
        Ok(count)
    }
}
