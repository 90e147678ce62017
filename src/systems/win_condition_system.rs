// src/systems/win_condition_system.rs

use crate::board::Board;
use crate::components::game_state::GameStatus;
use crate::ecs::system::System;
use crate::logic::rules::{check_win_condition, is_won_by_remaining};

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札に 52 枚全部が揃っていて、組札の外に 1 枚も残ってない時だけ勝ち。
#[derive(Debug, Default, Clone, Copy)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn check_win_condition(&self, board: &Board) -> bool {
        check_win_condition(board.foundation_card_count())
            && is_won_by_remaining(board.cards_outside_foundations())
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, board: &mut Board) {
        if board.status != GameStatus::Playing {
            return;
        }
        if self.check_win_condition(board) {
            log::info!("WinConditionSystem: 勝利条件達成！🏆");
            board.status = GameStatus::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
    use crate::components::stack::StackType;

    /// 4 つの組札に A..K を揃えた盤面。`leave_out` 枚だけ最後のスートの上から場札に残す。
    fn nearly_finished_board(leave_out: usize) -> Board {
        let mut board = Board::new();
        for (i, suit) in ALL_SUITS.into_iter().enumerate() {
            for rank in ALL_RANKS {
                let e = board.spawn_card(Card { suit, rank, is_face_up: true });
                board.place(StackType::Foundation(i as u8), e).unwrap();
            }
        }
        if leave_out > 0 {
            board.transfer(StackType::Foundation(3), leave_out, StackType::Tableau(0)).unwrap();
        }
        board
    }

    #[test]
    fn all_cards_on_foundations_is_a_win() {
        let mut board = nearly_finished_board(0);
        board.verify_integrity().unwrap();
        WinConditionSystem.run(&mut board);
        assert_eq!(board.status, GameStatus::Won);
    }

    #[test]
    fn one_card_left_is_not_a_win() {
        let mut board = nearly_finished_board(1);
        WinConditionSystem.run(&mut board);
        assert_eq!(board.status, GameStatus::Playing);
    }

    #[test]
    fn two_cards_left_is_not_a_win() {
        let mut board = nearly_finished_board(2);
        assert!(!WinConditionSystem.check_win_condition(&board));
        WinConditionSystem.run(&mut board);
        assert_eq!(board.status, GameStatus::Playing);
    }

    #[test]
    fn empty_board_is_not_a_win() {
        assert!(!WinConditionSystem.check_win_condition(&Board::new()));
    }
}
