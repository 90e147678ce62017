// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;

// --- テスト用ヘルパー ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank, is_face_up: true }
}

#[test]
fn test_foundation_rules() {
    let ace_hearts = up(Suit::Heart, Rank::Ace);
    let king_spades = up(Suit::Spade, Rank::King);
    let four_hearts = up(Suit::Heart, Rank::Four);
    let five_hearts = up(Suit::Heart, Rank::Five);
    let six_hearts = up(Suit::Heart, Rank::Six);
    let four_clubs = up(Suit::Club, Rank::Four);

    assert!(can_move_to_foundation(&ace_hearts, None), "空の組札に A❤️ は置ける");
    assert!(!can_move_to_foundation(&king_spades, None), "空の組札に K♠ は置けない");
    assert!(can_move_to_foundation(&five_hearts, Some(&four_hearts)), "4❤️ の上に 5❤️ は置ける");
    assert!(!can_move_to_foundation(&five_hearts, Some(&six_hearts)), "6❤️ の上に 5❤️ は置けない");
    assert!(!can_move_to_foundation(&five_hearts, Some(&four_clubs)), "スート違いはダメ");
}

#[test]
fn test_tableau_rules() {
    let king_spades = up(Suit::Spade, Rank::King);
    let queen_hearts = up(Suit::Heart, Rank::Queen);
    let jack_spades = up(Suit::Spade, Rank::Jack);
    let jack_diamonds = up(Suit::Diamond, Rank::Jack);
    let ten_spades = up(Suit::Spade, Rank::Ten);

    assert!(can_move_to_tableau(&king_spades, None), "空の場札に K♠ は置ける");
    assert!(!can_move_to_tableau(&queen_hearts, None), "空の場札に Q❤️ は置けない");
    assert!(can_move_to_tableau(&jack_spades, Some(&queen_hearts)), "Q❤️ に J♠ は置ける");
    assert!(!can_move_to_tableau(&jack_diamonds, Some(&queen_hearts)), "同色はダメ");
    assert!(!can_move_to_tableau(&ten_spades, Some(&queen_hearts)), "ランク違いはダメ");
}

#[test]
fn test_is_legal_move_documented_cases() {
    let ace_hearts = up(Suit::Heart, Rank::Ace);
    let king_spades = up(Suit::Spade, Rank::King);
    let seven_clubs = up(Suit::Club, Rank::Seven);
    let eight_diamonds = up(Suit::Diamond, Rank::Eight);
    let eight_spades = up(Suit::Spade, Rank::Eight);

    assert!(is_legal_move(&ace_hearts, 1, StackType::Foundation(0), None));
    assert!(!is_legal_move(&king_spades, 1, StackType::Foundation(0), None));
    assert!(is_legal_move(&seven_clubs, 1, StackType::Tableau(3), Some(&eight_diamonds)));
    assert!(!is_legal_move(&seven_clubs, 1, StackType::Tableau(3), Some(&eight_spades)));
    assert!(is_legal_move(&king_spades, 1, StackType::Tableau(0), None));
}

#[test]
fn test_is_legal_move_rejects_runs_on_foundation() {
    let two_hearts = up(Suit::Heart, Rank::Two);
    let ace_hearts = up(Suit::Heart, Rank::Ace);
    assert!(is_legal_move(&two_hearts, 1, StackType::Foundation(2), Some(&ace_hearts)));
    assert!(!is_legal_move(&two_hearts, 2, StackType::Foundation(2), Some(&ace_hearts)));
    assert!(!is_legal_move(&two_hearts, 0, StackType::Foundation(2), Some(&ace_hearts)));
}

#[test]
fn test_is_legal_move_never_targets_stock_or_waste() {
    let king_spades = up(Suit::Spade, Rank::King);
    assert!(!is_legal_move(&king_spades, 1, StackType::Stock, None));
    assert!(!is_legal_move(&king_spades, 1, StackType::Waste, None));
}

#[test]
fn test_is_movable_run() {
    let nine_hearts = up(Suit::Heart, Rank::Nine);
    let eight_clubs = up(Suit::Club, Rank::Eight);
    let seven_diamonds = up(Suit::Diamond, Rank::Seven);
    let seven_spades = up(Suit::Spade, Rank::Seven);
    let mut hidden = up(Suit::Spade, Rank::Six);
    hidden.flip();

    assert!(is_movable_run(&[&nine_hearts]));
    assert!(is_movable_run(&[&nine_hearts, &eight_clubs, &seven_diamonds]));
    assert!(!is_movable_run(&[&nine_hearts, &eight_clubs, &seven_spades]), "同色の繋がりはダメ");
    assert!(!is_movable_run(&[&hidden]), "裏向きは動かせない");
    assert!(!is_movable_run(&[]));
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false));
    assert!(!can_deal_from_stock(true));
    assert!(!can_reset_stock_from_waste(false, false));
    assert!(!can_reset_stock_from_waste(false, true));
    assert!(can_reset_stock_from_waste(true, false));
    assert!(!can_reset_stock_from_waste(true, true), "両方空なら何もしない");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52));
    assert!(!check_win_condition(51));
    assert!(!check_win_condition(0));

    assert!(is_won_by_remaining(0));
    assert!(!is_won_by_remaining(1), "1 枚残りはまだ勝ちじゃない");
    assert!(!is_won_by_remaining(2));
}
