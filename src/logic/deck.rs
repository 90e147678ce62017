// src/logic/deck.rs

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な 52 枚のデッキを作るよ！🃏
///
/// スート × ランクの全組み合わせで、全部裏向き。まだどの山にも属してない。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

/// デッキを一様にシャッフルする。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みの 52 枚デッキを作る。
///
/// `seed` を渡すと毎回同じ並びになるよ (テストとかリプレイ用)。
pub fn create_shuffled_deck(seed: Option<u64>) -> Vec<Card> {
    let mut deck = create_standard_deck();
    match seed {
        Some(seed) => shuffle_deck(&mut deck, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_deck(&mut deck, &mut thread_rng()),
    }
    deck
}
