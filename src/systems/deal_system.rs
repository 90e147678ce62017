// src/systems/deal_system.rs

use log::info;

use crate::board::Board;
use crate::components::stack::StackType;
use crate::config::rules::TABLEAU_COUNT;
use crate::ecs::system::System;
use crate::logic::deck::create_shuffled_deck;

/// 初期カード配置システムだよ！🎉
///
/// 1. シャッフル済みの 52 枚デッキを作って、1 枚ずつエンティティにする
/// 2. 場札 i 列目 (0 始まり) に i + 1 枚ずつ配って、各列の一番上だけ表にする
/// 3. 残り 24 枚は全部裏向きのまま山札へ
///
/// 空の `Board` に対して一度だけ走らせる想定。
#[derive(Debug, Default, Clone)]
pub struct DealInitialCardsSystem {
    /// シャッフルのシード。`None` ならランダム。
    pub seed: Option<u64>,
}

impl DealInitialCardsSystem {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, board: &mut Board) {
        if board.total_cards() != 0 {
            log::warn!("DealInitialCardsSystem: board already has cards, skipping deal");
            return;
        }

        let deck = create_shuffled_deck(self.seed);
        let spawned: Vec<_> = deck.into_iter().map(|card| board.spawn_card(card)).collect();
        let mut entities = spawned.into_iter();

        // --- 場札 (Tableau) ---
        // 7 列で 28 枚。デッキは 52 枚あるので next() が尽きることはない。
        let mut dealt = 0;
        for tableau_index in 0..TABLEAU_COUNT as u8 {
            let stack = StackType::Tableau(tableau_index);
            for entity in entities.by_ref().take(usize::from(tableau_index) + 1) {
                match board.place(stack, entity) {
                    Ok(()) => dealt += 1,
                    Err(e) => log::error!("DealInitialCardsSystem: failed to place {:?} on {}: {}", entity, stack, e),
                }
            }
            if let Err(e) = board.reveal_top_if_face_down(stack) {
                log::error!("DealInitialCardsSystem: failed to reveal top of {}: {}", stack, e);
            }
        }
        info!("場札への配置完了！ ({}枚)", dealt);

        // --- 山札 (Stock) ---
        let mut stocked = 0;
        for entity in entities {
            match board.place(StackType::Stock, entity) {
                Ok(()) => stocked += 1,
                Err(e) => log::error!("DealInitialCardsSystem: failed to place {:?} on Stock: {}", entity, e),
            }
        }
        info!("山札への配置完了！ ({}枚)", stocked);
    }
}
