//! ゲームの勝利条件。
//!
//! 勝ち = 52 枚全部が組札にある (山札・捨て札・場札が全部空)。
//! 「組札の外に 1 枚だけ残っている」で勝ちにはしない。

use crate::config::rules::DECK_SIZE;

/// 組札にあるカードの合計枚数から判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}

/// 組札の外 (山札 + 捨て札 + 場札) に残っている枚数から判定する。
pub fn is_won_by_remaining(cards_outside_foundations: usize) -> bool {
    cards_outside_foundations == 0
}
