//! 組札 (Foundation) へのカード移動ルール。

use crate::components::card::{Card, Rank};

/// `card` を、一番上が `target_top` の組札に置けるか。
///
/// - 空の組札: A だけ置ける (スートは問わない。最初の A で決まる)
/// - それ以外: 同じスートで、ランクがちょうど 1 つ上
pub fn can_move_to_foundation(card: &Card, target_top: Option<&Card>) -> bool {
    let result = match target_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    };
    log::debug!(
        "[Foundation Rule] {} onto {}: {}",
        card,
        target_top.map_or_else(|| "empty foundation".to_string(), |t| t.to_string()),
        result
    );
    result
}
