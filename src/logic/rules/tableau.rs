//! 場札 (Tableau) へのカード移動ルール。

use crate::components::card::{Card, Rank};

/// `card` を、一番上が `target_top` の場札に置けるか。
///
/// - 空の場札: K だけ置ける
/// - それ以外: 色が違って、ランクがちょうど 1 つ下
pub fn can_move_to_tableau(card: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        None => card.rank == Rank::King,
        Some(top) => {
            let colors_different = card.is_opposite_color(top);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            log::debug!(
                "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
                card,
                top,
                colors_different,
                rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
    }
}
