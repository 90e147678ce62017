//! カード移動の全体的な妥当性チェック。

use crate::components::card::Card;
use crate::components::stack::StackType;

use super::{foundation, tableau};

/// `moving` から始まる `run_len` 枚を、種類 `target` で一番上が `target_top` の山に置けるか。
///
/// 動かす列は、元の山の一番上に続く表向きのランであることが前提。
/// 重なり判定みたいな見た目の話はここでは一切しない。
pub fn is_legal_move(
    moving: &Card,
    run_len: usize,
    target: StackType,
    target_top: Option<&Card>,
) -> bool {
    if run_len == 0 {
        return false;
    }
    match target {
        // 組札には 1 回 1 枚だけ
        StackType::Foundation(_) => run_len == 1 && foundation::can_move_to_foundation(moving, target_top),
        StackType::Tableau(_) => tableau::can_move_to_tableau(moving, target_top),
        StackType::Stock | StackType::Waste => {
            log::debug!("[Rules Validation] Moving to {} is not allowed.", target);
            false
        }
    }
}
