//! ルール判定で共通して使うヘルパー。

use crate::components::card::Card;

use super::tableau::can_move_to_tableau;

/// 一緒に動かせるカード列 (ラン) かどうか。
///
/// 全部表向きで、下から上に向かって「色違い・ランク 1 つ下」で繋がってる必要がある。
/// 1 枚だけなら表向きであれば OK。空の列は動かせない。
pub fn is_movable_run(run: &[&Card]) -> bool {
    if run.is_empty() || run.iter().any(|card| card.is_face_down()) {
        return false;
    }
    run.windows(2).all(|pair| can_move_to_tableau(pair[1], Some(pair[0])))
}
