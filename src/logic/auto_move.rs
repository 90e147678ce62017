//! カードの自動移動に関するロジック🪄
//! ダブルクリックされたカードを、置ける組札があればそこへ送る時に使うよ。

use crate::board::Board;
use crate::components::stack::StackType;
use crate::config::rules::FOUNDATION_COUNT;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::logic::rules;

/// `card` を自動で置ける組札を探す。
///
/// カードは表向きで、今いる山の一番上 (1 枚だけで動かせる) じゃないとダメ。
/// 組札は 0 から順番に見て、最初に置けたところを返す。
pub fn find_automatic_foundation_move(board: &Board, card: Entity) -> GameResult<Option<StackType>> {
    let source = board.locate(card)?;
    if source.is_foundation() || source == StackType::Stock {
        return Ok(None);
    }
    if board.pile(source)?.top_card() != Some(card) {
        return Ok(None);
    }
    let moving = board.card(card)?;
    if moving.is_face_down() {
        return Ok(None);
    }

    for i in 0..FOUNDATION_COUNT as u8 {
        let target = StackType::Foundation(i);
        if rules::is_legal_move(moving, 1, target, board.top_card(target)?) {
            log::debug!("[AutoMove] {} can go to {}", moving, target);
            return Ok(Some(target));
        }
    }
    Ok(None)
}
