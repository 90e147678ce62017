// src/systems/move_card_system.rs

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::Card;
use crate::components::dragging_info::DraggingInfo;
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::rules::{is_legal_move, is_movable_run};

/// 移動を試した結果。ルール違反は「エラー」じゃなくて `Rejected` で返すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Applied,
    Rejected,
}

/// 実際に行われた移動の記録。ログやイベント用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// 動いたカード (下から上の順)。
    pub cards: Vec<Entity>,
    pub from: StackType,
    pub to: StackType,
    /// 置く前の移動先の一番上のカード。空の山に置いたなら `None`。
    pub onto: Option<Card>,
    /// 移動元の場札で新しく表になったカード。
    pub revealed: Option<Entity>,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカード (とその上に乗ってるカード) を、どの山に置くか」を受け取って、
/// ルール上 OK なら盤面を書き換える。ダメなら何も触らずに `None`。
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// カードを持ち上げられるか調べて、持ち上がるカード群を返す。
    ///
    /// 持ち上げられないケース (ここで弾く):
    /// - 山札のカード (山札はクリックで引くだけ)
    /// - 裏向きのカード
    /// - 捨て札・組札の一番上以外
    /// - 場札で、そこから上が正しいランになっていない
    pub fn pick_up(&self, board: &Board, card: Entity) -> GameResult<Option<DraggingInfo>> {
        let source = board.locate(card)?;
        let pile = board.pile(source)?;
        let group: Vec<Entity> = match source {
            StackType::Stock => {
                debug!("pick_up: {:?} is in Stock, not draggable", card);
                return Ok(None);
            }
            StackType::Waste | StackType::Foundation(_) => {
                if pile.top_card() != Some(card) {
                    debug!("pick_up: {:?} is not the top of {}", card, source);
                    return Ok(None);
                }
                vec![card]
            }
            StackType::Tableau(_) => match pile.run_from(card) {
                Some(run) => run.to_vec(),
                None => {
                    return Err(GameError::IntegrityViolation(format!(
                        "card {:?} claims to be in {} but the pile does not hold it",
                        card, source
                    )))
                }
            },
        };

        let cards = group
            .iter()
            .map(|&e| board.card(e))
            .collect::<GameResult<Vec<&Card>>>()?;
        if !is_movable_run(&cards) {
            debug!("pick_up: {:?} does not start a movable run in {}", card, source);
            return Ok(None);
        }
        Ok(Some(DraggingInfo::new(source, group)))
    }

    /// 持ち上げたカード群を `target` に置く。
    ///
    /// 合法なら移動して、移動元が場札なら新しい一番上を表にする。
    /// 不正な移動は盤面を一切変えずに `Ok(None)`。
    pub fn execute(
        &self,
        board: &mut Board,
        dragging: &DraggingInfo,
        target: StackType,
    ) -> GameResult<Option<AppliedMove>> {
        let target_pile = board.pile(target)?;
        let Some(representative) = dragging.representative() else {
            return Ok(None);
        };
        if target == dragging.original_stack_type {
            debug!("execute: target {} is the source pile", target);
            return Ok(None);
        }

        // 持ち上げた時から盤面が変わってないか確認 (グループが移動元の一番上に乗ってるはず)
        let source_pile = board.pile(dragging.original_stack_type)?;
        if !source_pile.cards().ends_with(&dragging.dragged_group) {
            return Err(GameError::IntegrityViolation(format!(
                "dragged group {:?} is no longer on top of {}",
                dragging.dragged_group, dragging.original_stack_type
            )));
        }

        let onto = match target_pile.top_card() {
            Some(top) => Some(board.card(top)?.clone()),
            None => None,
        };
        let moving = board.card(representative)?;
        if !is_legal_move(moving, dragging.len(), target, onto.as_ref()) {
            debug!("execute: {} -> {} rejected", moving, target);
            return Ok(None);
        }

        let from = dragging.original_stack_type;
        let cards = board.transfer(from, dragging.len(), target)?;
        let revealed = if from.is_tableau() {
            board.reveal_top_if_face_down(from)?
        } else {
            None
        };
        info!("Moved {} card(s) from {} to {}", cards.len(), from, target);

        Ok(Some(AppliedMove { cards, from, to: target, onto, revealed }))
    }

    /// `pick_up` + `execute` をまとめてやる。持ち上げられなければ `None`。
    pub fn try_move(&self, board: &mut Board, card: Entity, target: StackType) -> GameResult<Option<AppliedMove>> {
        match self.pick_up(board, card)? {
            Some(dragging) => self.execute(board, &dragging, target),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn put(board: &mut Board, stack: StackType, suit: Suit, rank: Rank, face_up: bool) -> Entity {
        let e = board.spawn_card(Card { suit, rank, is_face_up: face_up });
        board.place(stack, e).unwrap();
        e
    }

    #[test]
    fn moves_run_and_reveals_new_top() {
        let mut board = Board::new();
        let hidden = put(&mut board, StackType::Tableau(0), Suit::Spade, Rank::Two, false);
        let nine = put(&mut board, StackType::Tableau(0), Suit::Heart, Rank::Nine, true);
        let eight = put(&mut board, StackType::Tableau(0), Suit::Club, Rank::Eight, true);
        let ten = put(&mut board, StackType::Tableau(1), Suit::Spade, Rank::Ten, true);

        let applied = MoveCardSystem
            .try_move(&mut board, nine, StackType::Tableau(1))
            .unwrap()
            .expect("9❤️ 8♣ は 10♠ に乗せられる");

        assert_eq!(applied.cards, vec![nine, eight]);
        assert_eq!(applied.revealed, Some(hidden));
        assert_eq!(board.pile(StackType::Tableau(1)).unwrap().cards(), &[ten, nine, eight]);
        assert!(board.card(hidden).unwrap().is_face_up());
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut board = Board::new();
        let seven = put(&mut board, StackType::Waste, Suit::Club, Rank::Seven, true);
        let eight = put(&mut board, StackType::Tableau(2), Suit::Spade, Rank::Eight, true);

        assert_eq!(MoveCardSystem.try_move(&mut board, seven, StackType::Tableau(2)).unwrap(), None);
        assert_eq!(board.waste().cards(), &[seven]);
        assert_eq!(board.pile(StackType::Tableau(2)).unwrap().cards(), &[eight]);
    }

    #[test]
    fn runs_cannot_go_to_foundation() {
        let mut board = Board::new();
        put(&mut board, StackType::Foundation(0), Suit::Heart, Rank::Ace, true);
        let two = put(&mut board, StackType::Tableau(0), Suit::Heart, Rank::Two, true);
        let dragging = DraggingInfo::new(StackType::Tableau(0), vec![two]);
        assert!(MoveCardSystem.execute(&mut board, &dragging, StackType::Foundation(0)).unwrap().is_some());

        // 2♠ 単体なら A♠ の上に行けるけど、上に A♦ が乗ってたら 2 枚まとめては無理
        let two_spades = put(&mut board, StackType::Tableau(1), Suit::Spade, Rank::Two, true);
        let ace_diamonds = put(&mut board, StackType::Tableau(1), Suit::Diamond, Rank::Ace, true);
        put(&mut board, StackType::Foundation(1), Suit::Spade, Rank::Ace, true);
        let run = DraggingInfo::new(StackType::Tableau(1), vec![two_spades, ace_diamonds]);
        assert_eq!(MoveCardSystem.execute(&mut board, &run, StackType::Foundation(1)).unwrap(), None);
    }

    #[test]
    fn pick_up_rules() {
        let mut board = Board::new();
        let stock = put(&mut board, StackType::Stock, Suit::Club, Rank::Four, false);
        let waste_low = put(&mut board, StackType::Waste, Suit::Club, Rank::Five, true);
        let waste_top = put(&mut board, StackType::Waste, Suit::Club, Rank::Six, true);
        let hidden = put(&mut board, StackType::Tableau(3), Suit::Heart, Rank::Queen, false);
        put(&mut board, StackType::Tableau(3), Suit::Heart, Rank::Jack, true);

        assert_eq!(MoveCardSystem.pick_up(&board, stock).unwrap(), None);
        assert_eq!(MoveCardSystem.pick_up(&board, waste_low).unwrap(), None);
        assert_eq!(MoveCardSystem.pick_up(&board, hidden).unwrap(), None);
        assert_eq!(
            MoveCardSystem.pick_up(&board, waste_top).unwrap(),
            Some(DraggingInfo::new(StackType::Waste, vec![waste_top]))
        );
        assert_eq!(MoveCardSystem.pick_up(&board, Entity(999)).unwrap_err(), GameError::UnknownCard(Entity(999)));
    }

    #[test]
    fn moving_onto_own_pile_is_rejected() {
        let mut board = Board::new();
        let king = put(&mut board, StackType::Tableau(4), Suit::Heart, Rank::King, true);
        assert_eq!(MoveCardSystem.try_move(&mut board, king, StackType::Tableau(4)).unwrap(), None);
    }

    #[test]
    fn invalid_target_is_an_error() {
        let mut board = Board::new();
        let king = put(&mut board, StackType::Waste, Suit::Heart, Rank::King, true);
        assert_eq!(
            MoveCardSystem.try_move(&mut board, king, StackType::Tableau(8)).unwrap_err(),
            GameError::InvalidPile(StackType::Tableau(8))
        );
    }
}
