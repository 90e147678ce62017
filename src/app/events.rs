//! 人が読める移動ログ ("Placed 7♦ to 8♠." とか)。
//!
//! 表示側がメッセージ欄に出したりする用。ゲームの正しさには関係ないので、
//! `GameConfig::record_events` が false なら溜めない。

use std::fmt;

use serde::Serialize;

use crate::components::card::Card;
use crate::components::stack::StackType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// 山札から捨て札へ 1 枚。
    DrewToWaste { card: Card },
    /// 捨て札を山札に戻した。
    StockRefilled { count: usize },
    /// カードを移動した。`onto` は置く前の移動先の一番上。
    Placed { card: Card, to: StackType, onto: Option<Card> },
    /// 場札の新しい一番上が表になった。
    Revealed { card: Card, stack: StackType },
    /// 勝利！
    Won,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::DrewToWaste { card } => write!(f, "Placed {} to the waste.", card),
            GameEvent::StockRefilled { .. } => write!(f, "Stock refilled from discard pile."),
            GameEvent::Placed { card, onto: Some(onto), .. } => write!(f, "Placed {} to {}.", card, onto),
            GameEvent::Placed { card, to: StackType::Foundation(_), onto: None } => {
                write!(f, "Placed {} to the foundation.", card)
            }
            GameEvent::Placed { card, onto: None, .. } => write!(f, "Placed {} to a new pile.", card),
            GameEvent::Revealed { card, stack } => write!(f, "Revealed {} on {}.", card, stack),
            GameEvent::Won => write!(f, "Congrats, you won :)"),
        }
    }
}
