// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::ecs::component::Component;

/// カードが存在する場所 (山) の種類だよ。これがそのまま山の ID にもなる。
///
/// JSON では `"Stock"`, `"Waste"`, `{"Foundation":0}`, `{"Tableau":3}` になるよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackType {
    /// 山札。裏向きのカードを引く元。
    Stock,
    /// 山札からめくったカードを置く捨て札。
    Waste,
    /// 組札 (0-3)。A から K まで同じスートで積む。
    Foundation(u8),
    /// 場札 (0-6)。色違いでランクを下げながら積む。
    Tableau(u8),
}

impl StackType {
    /// 盤面にある 13 個の山を、Stock, Waste, Foundation 0..4, Tableau 0..7 の順で返す。
    pub fn all() -> Vec<StackType> {
        let mut stacks = vec![StackType::Stock, StackType::Waste];
        stacks.extend((0..FOUNDATION_COUNT as u8).map(StackType::Foundation));
        stacks.extend((0..TABLEAU_COUNT as u8).map(StackType::Tableau));
        stacks
    }

    /// インデックスが範囲内かどうか。`Tableau(9)` とかは盤面に存在しない。
    pub fn is_on_board(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(i) => usize::from(i) < FOUNDATION_COUNT,
            StackType::Tableau(i) => usize::from(i) < TABLEAU_COUNT,
        }
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Stock => write!(f, "Stock"),
            StackType::Waste => write!(f, "Waste"),
            StackType::Foundation(i) => write!(f, "Foundation {}", i),
            StackType::Tableau(i) => write!(f, "Tableau {}", i),
        }
    }
}

/// カードが今どの山の何番目にいるかを示すコンポーネント (カード -> 山 の逆参照)。
///
/// 持ち主はあくまで `Pile` の方。これは `Pile::add_card` / `Pile::remove_top_cards`
/// が同期して書き換える写しだよ。`position_in_stack` は 0 が一番下。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackInfo {
    pub stack_type: StackType,
    pub position_in_stack: u8,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: u8) -> Self {
        Self { stack_type, position_in_stack }
    }
}

impl Component for StackInfo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_info_creation() {
        let info = StackInfo::new(StackType::Tableau(2), 5);
        assert_eq!(info.stack_type, StackType::Tableau(2));
        assert_eq!(info.position_in_stack, 5);
    }

    #[test]
    fn all_lists_thirteen_distinct_stacks() {
        let all = StackType::all();
        assert_eq!(all.len(), 13);
        assert_eq!(all[0], StackType::Stock);
        assert_eq!(all[1], StackType::Waste);
        assert_eq!(all[2], StackType::Foundation(0));
        assert_eq!(all[12], StackType::Tableau(6));
        assert!(all.iter().all(|s| s.is_on_board()));
    }

    #[test]
    fn out_of_range_indices_are_not_on_board() {
        assert!(!StackType::Foundation(4).is_on_board());
        assert!(!StackType::Tableau(7).is_on_board());
    }

    #[test]
    fn stack_type_json_shape() {
        assert_eq!(serde_json::to_string(&StackType::Stock).unwrap(), "\"Stock\"");
        assert_eq!(serde_json::to_string(&StackType::Tableau(3)).unwrap(), "{\"Tableau\":3}");
        let parsed: StackType = serde_json::from_str("{\"Foundation\":1}").unwrap();
        assert_eq!(parsed, StackType::Foundation(1));
    }
}
