// src/components/pile.rs

use crate::components::stack::{StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};

/// カードの山 (Stock, Waste, Foundation, Tableau のどれか) だよ。
///
/// 中身はカードエンティティの並び (下から上へ)。末尾が一番上のカード。
/// ルールのチェックは一切しない、ただの入れ物📦 合法かどうかは `logic::rules` の仕事。
///
/// カード側の逆参照 (`StackInfo`) はここで書き換えるので、
/// 山の中身を変える時は必ず `World` も一緒に渡してね。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Entity>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    /// 表示用の名前 ("Tableau 3" とか)。
    pub fn name(&self) -> String {
        self.stack_type.to_string()
    }

    /// 一番上にカードを積んで、カードの `StackInfo` を更新する。
    pub fn add_card(&mut self, world: &mut World, card: Entity) {
        let position = self.cards.len() as u8;
        world.add_component(card, StackInfo::new(self.stack_type, position));
        self.cards.push(card);
    }

    /// 上から `n` 枚を取り除いて、下から上の順のまま返す。
    ///
    /// 持っている枚数より多く取ろうとしたら `EmptySourceViolation`。
    /// これは呼び出し側の不整合なので、山には一切手を付けずにエラーを返すよ。
    pub fn remove_top_cards(&mut self, n: usize) -> GameResult<Vec<Entity>> {
        let available = self.cards.len();
        if n > available {
            log::error!(
                "Pile {}: asked to remove {} cards but only {} present",
                self.stack_type,
                n,
                available
            );
            return Err(GameError::EmptySourceViolation {
                stack: self.stack_type,
                requested: n,
                available,
            });
        }
        Ok(self.cards.split_off(available - n))
    }

    /// 全部取り出す (Waste -> Stock の戻しで使う)。
    pub fn take_all(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.cards)
    }

    pub fn top_card(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// 下から上の順の全カード。
    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    /// そのカードが山の中で下から何番目か。
    pub fn position_of(&self, card: Entity) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// `card` から一番上までのカード列 (ラン)。`card` がこの山になければ `None`。
    pub fn run_from(&self, card: Entity) -> Option<&[Entity]> {
        self.position_of(card).map(|i| &self.cards[i..])
    }
}
