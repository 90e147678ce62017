// src/board.rs
//! 盤面 = カードの World + 13 個の山。
//!
//! カードの中身 (スート・ランク・表裏) は World のコンポーネント、
//! 並び順は `Pile` が持つ。この 2 つがずれないように、山の中身を変える操作は全部ここを通すよ。

use std::collections::HashSet;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;
use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};

pub struct Board {
    pub world: World,
    piles: Vec<Pile>,
    pub status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 空の 13 山を持つ盤面を作る。カードはまだ 1 枚もない。
    pub fn new() -> Self {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<StackInfo>();
        Self {
            world,
            piles: StackType::all().into_iter().map(Pile::new).collect(),
            status: GameStatus::Playing,
        }
    }

    fn pile_index(stack_type: StackType) -> Option<usize> {
        if !stack_type.is_on_board() {
            return None;
        }
        Some(match stack_type {
            StackType::Stock => 0,
            StackType::Waste => 1,
            StackType::Foundation(i) => 2 + usize::from(i),
            StackType::Tableau(i) => 2 + FOUNDATION_COUNT + usize::from(i),
        })
    }

    fn checked_index(stack_type: StackType) -> GameResult<usize> {
        Self::pile_index(stack_type).ok_or(GameError::InvalidPile(stack_type))
    }

    pub fn pile(&self, stack_type: StackType) -> GameResult<&Pile> {
        Ok(&self.piles[Self::checked_index(stack_type)?])
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn stock(&self) -> &Pile {
        &self.piles[0]
    }

    pub fn waste(&self) -> &Pile {
        &self.piles[1]
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.piles[2..2 + FOUNDATION_COUNT]
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.piles[2 + FOUNDATION_COUNT..]
    }

    /// 新しいカードエンティティを作る。どの山にもまだ入ってない状態。
    pub fn spawn_card(&mut self, card: Card) -> Entity {
        let entity = self.world.create_entity();
        self.world.add_component(entity, card);
        entity
    }

    pub fn card(&self, entity: Entity) -> GameResult<&Card> {
        self.world
            .get_component::<Card>(entity)
            .ok_or(GameError::UnknownCard(entity))
    }

    pub fn card_mut(&mut self, entity: Entity) -> GameResult<&mut Card> {
        self.world
            .get_component_mut::<Card>(entity)
            .ok_or(GameError::UnknownCard(entity))
    }

    /// カードが今いる山 (`StackInfo` の逆参照から)。
    pub fn locate(&self, entity: Entity) -> GameResult<StackType> {
        self.world
            .get_component::<StackInfo>(entity)
            .map(|info| info.stack_type)
            .ok_or(GameError::UnknownCard(entity))
    }

    pub fn top_card(&self, stack_type: StackType) -> GameResult<Option<&Card>> {
        match self.pile(stack_type)?.top_card() {
            Some(entity) => self.card(entity).map(Some),
            None => Ok(None),
        }
    }

    /// 山の一番上にカードを積む。
    pub fn place(&mut self, stack_type: StackType, entity: Entity) -> GameResult<()> {
        let index = Self::checked_index(stack_type)?;
        self.piles[index].add_card(&mut self.world, entity);
        Ok(())
    }

    /// `from` の上から `count` 枚を、順番を保ったまま `to` に積む。
    ///
    /// 枚数が足りない時は何も動かさずにエラー。
    pub fn transfer(&mut self, from: StackType, count: usize, to: StackType) -> GameResult<Vec<Entity>> {
        let from_index = Self::checked_index(from)?;
        let to_index = Self::checked_index(to)?;
        let moved = self.piles[from_index].remove_top_cards(count)?;
        for &entity in &moved {
            self.piles[to_index].add_card(&mut self.world, entity);
        }
        Ok(moved)
    }

    /// 全部取り出す。取り出したカードは必ずすぐ別の山に入れること。
    pub(crate) fn take_all(&mut self, stack_type: StackType) -> GameResult<Vec<Entity>> {
        let index = Self::checked_index(stack_type)?;
        Ok(self.piles[index].take_all())
    }

    /// 山の一番上が裏向きなら表にする。表にしたカードを返す。
    pub fn reveal_top_if_face_down(&mut self, stack_type: StackType) -> GameResult<Option<Entity>> {
        let Some(top) = self.pile(stack_type)?.top_card() else {
            return Ok(None);
        };
        let card = self.card_mut(top)?;
        if card.is_face_down() {
            card.flip();
            Ok(Some(top))
        } else {
            Ok(None)
        }
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations().iter().map(Pile::size).sum()
    }

    /// 山札 + 捨て札 + 場札 の枚数。
    pub fn cards_outside_foundations(&self) -> usize {
        self.stock().size()
            + self.waste().size()
            + self.tableaus().iter().map(Pile::size).sum::<usize>()
    }

    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::size).sum()
    }

    /// 盤面の帳簿チェック。
    ///
    /// - 全部の山を合わせてちょうど 52 枚
    /// - 同じカードが 2 回出てこない
    /// - どのカードも World に `Card` を持っていて、`StackInfo` が山の実際の位置と一致
    /// - World 側にも、どの山にも入っていないカードが残っていない
    pub fn verify_integrity(&self) -> GameResult<()> {
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(GameError::IntegrityViolation(format!(
                "expected {} cards across all piles, found {}",
                DECK_SIZE, total
            )));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for pile in &self.piles {
            for (position, &entity) in pile.cards().iter().enumerate() {
                if !seen.insert(entity) {
                    return Err(GameError::IntegrityViolation(format!(
                        "card {:?} appears more than once",
                        entity
                    )));
                }
                self.card(entity)?;
                let expected = StackInfo::new(pile.stack_type(), position as u8);
                match self.world.get_component::<StackInfo>(entity) {
                    Some(info) if *info == expected => {}
                    other => {
                        return Err(GameError::IntegrityViolation(format!(
                            "card {:?} back-reference {:?} does not match {:?}",
                            entity, other, expected
                        )));
                    }
                }
            }
        }

        let stray: Vec<Entity> = self
            .world
            .get_all_entities_with_component::<Card>()
            .into_iter()
            .filter(|e| !seen.contains(e))
            .collect();
        if !stray.is_empty() || self.world.entity_count() != DECK_SIZE {
            return Err(GameError::IntegrityViolation(format!(
                "world holds {} entities, cards outside every pile: {:?}",
                self.world.entity_count(),
                stray
            )));
        }
        Ok(())
    }
}
