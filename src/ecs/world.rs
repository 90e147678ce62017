// src/ecs/world.rs

// Any / TypeId: コンポーネントの型ごとにストレージを分けて持つために使うよ。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// ゲーム世界の全エンティティとコンポーネントを管理する構造体 (自作 ECS のコア！)。
///
/// コンポーネントは型ごとに `HashMap<Entity, T>` に入れて、`Box<dyn Any>` で型消去して
/// `component_stores` にまとめて持つ。取り出す時は `downcast_ref` で元の型に戻すよ。
#[derive(Default)]
pub struct World {
    /// 生存しているエンティティ ID のセット。
    entities: HashSet<Entity>,
    /// 次に割り当てるエンティティ ID。
    next_entity_id: usize,
    /// TypeId -> `HashMap<Entity, T>` (Box<dyn Any> 入り)
    component_stores: HashMap<TypeId, Box<dyn Any>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいエンティティを作って返す。ID は 0 からの連番。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        entity
    }

    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生存しているエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// コンポーネント型 `T` 用の空ストレージを用意する。
    /// 二回呼んでも既存のデータは消えないよ (2 回目は何もしない)。
    pub fn register_component<T: Component>(&mut self) {
        self.component_stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(HashMap::<Entity, T>::new()));
    }

    /// エンティティにコンポーネントを追加 (既にあれば上書き)。
    ///
    /// 生存していないエンティティへの追加は無視して `false` を返す。
    /// 未登録の型はここで自動的に登録する。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        if !self.is_entity_alive(entity) {
            log::warn!("World: add_component on dead entity {:?} ignored", entity);
            return false;
        }
        self.register_component::<T>();
        match self.storage_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
                true
            }
            None => false,
        }
    }

    /// 読み取り専用でコンポーネントを取得する。なければ `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>().and_then(|storage| storage.get(&entity))
    }

    /// 書き込み可能でコンポーネントを取得する。死んだエンティティには `None`。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.storage_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    /// `T` を持つ生存エンティティを ID 順で全部返す。
    ///
    /// HashMap の順番はバラバラなので、呼び出し側が毎回同じ結果を得られるようにソートしておく。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .storage::<T>()
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .collect()
            })
            .unwrap_or_default();
        entities.sort();
        entities
    }

    fn storage<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<HashMap<Entity, T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<HashMap<Entity, T>>())
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
