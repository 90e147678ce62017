// src/ecs/system.rs

use crate::board::Board;

/// System（システム）トレイトだよ！
///
/// システムはゲームのロジック（ルールや振る舞い）をひとまとめにしたもの。
/// `run` は `Board` (カードの World と 13 個の山) を受け取って、
/// 必要なコンポーネントを読んだり書き換えたりする✏️
pub trait System {
    fn run(&mut self, board: &mut Board);
}
