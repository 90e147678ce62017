// src/app/mod.rs
//! 1 ゲーム分のエンジンと、表示側に渡すもの (スナップショット・移動ログ) を置くモジュールだよ！

pub mod events;
pub mod game;
pub mod snapshot;

pub use events::GameEvent;
pub use game::{DragStart, KlondikeGame};
pub use snapshot::{CardSnapshot, PileSnapshot};
