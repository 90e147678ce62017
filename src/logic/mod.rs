//! ゲームのルールや、カードの操作に関するロジックをまとめるモジュールだよ！

pub mod auto_move;
pub mod deck;
pub mod rules;
