//! ソリティアのルール関連モジュールをまとめるよ！
//!
//! ここの関数はみんな純粋関数。盤面を書き換えたりはしない。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
