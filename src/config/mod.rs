//! 設定と定数。

pub mod rules;
