// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このクレートではカード 1 枚 1 枚がエンティティになる。
/// ID だけだと意味はないけど、`Card` や `StackInfo` コンポーネントと組み合わせると
/// 「ID 5 はスペードの A で、場札 3 列目の 2 枚目にある」みたいに意味を持つんだ✨
///
/// 表示側 (JS) からは `usize` のカード ID としてやり取りするよ。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);
