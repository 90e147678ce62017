// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の状態だよ！🏆
///
/// `WinConditionSystem` がコマンドのたびに見直して、全部のカードが組札に揃ったら `Won` にする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// プレイ中。
    #[default]
    Playing,
    /// 勝利！
    Won,
}
