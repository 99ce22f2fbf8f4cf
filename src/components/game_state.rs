// src/components/game_state.rs

use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
///
/// `Won` になったら新しいゲームを始めるまでそのまま。
/// ただしアンドゥすると必ず `Playing` に戻るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 4つの組札が全部完成した！🏆
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}
