//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::pile::FOUNDATION_COMPLETE_LEN;
use crate::components::stack::FOUNDATION_COUNT;

/// 組札ごとの枚数から、クリアかどうかを判定する。
/// 4つの組札すべてがちょうど13枚ならクリア！🏆
pub fn check_win_condition(foundation_sizes: &[usize]) -> bool {
    foundation_sizes.len() == FOUNDATION_COUNT
        && foundation_sizes.iter().all(|&len| len == FOUNDATION_COMPLETE_LEN)
}
