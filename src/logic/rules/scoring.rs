//! 移動元と移動先の組み合わせから点数を決めるよ。

use crate::components::stack::StackType;
use crate::config::scoring::{
    SCORE_FOUNDATION_TO_TABLEAU, SCORE_TO_FOUNDATION, SCORE_WASTE_TO_TABLEAU,
};

/// `cards_moved` 枚を `source` から `target` に移したときのスコア変化。
/// めくりボーナスは含まないよ (それは移動後に別で足す)。
pub fn move_score(source: StackType, target: StackType, cards_moved: usize) -> i32 {
    match (source, target) {
        (_, StackType::Foundation(_)) => SCORE_TO_FOUNDATION * cards_moved as i32,
        (StackType::Waste, StackType::Tableau(_)) => SCORE_WASTE_TO_TABLEAU,
        (StackType::Foundation(_), StackType::Tableau(_)) => SCORE_FOUNDATION_TO_TABLEAU,
        _ => 0,
    }
}
