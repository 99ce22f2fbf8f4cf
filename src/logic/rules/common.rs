//! ルール判定で共通して使うヘルパー関数や型を置くよ。

pub use crate::components::card::CardColor;
use crate::components::card::Card;
use crate::components::pile::{Pile, PileKind};

/// パイルから持ち上げられるカード列の開始位置を決める。
///
/// * 捨て札・組札 → 一番上の1枚だけ。
/// * 場札 → `index` のカードとその上全部。ただし `index` のカードが表向きのときだけ。
/// * 山札 → 何も持ち上げられない。
pub fn movable_run_start(pile: &Pile, index: usize) -> Option<usize> {
    if index >= pile.len() {
        return None;
    }
    match pile.kind() {
        PileKind::Waste | PileKind::Foundation { .. } => pile.len().checked_sub(1),
        PileKind::Tableau => pile.cards()[index].is_face_up.then_some(index),
        PileKind::Stock => None,
    }
}

/// カード列が全部表向きか。裏向きのカードは絶対に動かせないよ。
pub fn is_face_up_run(run: &[Card]) -> bool {
    !run.is_empty() && run.iter().all(|c| c.is_face_up)
}
