// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! どのカードがどこに自動で移動できるか、とかを判断するんだ。
//! ここは World を読むだけ。実際に動かすのは systems 側の仕事。

use log::debug;

use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::world::World;

/// `source` の一番上のカードを自動で置ける組札を探すよ。
///
/// 組札は 0 番から順に調べて、最初に受け入れてくれたものを返す。
/// ダブルクリックでの自動移動と自動完成で使うので、
/// 移動元は捨て札か場札だけ。一番上が裏向きなら None。
pub fn find_automatic_foundation_move(world: &World, source: StackType) -> Option<StackType> {
    if !matches!(source, StackType::Waste | StackType::Tableau(_)) {
        return None;
    }
    let card = world.pile(source)?.top().filter(|c| c.is_face_up)?;
    debug!("[AutoMove] Finding automatic foundation move for {} ({})...", card, source);

    let target = (0..FOUNDATION_COUNT as u8)
        .map(StackType::Foundation)
        .find(|&f| world.pile(f).is_some_and(|pile| pile.can_accept(card)));

    match target {
        Some(f) => debug!("  Found valid {} for {}.", f, card),
        None => debug!("  No suitable foundation found for {}.", card),
    }
    target
}

/// 自動完成で1パスの間に調べる移動元の順番。捨て札 → 場札 0..7 だよ。
pub fn auto_complete_sources() -> impl Iterator<Item = StackType> {
    std::iter::once(StackType::Waste).chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
}
