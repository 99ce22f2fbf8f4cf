// src/systems/auto_complete_system.rs

use log::info;

use crate::logic::auto_move::{auto_complete_sources, find_automatic_foundation_move};
use crate::logic::rules::MoveRequest;
use crate::system::System;
use crate::systems::move_card_system::MoveCardSystem;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::world::World;

/// 組札に置けるカードを、置けなくなるまで全部自動で運ぶシステムだよ！🪄
///
/// 1パスごとに捨て札 → 場札 0..7 の順で一番上のカードを見て、置ける組札があれば移動。
/// 1枚も動かなかったパスで終了。スナップショットは呼び出し側で1回だけ取ってね。
#[derive(Debug, Default)]
pub struct AutoCompleteSystem {
    mover: MoveCardSystem,
    win_condition: WinConditionSystem,
}

impl AutoCompleteSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 自動完成を実行して、動かした枚数を返す。
    pub fn complete(&mut self, world: &mut World) -> usize {
        let mut moved = 0;
        loop {
            let mut moved_this_pass = 0;
            for source in auto_complete_sources() {
                let Some(target) = find_automatic_foundation_move(world, source) else {
                    continue;
                };
                let Some(request) = MoveRequest::top_card(world, source, target) else {
                    continue;
                };
                if self.mover.apply_move(world, &request).is_ok() {
                    moved_this_pass += 1;
                }
            }
            if moved_this_pass == 0 {
                break;
            }
            moved += moved_this_pass;
        }

        self.win_condition.run(world);
        info!("AutoCompleteSystem: {} 枚を組札へ移動 (score {})", moved, world.score());
        moved
    }
}

impl System for AutoCompleteSystem {
    fn run(&mut self, world: &mut World) {
        self.complete(world);
    }
}
