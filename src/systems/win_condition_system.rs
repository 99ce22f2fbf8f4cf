// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4つの組札が全部13枚になっていたら GameStatus を Won にする。
/// 一度 Won になったら、新しいゲームかアンドゥまで Playing には戻さないよ。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 勝利条件が満たされているかだけを調べる。
    pub fn check_win_condition(&self, world: &World) -> bool {
        check_win_condition(&world.foundation_sizes())
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        if world.status() != GameStatus::Playing {
            return;
        }
        if self.check_win_condition(world) {
            info!("WinConditionSystem: 勝利条件達成！🏆 score = {}", world.score());
            world.set_status(GameStatus::Won);
        }
    }
}
