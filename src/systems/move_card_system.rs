// src/systems/move_card_system.rs

use log::{debug, info};

use crate::config::scoring::SCORE_REVEAL_CARD;
use crate::logic::history::History;
use crate::logic::rules::{move_score, validate_move, MoveRejection, MoveRequest};
use crate::system::System;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::world::World;

/// 1回の移動で何が起きたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub cards_moved: usize,
    /// めくりボーナスを含めたスコア変化 (0 で止まる前の値)。
    pub score_delta: i32,
    /// 移動元の場札で裏向きカードがめくれたか。
    pub revealed: bool,
    /// この移動で勝利したか。
    pub won: bool,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのパイルの何枚目から、どのパイルへ」という `MoveRequest` を受け取って、
/// ルール上可能かチェックし、可能なら World の状態を更新するよ。
#[derive(Debug, Default)]
pub struct MoveCardSystem {
    win_condition: WinConditionSystem,
}

impl MoveCardSystem {
    /// 新しい MoveCardSystem を作るよ。
    pub fn new() -> Self {
        Self { win_condition: WinConditionSystem::new() }
    }

    /// ルールチェック → アンドゥ用スナップショット → 移動、の順で実行する。
    /// ルール違反なら World も履歴も一切変わらないよ。
    pub fn execute_move(
        &mut self,
        world: &mut World,
        history: &mut History,
        request: &MoveRequest,
    ) -> Result<MoveOutcome, MoveRejection> {
        validate_move(world, request)?;
        history.push(world.snapshot());
        self.apply_move(world, request)
    }

    /// スナップショットを取らずに移動だけ行う (自動完成のように、まとめて1回だけ保存する場合用)。
    ///
    /// 1. カード列を移動元から取り除いて、順番そのままで移動先に積む。
    /// 2. 移動元と移動先の組み合わせで点数。
    /// 3. 移動元が場札で、新しい一番上が裏向きならめくって +5。
    /// 4. 勝利判定。
    pub fn apply_move(&mut self, world: &mut World, request: &MoveRequest) -> Result<MoveOutcome, MoveRejection> {
        let cards_moved = validate_move(world, request)?;
        let MoveRequest { source, start, target } = *request;

        let (source_pile, target_pile) = world
            .two_piles_mut(source, target)
            .ok_or(MoveRejection::SameStack(source))?;
        let run = source_pile.split_off(start);
        target_pile.add_all(run);
        let revealed = source.is_tableau() && source_pile.flip_top_card();

        let mut score_delta = move_score(source, target, cards_moved);
        world.add_score(score_delta);
        if revealed {
            debug!("  {} の裏向きカードをめくったよ！👀", source);
            world.add_score(SCORE_REVEAL_CARD);
            score_delta += SCORE_REVEAL_CARD;
        }

        info!(
            "MoveCardSystem: {} 枚 {} -> {} (score {:+}, 合計 {})",
            cards_moved,
            source,
            target,
            score_delta,
            world.score()
        );

        let was_won = world.is_won();
        self.win_condition.run(world);
        Ok(MoveOutcome { cards_moved, score_delta, revealed, won: !was_won && world.is_won() })
    }
}
