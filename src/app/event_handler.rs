// src/app/event_handler.rs
//! ユーザー入力 (クリック・キー) を、どのパイルに対する何の操作かに変換するロジック。

use log::debug;

use crate::app::layout_calculator::{card_positions, card_rect, pile_base_rect};
use crate::components::card::Card;
use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::config::input::{DOUBLE_CLICK_TOLERANCE, DOUBLE_CLICK_WINDOW_MS};
use crate::config::layout::{DROP_MARGIN, DROP_TABLEAU_EXTRA_BOTTOM};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::history::History;
use crate::logic::rules::MoveRequest;
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};
use crate::world::World;

// --- クリック判定ロジック ---

/// クリックされた要素の種類を表す Enum だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのパイルの何枚目か。
    Card { stack: StackType, index: usize },
    /// パイルの空きエリアがクリックされた場合。
    Stack(StackType),
}

impl ClickTarget {
    pub fn stack(&self) -> StackType {
        match *self {
            ClickTarget::Card { stack, .. } | ClickTarget::Stack(stack) => stack,
        }
    }
}

/// クリックされた座標に何があるかを特定する関数だよ！
///
/// 山札 → 捨て札 → 組札 → 場札の順に調べる。
/// 重なっているカードは上 (後から置かれた方) が優先。
/// 何も無い背景なら None。
pub fn find_clicked_element(world: &World, point: Position) -> Option<ClickTarget> {
    StackType::all().find_map(|stack| hit_test_pile(world, stack, point))
}

fn hit_test_pile(world: &World, stack: StackType, point: Position) -> Option<ClickTarget> {
    let pile = world.pile(stack)?;
    let positions = card_positions(stack, pile);

    let hit_card = positions
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &pos)| card_rect(pos).contains(point))
        .map(|(index, _)| index);

    match hit_card {
        // 山札はどこを押しても「山札」として扱う
        Some(_) if stack == StackType::Stock => Some(ClickTarget::Stack(stack)),
        Some(index) => Some(ClickTarget::Card { stack, index }),
        None if pile_base_rect(stack).contains(point) => Some(ClickTarget::Stack(stack)),
        None => None,
    }
}

/// パイル内で、座標に重なっている一番上のカードの位置。
pub fn card_index_at(world: &World, stack: StackType, point: Position) -> Option<usize> {
    match hit_test_pile(world, stack, point)? {
        ClickTarget::Card { index, .. } => Some(index),
        ClickTarget::Stack(_) => None,
    }
}

// --- ドロップ判定ロジック ---

/// ドロップ先として判定に使う矩形。
///
/// * 組札 → 基準位置を上下左右に広げた矩形。
/// * 場札 (カードあり) → 一番上のカードを広げて、下方向はさらに長く。
/// * 場札 (空) → 基準位置を広げた矩形。
pub fn drop_region(world: &World, stack: StackType) -> Option<Rect> {
    let pile = world.pile(stack)?;
    match stack {
        StackType::Foundation(_) => Some(pile_base_rect(stack).expanded(DROP_MARGIN, 0.0)),
        StackType::Tableau(_) => match card_positions(stack, pile).last() {
            Some(&top) => Some(card_rect(top).expanded(DROP_MARGIN, DROP_TABLEAU_EXTRA_BOTTOM)),
            None => Some(pile_base_rect(stack).expanded(DROP_MARGIN, 0.0)),
        },
        StackType::Stock | StackType::Waste => None,
    }
}

/// カード列を `point` で離したときのドロップ先を探す。
///
/// 組札 (1枚のときだけ) → 場札の順に見て、範囲内にあって `first_card` を受け入れる
/// 最初のパイルを返すよ。
pub fn find_drop_target(world: &World, run_len: usize, first_card: &Card, point: Position) -> Option<StackType> {
    let foundations = StackType::all().filter(|s| s.is_foundation() && run_len == 1);
    let tableaus = StackType::all().filter(|s| s.is_tableau());

    let target = foundations.chain(tableaus).find(|&stack| {
        let in_region = drop_region(world, stack).is_some_and(|r| r.contains(point));
        in_region && world.pile(stack).is_some_and(|p| p.can_accept(first_card))
    });
    debug!("find_drop_target: {} at ({}, {}) -> {:?}", first_card, point.x, point.y, target);
    target
}

// --- ダブルクリック ---

/// 直前のクリックを覚えておいて、ダブルクリックかどうか判定する。
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<(StackType, Position, f64)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// クリックを記録する。前回から 300ms 未満・縦横とも 10px 未満・同じパイルなら
    /// ダブルクリックとして true を返し、記録をリセットするよ。
    pub fn register(&mut self, stack: StackType, point: Position, time_ms: f64) -> bool {
        let is_double = self.last.is_some_and(|(last_stack, last_point, last_time)| {
            last_stack == stack
                && time_ms - last_time >= 0.0
                && time_ms - last_time < DOUBLE_CLICK_WINDOW_MS
                && (point.x - last_point.x).abs() < DOUBLE_CLICK_TOLERANCE
                && (point.y - last_point.y).abs() < DOUBLE_CLICK_TOLERANCE
        });
        self.last = if is_double { None } else { Some((stack, point, time_ms)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// ダブルクリック時の実際のロジック。
///
/// 捨て札か場札の一番上のカードを、受け入れてくれる最初の組札へ動かす。
/// 点数・めくり・勝利判定は普通の移動と同じ。
pub fn handle_double_click(
    world: &mut World,
    history: &mut History,
    mover: &mut MoveCardSystem,
    stack: StackType,
) -> Option<MoveOutcome> {
    let target = find_automatic_foundation_move(world, stack)?;
    let request = MoveRequest::top_card(world, stack, target)?;
    match mover.execute_move(world, history, &request) {
        Ok(outcome) => Some(outcome),
        Err(reason) => {
            debug!("double-click move rejected: {}", reason);
            None
        }
    }
}

// --- キー入力 ---

/// キー操作で呼べるコマンド。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    NewGame,
    Undo,
    AutoComplete,
    Quit,
}

impl KeyCommand {
    /// `n` 新しいゲーム、`u` か Ctrl+`z` アンドゥ、`a` 自動完成、`q` 終了。
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key.to_ascii_lowercase().as_str(), ctrl) {
            ("z", true) => Some(KeyCommand::Undo),
            (_, true) => None,
            ("n", false) => Some(KeyCommand::NewGame),
            ("u", false) => Some(KeyCommand::Undo),
            ("a", false) => Some(KeyCommand::AutoComplete),
            ("q", false) => Some(KeyCommand::Quit),
            _ => None,
        }
    }
}
