// src/app/game_app.rs

// --- 必要なものをインポート ---
use js_sys::Error;
use log::{debug, info};
use wasm_bindgen::prelude::*;

use crate::app::drag_handler;
use crate::app::event_handler::{self, ClickTarget, ClickTracker, KeyCommand};
use crate::app::state_getter;
use crate::app::stock_handler::{self, StockAction};
use crate::components::dragging_info::DragSession;
use crate::components::game_state::GameStatus;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::logic::history::History;
use crate::protocol::GameStateData;
use crate::system::System;
use crate::systems::{AutoCompleteSystem, DealInitialCardsSystem, MoveCardSystem};
use crate::world::World;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
//
// JS 側はイベントループと Canvas 描画を持っていて、ポインタやキーの入力を
// そのままここに渡してくる。描画するときは get_state_json() で状態を丸ごと受け取るよ。
// 全部シングルスレッドで、1回の呼び出しは最後まで走りきる。
#[wasm_bindgen]
pub struct GameApp {
    world: World,
    history: History,
    drag: DragSession,
    clicks: ClickTracker,
    mover: MoveCardSystem,
    auto_complete: AutoCompleteSystem,
    running: bool,
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

// GameApp 構造体のメソッドを実装していくよ！ (JS から呼ばれるもの)
#[wasm_bindgen]
impl GameApp {
    /// カードを配った状態で GameApp を作る。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        let mut app = Self::empty();
        app.new_game();
        info!("GameApp: 初期化完了。");
        app
    }

    /// 新しいゲームを始める (毎回ちがう配り方)。
    pub fn new_game(&mut self) {
        self.start_game(DealInitialCardsSystem::new());
    }

    /// シードを指定して新しいゲームを始める。同じシードなら同じ配り方。
    pub fn new_game_with_seed(&mut self, seed: u64) {
        self.start_game(DealInitialCardsSystem::with_seed(seed));
    }

    /// 山札をめくる (空なら捨て札を戻す)。
    pub fn draw_from_stock(&mut self) -> bool {
        self.cancel_drag();
        !matches!(stock_handler::draw_from_stock(&mut self.world, &mut self.history), StockAction::Nothing)
    }

    /// 1手戻す。履歴が空なら false。
    /// 戻した後は、盤面がどうであれ勝利状態は解除されるよ。
    pub fn undo(&mut self) -> bool {
        self.cancel_drag();
        match self.history.pop() {
            Some(snapshot) => {
                self.world.restore(&snapshot);
                self.world.set_status(GameStatus::Playing);
                info!("GameApp: undo (残り {} 手)", self.history.len());
                true
            }
            None => {
                debug!("GameApp: undo する履歴が無い");
                false
            }
        }
    }

    /// 置けるカードを全部組札へ。動かした枚数を返す。
    pub fn auto_complete(&mut self) -> usize {
        self.cancel_drag();
        self.history.push(self.world.snapshot());
        self.auto_complete.complete(&mut self.world)
    }

    // --- ポインタ入力 ---

    /// マウスボタンが押された。
    ///
    /// 山札ならめくる、ダブルクリックなら組札へ自動移動、それ以外はドラッグ開始を試す。
    /// 状態が変わったら true。
    pub fn pointer_down(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        self.cancel_drag();
        let point = Position::new(x, y);

        let Some(target) = event_handler::find_clicked_element(&self.world, point) else {
            self.clicks.reset();
            return false;
        };
        let stack = target.stack();

        if stack == StackType::Stock {
            // 山札の連打はダブルクリック扱いにせず、押すたびに1回めくる。
            self.clicks.reset();
            return self.draw_from_stock();
        }

        // ダブルクリックはドラッグを始めない。置ける組札が無ければ何もしない。
        if self.clicks.register(stack, point, time_ms) {
            debug!("GameApp: double-click on {}", stack);
            return self.auto_move_top_card(stack);
        }

        match target {
            ClickTarget::Card { .. } => self.begin_drag(stack, point),
            ClickTarget::Stack(_) => false,
        }
    }

    /// マウスが動いた。ドラッグ中ならカードがついてくる。
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.update_drag(Position::new(x, y))
    }

    /// マウスボタンが離された。ドラッグ中ならドロップを判定する。
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.end_drag(Position::new(x, y))
    }

    /// キー入力。`q` で終了した後は false を返す。
    pub fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        if !self.running {
            return false;
        }
        if let Some(command) = KeyCommand::from_key(key, ctrl) {
            debug!("GameApp: key {:?} -> {:?}", key, command);
            match command {
                KeyCommand::NewGame => self.new_game(),
                KeyCommand::Undo => {
                    self.undo();
                }
                KeyCommand::AutoComplete => {
                    self.auto_complete();
                }
                KeyCommand::Quit => {
                    self.cancel_drag();
                    info!("GameApp: quit requested");
                    self.running = false;
                }
            }
        }
        self.running
    }

    // --- JSON でパイルを指定する操作 ---

    /// `pile_json` (例: `"Waste"`, `{"Tableau":3}`) の一番上のカードを組札へ自動移動。
    pub fn attempt_move_from_click_json(&mut self, pile_json: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        let pile = parse_pile(pile_json)?;
        Ok(self.attempt_move_from_click(pile, Position::new(x, y)))
    }

    /// `pile_json` のパイルからドラッグを開始する。
    pub fn begin_drag_json(&mut self, pile_json: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        let pile = parse_pile(pile_json)?;
        Ok(self.begin_drag(pile, Position::new(x, y)))
    }

    // --- 状態の取得 ---

    /// 描画用のゲーム状態を JSON 文字列で返す。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_world_state_json(&self.world, &self.history, &self.drag)
            .map_err(|e| Error::new(&format!("Failed to serialize game state: {}", e)).into())
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    /// アンドゥできる手数。
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    pub fn is_won(&self) -> bool {
        self.world.is_won()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

// Rust からだけ使うメソッド (テストや組み込み用)
impl GameApp {
    fn empty() -> Self {
        Self {
            world: World::new(),
            history: History::new(),
            drag: DragSession::Idle,
            clicks: ClickTracker::new(),
            mover: MoveCardSystem::new(),
            auto_complete: AutoCompleteSystem::new(),
            running: true,
        }
    }

    /// 好きな盤面から始める。履歴は空、ゲーム状態は World のまま。
    pub fn from_world(world: World) -> Self {
        Self { world, ..Self::empty() }
    }

    fn start_game(&mut self, mut deal: DealInitialCardsSystem) {
        self.drag = DragSession::Idle;
        self.clicks.reset();
        self.history.clear();
        deal.run(&mut self.world);
        self.running = true;
        info!("GameApp: 新しいゲーム開始！🃏 (seed {:?})", deal.seed());
    }

    /// `pile` の一番上のカードを、受け入れる最初の組札へ動かす。
    /// `point` がそのパイルの上でなければ何もしない。
    pub fn attempt_move_from_click(&mut self, pile: StackType, point: Position) -> bool {
        self.cancel_drag();
        let clicked = event_handler::find_clicked_element(&self.world, point).map(|t| t.stack());
        if clicked != Some(pile) {
            debug!("GameApp: click at ({}, {}) is not on {}", point.x, point.y, pile);
            return false;
        }
        self.auto_move_top_card(pile)
    }

    fn auto_move_top_card(&mut self, pile: StackType) -> bool {
        event_handler::handle_double_click(&mut self.world, &mut self.history, &mut self.mover, pile).is_some()
    }

    pub fn begin_drag(&mut self, pile: StackType, point: Position) -> bool {
        drag_handler::begin_drag(&mut self.world, &mut self.drag, pile, point)
    }

    pub fn update_drag(&mut self, point: Position) -> bool {
        drag_handler::update_drag(&mut self.drag, point)
    }

    /// ドロップ。移動が成立したら true、元に戻しただけなら false。
    pub fn end_drag(&mut self, point: Position) -> bool {
        drag_handler::end_drag(&mut self.world, &mut self.history, &mut self.mover, &mut self.drag, point).is_some()
    }

    /// ドラッグ中なら取り消してカードを戻す。
    pub fn cancel_drag(&mut self) -> bool {
        drag_handler::cancel_drag(&mut self.world, &mut self.drag)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn state(&self) -> GameStateData {
        state_getter::build_game_state(&self.world, &self.history, &self.drag)
    }
}

/// JSON のパイル ID を StackType に。範囲外の番号もエラーにする。
fn parse_pile(pile_json: &str) -> Result<StackType, JsValue> {
    match serde_json::from_str::<StackType>(pile_json) {
        Ok(stack) if stack.is_valid() => Ok(stack),
        Ok(stack) => Err(Error::new(&format!("No such pile: {}", stack)).into()),
        Err(e) => Err(Error::new(&format!("Invalid pile id {:?}: {}", pile_json, e)).into()),
    }
}
