// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードやパイルの座標、オフセットなど。座標は画面左上が原点、y は下向き。

pub const SCREEN_WIDTH: f32 = 1024.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

pub const CARD_WIDTH: f32 = 80.0; // カードの幅
pub const CARD_HEIGHT: f32 = 110.0; // カードの高さ
pub const CARD_GAP: f32 = 30.0; // 横に並ぶパイルの間隔

// --- 各エリアの位置 ---
pub const STOCK_POS_X: f32 = 50.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 50.0; // 山札のY座標

pub const WASTE_POS_X: f32 = STOCK_POS_X + CARD_WIDTH + CARD_GAP; // 山札の隣
pub const WASTE_POS_Y: f32 = STOCK_POS_Y;

/// 組札は右上に4つ並べる。
pub const FOUNDATION_START_X: f32 = SCREEN_WIDTH - 4.0 * (CARD_WIDTH + CARD_GAP) + CARD_GAP;
pub const FOUNDATION_START_Y: f32 = 50.0;
pub const FOUNDATION_X_OFFSET: f32 = CARD_WIDTH + CARD_GAP;

pub const TABLEAU_START_X: f32 = 50.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 200.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = CARD_WIDTH + CARD_GAP + 10.0; // 場札の列間のX方向の間隔
pub const TABLEAU_Y_OFFSET_FACE_UP: f32 = 25.0; // 表向きカードの下に次のカードをずらす量
pub const TABLEAU_Y_OFFSET_FACE_DOWN: f32 = TABLEAU_Y_OFFSET_FACE_UP / 2.0; // 裏向きは詰めて表示

/// ドラッグ中のカード同士の縦の間隔。
pub const DRAG_CARD_SPACING_Y: f32 = TABLEAU_Y_OFFSET_FACE_UP;

// --- ドロップ判定 ---
/// ドロップ先の当たり判定を上下左右に広げる量。
pub const DROP_MARGIN: f32 = 20.0;
/// カードが乗っている場札は、さらに下方向にこれだけ広げる。
pub const DROP_TABLEAU_EXTRA_BOTTOM: f32 = 20.0;
