//! マウス入力の判定に使う定数だよ。

/// ダブルクリックとみなす2回の押下の間隔 (ミリ秒、この値未満)。
pub const DOUBLE_CLICK_WINDOW_MS: f64 = 300.0;
/// ダブルクリックとみなす位置のずれ (x, y それぞれこの値未満)。
pub const DOUBLE_CLICK_TOLERANCE: f32 = 10.0;
