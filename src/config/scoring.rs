//! スコア計算に使う点数と、アンドゥ履歴の上限を定義するよ。

/// 組札にカードを1枚置いたとき。
pub const SCORE_TO_FOUNDATION: i32 = 10;
/// 場札の裏向きカードをめくったとき。
pub const SCORE_REVEAL_CARD: i32 = 5;
/// 捨て札から場札へ移したとき。
pub const SCORE_WASTE_TO_TABLEAU: i32 = 5;
/// 組札から場札へ戻したとき (ペナルティ)。
pub const SCORE_FOUNDATION_TO_TABLEAU: i32 = -15;
/// 捨て札を山札に戻したとき (ペナルティ)。
pub const SCORE_RECYCLE_WASTE: i32 = -20;

/// アンドゥ用に覚えておくスナップショットの最大数。古いものから捨てる。
pub const HISTORY_LIMIT: usize = 100;
