//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank, Suit};

/// 組札の一番上 (`top`) に `card` を置けるかチェックする。
///
/// * 空の組札 → エース (A) だけ置ける。
/// * カードがある組札 → 組札のスートと同じで、値がちょうど1つ大きいカードだけ。
///
/// `suit` は組札に割り当て済みのスート。空なら None だよ。
pub fn can_accept_on_foundation(top: Option<&Card>, suit: Option<Suit>, card: &Card) -> bool {
    let ok = match top {
        None => card.rank == Rank::Ace,
        Some(top_card) => {
            // 割り当て済みスートが無いのにカードがある、は起こらないはずだけど
            // その場合は一番上のカードのスートで判定するよ。
            let pile_suit = suit.unwrap_or(top_card.suit);
            card.suit == pile_suit && card.value() == top_card.value() + 1
        }
    };
    debug!(
        "[Foundation Rule] {} onto {} -> {}",
        card,
        top.map_or_else(|| "empty".to_string(), |c| c.to_string()),
        ok
    );
    ok
}
