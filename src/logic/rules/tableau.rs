//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};

/// 場札の一番上 (`top`) に `card` を置けるかチェックする。
///
/// * 空の場札 → キング (K) だけ置ける。
/// * カードがある場札 → 一番上が表向きで、色が違って、値がちょうど1つ小さいカードだけ。
pub fn can_accept_on_tableau(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => {
            let is_king = card.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau. Is King: {}", card, is_king);
            is_king
        }
        Some(top_card) => {
            if !top_card.is_face_up {
                debug!("[Tableau Rule] top {} is face down, nothing can be placed", top_card);
                return false;
            }
            let colors_different = card.color() != top_card.color();
            let rank_is_one_less = card.value() + 1 == top_card.value();
            debug!(
                "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
                card, top_card, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
    }
}
