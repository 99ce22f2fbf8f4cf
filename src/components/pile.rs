// src/components/pile.rs

//! カードの山（パイル）だよ！🃏🃏🃏
//!
//! 山札・捨て札・組札・場札の4種類があるけど、中身はどれも
//! 「下から順に並んだカードの列」で同じ。違うのは置けるカードのルールと
//! 並べ方だけなので、`PileKind` のタグで切り替えるよ。

use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit};
use crate::logic::rules::{foundation, tableau};

/// 組札1つが完成するカード枚数。
pub const FOUNDATION_COMPLETE_LEN: usize = 13;

/// パイルの種類。組札は最初のカードが置かれた時点でスートが決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation { suit: Option<Suit> },
    Tableau,
}

/// 下 (index 0) → 上 (末尾) の順にカードを持つパイル。
/// 「上」が一番最後に置かれた、見えている / 取れるカードだよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self { kind, cards: Vec::new() }
    }

    pub fn stock() -> Self {
        Self::new(PileKind::Stock)
    }

    pub fn waste() -> Self {
        Self::new(PileKind::Waste)
    }

    pub fn foundation() -> Self {
        Self::new(PileKind::Foundation { suit: None })
    }

    pub fn tableau() -> Self {
        Self::new(PileKind::Tableau)
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 組札に割り当てられているスート。空の組札や他の種類なら None。
    pub fn foundation_suit(&self) -> Option<Suit> {
        match self.kind {
            PileKind::Foundation { suit } => suit,
            _ => None,
        }
    }

    /// 組札が A〜K の13枚揃っているか。
    pub fn is_complete(&self) -> bool {
        matches!(self.kind, PileKind::Foundation { .. }) && self.cards.len() == FOUNDATION_COMPLETE_LEN
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sync_suit();
    }

    /// 渡された順番のまま上に積む。
    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.sync_suit();
    }

    pub fn remove_top(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        self.sync_suit();
        card
    }

    /// `card` と、その上にある全カードを取り除いて返す (順番はそのまま)。
    /// `card` がこのパイルに無ければ何もせず空の Vec を返す。
    pub fn remove_from(&mut self, card: &Card) -> Vec<Card> {
        match self.index_of(card) {
            Some(index) => self.split_off(index),
            None => Vec::new(),
        }
    }

    /// `index` から上を全部取り除いて返す。範囲外なら空。
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        let removed = self.cards.split_off(index);
        self.sync_suit();
        removed
    }

    /// 表裏は無視して、同じスート・ランクのカードの位置を探す。
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c.same_identity(card))
    }

    /// 一番上が裏向きならめくる。めくったら true。
    pub fn flip_top_card(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }

    /// 中身をまるごと入れ替える (アンドゥの復元用)。
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.sync_suit();
    }

    pub fn clear(&mut self) {
        self.replace_cards(Vec::new());
    }

    /// このパイルの一番上に `card` を置けるか。
    /// 山札・捨て札は移動先にならないので常に false だよ。
    pub fn can_accept(&self, card: &Card) -> bool {
        match self.kind {
            PileKind::Foundation { suit } => foundation::can_accept_on_foundation(self.top(), suit, card),
            PileKind::Tableau => tableau::can_accept_on_tableau(self.top(), card),
            PileKind::Stock | PileKind::Waste => false,
        }
    }

    // 組札のスートは一番下のカードで決まる。空になったら未割り当てに戻る。
    fn sync_suit(&mut self) {
        if let PileKind::Foundation { suit } = &mut self.kind {
            *suit = self.cards.first().map(|c| c.suit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    #[test]
    fn add_remove_and_top() {
        let mut pile = Pile::waste();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
        assert_eq!(pile.remove_top(), None);

        pile.add(up(Suit::Heart, Rank::Two));
        pile.add_all(vec![up(Suit::Club, Rank::Five), up(Suit::Spade, Rank::Nine)]);
        assert_eq!(pile.len(), 3);
        assert_eq!(pile.top(), Some(&up(Suit::Spade, Rank::Nine)));

        assert_eq!(pile.remove_top(), Some(up(Suit::Spade, Rank::Nine)));
        assert_eq!(pile.top(), Some(&up(Suit::Club, Rank::Five)));
    }

    #[test]
    fn remove_from_takes_card_and_everything_above() {
        let mut pile = Pile::tableau();
        pile.add_all(vec![
            Card::new(Suit::Heart, Rank::Eight),
            up(Suit::Diamond, Rank::Ten),
            up(Suit::Spade, Rank::Nine),
            up(Suit::Diamond, Rank::Eight),
        ]);

        let run = pile.remove_from(&up(Suit::Diamond, Rank::Ten));
        assert_eq!(
            run,
            vec![up(Suit::Diamond, Rank::Ten), up(Suit::Spade, Rank::Nine), up(Suit::Diamond, Rank::Eight)]
        );
        assert_eq!(pile.cards(), &[Card::new(Suit::Heart, Rank::Eight)]);
    }

    #[test]
    fn remove_from_missing_card_is_a_no_op() {
        let mut pile = Pile::tableau();
        pile.add(up(Suit::Club, Rank::Queen));
        let before = pile.clone();

        assert!(pile.remove_from(&up(Suit::Heart, Rank::Ace)).is_empty());
        assert_eq!(pile, before);
        assert!(pile.split_off(5).is_empty());
    }

    #[test]
    fn foundation_suit_follows_its_first_card() {
        let mut pile = Pile::foundation();
        assert_eq!(pile.foundation_suit(), None);

        pile.add(up(Suit::Club, Rank::Ace));
        assert_eq!(pile.foundation_suit(), Some(Suit::Club));
        pile.add(up(Suit::Club, Rank::Two));
        assert_eq!(pile.foundation_suit(), Some(Suit::Club));

        pile.remove_top();
        pile.remove_top();
        assert_eq!(pile.foundation_suit(), None, "空に戻ったらスートも未割り当て");
    }

    #[test]
    fn flip_top_only_flips_face_down_cards() {
        let mut pile = Pile::tableau();
        assert!(!pile.flip_top_card());
        pile.add(Card::new(Suit::Heart, Rank::Eight));
        assert!(pile.flip_top_card());
        assert!(pile.top().map_or(false, |c| c.is_face_up));
        assert!(!pile.flip_top_card(), "表向きならもうめくらない");
    }

    #[test]
    fn stock_and_waste_never_accept() {
        let card = up(Suit::Spade, Rank::King);
        assert!(!Pile::stock().can_accept(&card));
        assert!(!Pile::waste().can_accept(&card));
        assert!(Pile::tableau().can_accept(&card));
    }

    #[test]
    fn complete_foundation_has_thirteen_cards() {
        let mut pile = Pile::foundation();
        for rank in crate::components::card::ALL_RANKS {
            assert!(!pile.is_complete());
            pile.add(up(Suit::Heart, rank));
        }
        assert!(pile.is_complete());

        let mut tableau = Pile::tableau();
        tableau.add_all((0..13).map(|_| up(Suit::Heart, Rank::Ace)));
        assert!(!tableau.is_complete(), "場札は完成扱いにならない");
    }
}
