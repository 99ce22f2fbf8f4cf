// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして JS 側に渡すときに使うよ。
use serde::{Serialize, Deserialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashSet に入れたりできるように
/// - Serialize, Deserialize: JSON に変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 判別値がそのままカードの「値」(1..=13) になるようにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全スート。デッキを作る順番もこの並びだよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランク (A → K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Rank {
    /// ランクの数値 (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードそのものを表す値だよ！🃏
///
/// - `suit`, `rank`: カードの正体。ゲーム中に変わることはないよ。
/// - `is_face_up`: 表向きかどうか。これだけは移動やめくりで変わる！
///
/// 位置情報は持たせないよ。描画位置はパイルの中の順番から
/// `app::layout_calculator` が毎回計算するんだ。だからスナップショットも
/// この値をそのままコピーするだけで済むよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る。テストで盤面を組むときに便利！
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// 表裏を無視して「同じカードか」を判定する。
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())?;
        if !self.is_face_up {
            write!(f, "(裏)")?;
        }
        Ok(())
    }
}
