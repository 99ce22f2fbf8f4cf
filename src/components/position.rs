// src/components/position.rs

use serde::{Serialize, Deserialize};

/// 2D空間での位置を表す値だよ！ (x, y) 座標を持つよ。📍
///
/// 画面座標なので、左上が原点で y は下向きに増えるよ。
/// カードの位置は「カード左上の座標」として扱うんだ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `other` からの差分 (self - other) を返す。ドラッグのオフセット計算用。
    pub fn offset_from(self, other: Position) -> Position {
        Position { x: self.x - other.x, y: self.y - other.y }
    }
}

/// 当たり判定用の矩形。左上の座標と幅・高さで表すよ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(origin: Position, width: f32, height: f32) -> Self {
        Self { x: origin.x, y: origin.y, width, height }
    }

    /// 点が矩形の中にあるか。右端・下端は含まない (ピクセル単位の当たり判定)。
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// 上下左右に `margin` 広げ、さらに下だけ `extra_bottom` 伸ばした矩形。
    /// ドロップ先の判定を少し甘くするのに使うよ。
    pub fn expanded(&self, margin: f32, extra_bottom: f32) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0 + extra_bottom,
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_between_positions() {
        let pos = Position::new(100.5, -50.0);
        let origin = Position::new(0.5, 10.0);
        assert_eq!(pos.offset_from(origin), Position::new(100.0, -60.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(Position::new(10.0, 20.0), 80.0, 110.0);
        assert!(rect.contains(Position::new(10.0, 20.0)));
        assert!(rect.contains(Position::new(89.0, 129.0)));
        assert!(!rect.contains(Position::new(90.0, 50.0)));
        assert!(!rect.contains(Position::new(50.0, 130.0)));
        assert!(!rect.contains(Position::new(9.9, 50.0)));
    }

    #[test]
    fn expanded_rect_grows_on_every_side() {
        let rect = Rect::new(Position::new(100.0, 100.0), 80.0, 110.0).expanded(20.0, 20.0);
        assert_eq!(rect, Rect { x: 80.0, y: 80.0, width: 120.0, height: 170.0 });
        assert!(rect.contains(Position::new(85.0, 245.0)));
        println!("Rect テスト、成功！🎉");
    }
}
