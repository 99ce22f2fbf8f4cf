// src/components/dragging_info.rs

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::DRAG_CARD_SPACING_Y;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
///
/// ドラッグ中のカード列は移動元のパイルから取り除かれて、ここが持っている。
/// 同じカードが2か所に表示されることは無いよ。
#[derive(Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// ドラッグ開始前のパイル。
    pub source: StackType,
    /// 移動元パイルで何枚目から持ち上げたか。
    pub start: usize,
    /// 持ち上げたカード列 (下 → 上)。
    pub cards: Vec<Card>,
    /// ポインタと先頭カード左上とのずれ。
    pub offset: Position,
    /// 先頭カード左上の今の位置。
    pub position: Position,
}

impl DraggingInfo {
    /// ポインタ位置から先頭カードの位置を計算して更新する。
    pub fn move_to(&mut self, pointer: Position) {
        self.position = pointer.offset_from(self.offset);
    }

    /// 各カードの表示位置。縦に一定間隔で重ねるよ。
    pub fn card_positions(&self) -> impl Iterator<Item = (&Card, Position)> + '_ {
        self.cards.iter().enumerate().map(move |(i, card)| {
            (card, Position::new(self.position.x, self.position.y + i as f32 * DRAG_CARD_SPACING_Y))
        })
    }
}

/// ドラッグ操作の状態。押した瞬間の「選択」と離した瞬間の「判定」は
/// ハンドラの中で完結するので、保持する状態は待機中かドラッグ中の2つだけ。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(DraggingInfo),
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    pub fn info(&self) -> Option<&DraggingInfo> {
        match self {
            DragSession::Dragging(info) => Some(info),
            DragSession::Idle => None,
        }
    }

    pub fn info_mut(&mut self) -> Option<&mut DraggingInfo> {
        match self {
            DragSession::Dragging(info) => Some(info),
            DragSession::Idle => None,
        }
    }

    /// ドラッグ情報を取り出して Idle に戻す。
    pub fn take(&mut self) -> Option<DraggingInfo> {
        match std::mem::take(self) {
            DragSession::Dragging(info) => Some(info),
            DragSession::Idle => None,
        }
    }
}
