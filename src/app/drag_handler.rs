// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end, cancel).

use log::{debug, info, warn};

use crate::app::event_handler::{card_index_at, find_drop_target};
use crate::app::layout_calculator::card_position;
use crate::components::dragging_info::{DragSession, DraggingInfo};
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::logic::history::History;
use crate::logic::rules::{movable_run_start, MoveRequest};
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};
use crate::world::World;

/// ドラッグ開始時の処理。
///
/// 捨て札・組札なら一番上の1枚、場札なら押したカード (表向き) とその上全部を持ち上げる。
/// 持ち上げたカードは移動元から取り除いて、セッションが持つよ。
/// 山札や裏向きカード、空のパイルからは始まらない (false)。
pub fn begin_drag(world: &mut World, session: &mut DragSession, stack: StackType, point: Position) -> bool {
    if session.is_dragging() {
        warn!("begin_drag: 前のドラッグが残っていたので元に戻すよ");
        cancel_drag(world, session);
    }

    let Some(pile) = world.pile(stack) else {
        return false;
    };
    let clicked = match stack {
        StackType::Tableau(_) => card_index_at(world, stack, point),
        _ => pile.len().checked_sub(1),
    };
    let Some(start) = clicked.and_then(|index| movable_run_start(pile, index)) else {
        debug!("begin_drag: {} に持ち上げられるカードが無い", stack);
        return false;
    };
    let Some(card_pos) = card_position(world, stack, start) else {
        return false;
    };

    let Some(pile) = world.pile_mut(stack) else {
        return false;
    };
    let cards = pile.split_off(start);
    info!("Drag start: {} 枚 from {}[{}]", cards.len(), stack, start);

    *session = DragSession::Dragging(DraggingInfo {
        source: stack,
        start,
        cards,
        offset: point.offset_from(card_pos),
        position: card_pos,
    });
    true
}

/// ドラッグ中の位置更新。World は触らない。
pub fn update_drag(session: &mut DragSession, point: Position) -> bool {
    match session.info_mut() {
        Some(info) => {
            info.move_to(point);
            true
        }
        None => false,
    }
}

/// ドラッグ終了時の処理。
///
/// まずカード列を移動元に戻してから、離した位置のドロップ先を探す。
/// 見つかって移動元と違えば普通の移動を実行。それ以外は戻したままで終わり
/// (スナップショットも取らない)。どの場合もセッションは Idle に戻るよ。
pub fn end_drag(
    world: &mut World,
    history: &mut History,
    mover: &mut MoveCardSystem,
    session: &mut DragSession,
    point: Position,
) -> Option<MoveOutcome> {
    let info = session.take()?;
    let source = info.source;
    let start = info.start;
    let run_len = info.cards.len();
    let first_card = info.cards.first()?.clone();
    return_cards(world, info);

    let target = match find_drop_target(world, run_len, &first_card, point) {
        Some(target) if target != source => target,
        _ => {
            debug!("Drag end: ドロップ先なし。{} に戻したよ", source);
            return None;
        }
    };

    let request = MoveRequest::new(source, start, target);
    match mover.execute_move(world, history, &request) {
        Ok(outcome) => Some(outcome),
        Err(reason) => {
            debug!("Drag end: move rejected: {}", reason);
            None
        }
    }
}

/// ドラッグを取り消して、カード列を移動元に戻す。ドラッグ中でなければ false。
pub fn cancel_drag(world: &mut World, session: &mut DragSession) -> bool {
    match session.take() {
        Some(info) => {
            debug!("Drag cancelled: {} 枚を {} に戻す", info.cards.len(), info.source);
            return_cards(world, info);
            true
        }
        None => false,
    }
}

fn return_cards(world: &mut World, info: DraggingInfo) {
    match world.pile_mut(info.source) {
        Some(pile) => pile.add_all(info.cards),
        None => warn!("return_cards: 移動元 {} が見つからない", info.source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layout_calculator::pile_anchor;
    use crate::components::card::{Card, Rank, Suit};
    use crate::config::layout::{TABLEAU_Y_OFFSET_FACE_DOWN, TABLEAU_Y_OFFSET_FACE_UP};

    fn run_world() -> World {
        let mut world = World::new();
        world.set_pile_cards(
            StackType::Tableau(0),
            vec![
                Card::new(Suit::Club, Rank::Four),
                Card::face_up(Suit::Diamond, Rank::Ten),
                Card::face_up(Suit::Spade, Rank::Nine),
                Card::face_up(Suit::Diamond, Rank::Eight),
            ],
        );
        world.set_pile_cards(StackType::Tableau(1), vec![Card::face_up(Suit::Club, Rank::Jack)]);
        world
    }

    fn point_on_ten() -> Position {
        let anchor = pile_anchor(StackType::Tableau(0));
        Position::new(anchor.x + 10.0, anchor.y + TABLEAU_Y_OFFSET_FACE_DOWN + 5.0)
    }

    #[test]
    fn drag_lifts_the_run_out_of_the_source() {
        let mut world = run_world();
        let mut session = DragSession::Idle;
        assert!(begin_drag(&mut world, &mut session, StackType::Tableau(0), point_on_ten()));

        let info = session.info().expect("dragging");
        assert_eq!(info.start, 1);
        assert_eq!(info.cards.len(), 3);
        assert_eq!(info.offset, Position::new(10.0, 5.0));
        assert_eq!(world.tableaus()[0].len(), 1, "持ち上げた分は移動元から消える");
        assert_eq!(world.card_count() + info.cards.len(), 5);

        assert!(update_drag(&mut session, Position::new(300.0, 300.0)));
        assert_eq!(session.info().map(|i| i.position), Some(Position::new(290.0, 295.0)));
    }

    #[test]
    fn face_down_and_stock_cannot_be_dragged() {
        let mut world = run_world();
        world.set_pile_cards(StackType::Stock, vec![Card::new(Suit::Heart, Rank::Two)]);
        let mut session = DragSession::Idle;
        let anchor = pile_anchor(StackType::Tableau(0));
        assert!(!begin_drag(&mut world, &mut session, StackType::Tableau(0), Position::new(anchor.x + 5.0, anchor.y + 2.0)));
        assert!(!begin_drag(&mut world, &mut session, StackType::Stock, pile_anchor(StackType::Stock)));
        assert!(!begin_drag(&mut world, &mut session, StackType::Waste, pile_anchor(StackType::Waste)));
        assert_eq!(session, DragSession::Idle);
        assert_eq!(world, {
            let mut w = run_world();
            w.set_pile_cards(StackType::Stock, vec![Card::new(Suit::Heart, Rank::Two)]);
            w
        });
    }

    #[test]
    fn valid_drop_executes_the_move() {
        let mut world = run_world();
        let mut history = History::new();
        let mut mover = MoveCardSystem::new();
        let mut session = DragSession::Idle;
        begin_drag(&mut world, &mut session, StackType::Tableau(0), point_on_ten());

        let jack = pile_anchor(StackType::Tableau(1));
        let outcome = end_drag(&mut world, &mut history, &mut mover, &mut session, Position::new(jack.x + 10.0, jack.y + 40.0));

        assert_eq!(outcome.map(|o| (o.cards_moved, o.revealed)), Some((3, true)));
        assert_eq!(world.tableaus()[1].len(), 4);
        assert_eq!(world.tableaus()[0].cards(), &[Card::face_up(Suit::Club, Rank::Four)]);
        assert_eq!(world.score(), 5, "めくりボーナスだけ");
        assert_eq!(history.len(), 1);
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn invalid_drop_returns_the_run_unchanged() {
        let mut world = run_world();
        let before = world.clone();
        let mut history = History::new();
        let mut mover = MoveCardSystem::new();
        let mut session = DragSession::Idle;
        begin_drag(&mut world, &mut session, StackType::Tableau(0), point_on_ten());

        // 空の場札 (キング以外は置けない)
        let empty = pile_anchor(StackType::Tableau(4));
        let outcome = end_drag(&mut world, &mut history, &mut mover, &mut session, Position::new(empty.x + 5.0, empty.y + 5.0));

        assert_eq!(outcome, None);
        assert_eq!(world, before);
        assert!(history.is_empty());
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn dropping_back_on_the_source_is_a_noop() {
        let mut world = run_world();
        let before = world.clone();
        let mut history = History::new();
        let mut session = DragSession::Idle;
        begin_drag(&mut world, &mut session, StackType::Tableau(0), point_on_ten());

        let anchor = pile_anchor(StackType::Tableau(0));
        let back = Position::new(anchor.x + 10.0, anchor.y + TABLEAU_Y_OFFSET_FACE_DOWN + 2.0 * TABLEAU_Y_OFFSET_FACE_UP);
        assert_eq!(end_drag(&mut world, &mut history, &mut MoveCardSystem::new(), &mut session, back), None);
        assert_eq!(world, before);
        assert!(history.is_empty());
    }

    #[test]
    fn cancel_puts_everything_back() {
        let mut world = run_world();
        let before = world.clone();
        let mut session = DragSession::Idle;
        begin_drag(&mut world, &mut session, StackType::Tableau(0), point_on_ten());
        assert!(cancel_drag(&mut world, &mut session));
        assert_eq!(world, before);
        assert!(!cancel_drag(&mut world, &mut session));
    }
}
