// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use std::error::Error;
use std::fmt;

use log::debug;

use crate::components::card::Card;
use crate::components::pile::PileKind;
use crate::components::stack::StackType;
use crate::world::World;

use super::common::is_face_up_run;

/// 「`source` の `start` 番目から上を `target` へ」という移動の依頼。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: StackType,
    pub start: usize,
    pub target: StackType,
}

impl MoveRequest {
    pub fn new(source: StackType, start: usize, target: StackType) -> Self {
        Self { source, start, target }
    }

    /// `source` の一番上の1枚だけを動かす依頼。`source` が空なら None。
    pub fn top_card(world: &World, source: StackType, target: StackType) -> Option<Self> {
        let len = world.pile(source)?.len();
        len.checked_sub(1).map(|start| Self::new(source, start, target))
    }
}

/// 移動が認められなかった理由。プレイヤーには見せず、ログに出すだけだよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// 存在しないパイル番号。
    UnknownStack(StackType),
    /// 移動元と移動先が同じ。
    SameStack(StackType),
    /// 山札からは直接動かせない。
    IllegalSource(StackType),
    /// 山札・捨て札には置けない。
    IllegalDestination(StackType),
    /// 指定位置にカードが無い。
    EmptyRun,
    /// 捨て札・組札からは一番上の1枚しか動かせない。
    NotTopCard,
    /// 裏向きのカードは動かせない。
    FaceDownCard(Card),
    /// 組札には複数枚をまとめて置けない。
    RunOntoFoundation(usize),
    /// 移動先のルールに合わない。
    NotAccepted { card: Card, target: StackType },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownStack(s) => write!(f, "unknown pile {}", s),
            MoveRejection::SameStack(s) => write!(f, "source and target are both {}", s),
            MoveRejection::IllegalSource(s) => write!(f, "cards cannot be taken from {}", s),
            MoveRejection::IllegalDestination(s) => write!(f, "cards cannot be dropped on {}", s),
            MoveRejection::EmptyRun => write!(f, "no card at the requested position"),
            MoveRejection::NotTopCard => write!(f, "only the top card can leave this pile"),
            MoveRejection::FaceDownCard(c) => write!(f, "{} is face down", c),
            MoveRejection::RunOntoFoundation(n) => write!(f, "{} cards cannot go to a foundation at once", n),
            MoveRejection::NotAccepted { card, target } => write!(f, "{} does not accept {}", target, card),
        }
    }
}

impl Error for MoveRejection {}

/// 移動がルール上可能か検証する。OK なら動かすカードの枚数を返すよ。
pub fn validate_move(world: &World, request: &MoveRequest) -> Result<usize, MoveRejection> {
    let MoveRequest { source, start, target } = *request;

    let source_pile = world.pile(source).ok_or(MoveRejection::UnknownStack(source))?;
    let target_pile = world.pile(target).ok_or(MoveRejection::UnknownStack(target))?;
    if source == target {
        return Err(MoveRejection::SameStack(source));
    }
    if !(target.is_foundation() || target.is_tableau()) {
        return Err(MoveRejection::IllegalDestination(target));
    }

    let run = source_pile
        .cards()
        .get(start..)
        .filter(|run| !run.is_empty())
        .ok_or(MoveRejection::EmptyRun)?;

    match source_pile.kind() {
        PileKind::Stock => return Err(MoveRejection::IllegalSource(source)),
        PileKind::Waste | PileKind::Foundation { .. } if run.len() != 1 => {
            return Err(MoveRejection::NotTopCard);
        }
        _ => {}
    }

    if !is_face_up_run(run) {
        return Err(MoveRejection::FaceDownCard(run[0].clone()));
    }
    if target.is_foundation() && run.len() > 1 {
        return Err(MoveRejection::RunOntoFoundation(run.len()));
    }
    if !target_pile.can_accept(&run[0]) {
        return Err(MoveRejection::NotAccepted { card: run[0].clone(), target });
    }

    debug!("[Move Validation] {} card(s) from {} to {} OK", run.len(), source, target);
    Ok(run.len())
}
