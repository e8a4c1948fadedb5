//! Arc trimming: cut candidate arcs down to the visible outline
//!
//! Per owner, the first candidate arc is the seed: the owner's circle minus
//! the first neighbor's disk. Each further neighbor's disk is subtracted from
//! whatever is still live, one neighbor at a time, through an explicit
//! worklist of `(piece, next neighbor)` entries. Pieces cut away are kept as
//! `Disabled` segments; a piece that has been past every neighbor is
//! `Confirmed`. Per owner the segments tile the full circle.
//!
//! The worklist pops at most `c (c + 1) / 2` entries for `c` candidate arcs,
//! since after `k` subtractions an owner has at most `k + 1` live pieces. The
//! default cap `(c + 1)^2` is above that bound; a smaller configured cap can
//! still be hit, in which case the unfinished pieces are returned as
//! `Pending` and the outcome is flagged as not converged.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use log::warn;

use crate::geometry::arc::{ArcInterval, ArcState, ANGLE_EPS};
use crate::simulation::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct TrimOutcome {
    pub segments: Vec<ArcInterval>,
    pub converged: bool,
    pub iterations: usize,
    pub cap: usize,
}

pub fn default_iteration_cap(candidates: usize) -> usize {
    (candidates + 1).saturating_mul(candidates + 1)
}

/// The rest of the owner's circle: the part facing, and covered by, the
/// neighbor that produced `arc`
pub fn interior_arc(arc: &ArcInterval) -> ArcInterval {
    ArcInterval::from_sweep(arc.owner, arc.center, arc.end_angle, TAU - arc.span)
}

/// Split `arc` by `mask` (same circle) into the pieces outside the mask and
/// the pieces inside it. Slivers narrower than [`ANGLE_EPS`] are dropped.
pub fn subtract_arc(arc: &ArcInterval, mask: &ArcInterval) -> (Vec<ArcInterval>, Vec<ArcInterval>) {
    let len = arc.span;

    // mask coverage as offsets clockwise from the arc start, split at 2π
    let first = arc.offset_of(mask.start_angle);
    let last = first + mask.span;
    let covered: Vec<(f64, f64)> = if last <= TAU {
        vec![(first, last)]
    } else {
        vec![(0.0, last - TAU), (first, TAU)]
    };

    let removed: Vec<(f64, f64)> = covered
        .into_iter()
        .map(|(a, b)| (a.max(0.0), b.min(len)))
        .filter(|(a, b)| b - a > ANGLE_EPS)
        .collect();

    let mut kept = Vec::new();
    let mut cursor = 0.0_f64;
    for &(a, b) in &removed {
        if a - cursor > ANGLE_EPS {
            kept.push((cursor, a));
        }
        cursor = cursor.max(b);
    }
    if len - cursor > ANGLE_EPS {
        kept.push((cursor, len));
    }

    let to_arcs = |pieces: Vec<(f64, f64)>| -> Vec<ArcInterval> {
        pieces
            .into_iter()
            .map(|(a, b)| ArcInterval::from_sweep(arc.owner, arc.center, arc.start_angle - a, b - a))
            .collect()
    };

    (to_arcs(kept), to_arcs(removed))
}

/// Trim `candidates` (as produced by `candidate_arcs`) for a cluster whose
/// member positions are `centers`. Members without candidates keep their
/// whole circle.
pub fn trim_arcs(centers: &[NVec3], candidates: &[ArcInterval], cap: Option<usize>) -> TrimOutcome {
    let cap = cap.unwrap_or_else(|| default_iteration_cap(candidates.len()));

    let mut by_owner: Vec<Vec<&ArcInterval>> = vec![Vec::new(); centers.len()];
    for arc in candidates {
        if let Some(list) = by_owner.get_mut(arc.owner) {
            list.push(arc);
        }
    }

    let mut segments = Vec::new();
    let mut iterations = 0;
    let mut converged = true;

    for (owner, arcs) in by_owner.iter().enumerate() {
        let Some((seed, rest)) = arcs.split_first() else {
            segments.push(ArcInterval::full_circle(owner, centers[owner]).with_state(ArcState::Confirmed));
            continue;
        };

        segments.push(interior_arc(seed).with_state(ArcState::Disabled));
        let masks: Vec<ArcInterval> = rest.iter().map(|a| interior_arc(a)).collect();

        let mut worklist: VecDeque<(ArcInterval, usize)> = VecDeque::new();
        worklist.push_back(((*seed).clone().with_state(ArcState::Pending), 0));

        while let Some((piece, next)) = worklist.pop_front() {
            if iterations >= cap {
                // out of budget: hand back what is known, unconfirmed
                converged = false;
                segments.push(piece);
                continue;
            }
            iterations += 1;

            let Some(mask) = masks.get(next) else {
                segments.push(piece.with_state(ArcState::Confirmed));
                continue;
            };

            let (kept, removed) = subtract_arc(&piece, mask);
            segments.extend(removed.into_iter().map(|r| r.with_state(ArcState::Disabled)));
            worklist.extend(kept.into_iter().map(|k| (k, next + 1)));
        }
    }

    if !converged {
        warn!(
            "arc trimming hit its cap of {} iterations, {} arcs left unconfirmed",
            cap,
            segments.iter().filter(|s| s.state == ArcState::Pending).count()
        );
    }

    TrimOutcome {
        segments,
        converged,
        iterations,
        cap,
    }
}
