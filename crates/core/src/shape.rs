//! Shape module - segment classification and orientation
//!
//! After every move each Body segment must carry a piece kind and an
//! orientation angle consistent with the local path shape. The values are
//! only consumed by views, but they encode which way each segment's
//! connecting ends face, so they must be exactly reproducible.
//!
//! The facing-to-angle mapping is the fixed lookup on
//! [`Direction::angle`]: Up=0, Left=90, Down=180, Right=270.

use tui_snake_types::{Direction, PieceKind, Segment};

/// A freshly advanced head, facing the current movement direction.
pub fn head_segment(direction: Direction) -> Segment {
    Segment {
        direction,
        previous_direction: direction,
        piece: PieceKind::Head,
        orientation: direction.angle(),
    }
}

/// Demote a former head (or any interior segment) to a straight piece,
/// oriented along its stored direction.
pub fn straighten(seg: Segment) -> Segment {
    Segment {
        piece: PieceKind::Straight,
        orientation: seg.direction.angle(),
        ..seg
    }
}

/// Classify the segment behind the head as a turn corner.
///
/// The corner's angle derives from the difference between the pre-turn
/// facing (the segment's stored direction) and the new movement
/// direction. Both `delta == 90` and `delta == 270` are quarter turns,
/// but of opposite visual handedness: the corner sprite is authored for
/// one rotation sense and needs an extra -90 degrees for the other.
/// The result is normalized into [0, 360) - the plain-subtraction
/// variant that skips normalization mishandles the wraparound case.
pub fn turn_corner(seg: Segment, new_direction: Direction) -> Segment {
    let old_angle = i32::from(seg.direction.angle());
    let new_angle = i32::from(new_direction.angle());
    let delta = (new_angle - old_angle).rem_euclid(360);
    let orientation = if delta == 90 {
        (old_angle - 90).rem_euclid(360) as u16
    } else {
        old_angle as u16
    };
    Segment {
        direction: new_direction,
        previous_direction: seg.direction,
        piece: PieceKind::Turn,
        orientation,
    }
}

/// Classify the new tail end after the old tail was removed.
///
/// The cap's orientation comes from the direction the segment recorded
/// *before its own last turn*, not its current facing - a tail sitting
/// just after a corner must still point along the old path.
pub fn tail_segment(seg: Segment) -> Segment {
    Segment {
        piece: PieceKind::Tail,
        orientation: seg.previous_direction.angle(),
        ..seg
    }
}
