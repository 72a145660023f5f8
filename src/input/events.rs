//! Pointer event types delivered by the host surface.

use crate::draw::Point;

/// A single pointer event in surface coordinates.
///
/// Hosts map their native mouse events onto these four kinds: a button press, motion
/// without a button held, motion with a button held, and a button release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(Point),
    /// Pointer moved with no button held
    Move(Point),
    /// Pointer moved while the primary button is held
    Drag(Point),
    /// Primary button released
    Up(Point),
}

impl PointerEvent {
    /// Location carried by the event.
    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Down(p)
            | PointerEvent::Move(p)
            | PointerEvent::Drag(p)
            | PointerEvent::Up(p) => p,
        }
    }

    /// Lowercase keyword for the event kind, as used in replay scripts.
    pub fn keyword(&self) -> &'static str {
        match self {
            PointerEvent::Down(_) => DOWN,
            PointerEvent::Move(_) => MOVE,
            PointerEvent::Drag(_) => DRAG,
            PointerEvent::Up(_) => UP,
        }
    }

    /// Builds the event named by `keyword` (case-insensitive) at `point`.
    pub fn from_keyword(keyword: &str, point: Point) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            DOWN => Some(PointerEvent::Down(point)),
            MOVE => Some(PointerEvent::Move(point)),
            DRAG => Some(PointerEvent::Drag(point)),
            UP => Some(PointerEvent::Up(point)),
            _ => None,
        }
    }
}

const DOWN: &str = "down";
const MOVE: &str = "move";
const DRAG: &str = "drag";
const UP: &str = "up";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trips_through_from_keyword() {
        let at = Point::new(3.0, -4.5);
        for event in [
            PointerEvent::Down(at),
            PointerEvent::Move(at),
            PointerEvent::Drag(at),
            PointerEvent::Up(at),
        ] {
            assert_eq!(PointerEvent::from_keyword(event.keyword(), at), Some(event));
            assert_eq!(event.point(), at);
        }
    }

    #[test]
    fn from_keyword_ignores_case_and_rejects_unknown() {
        let at = Point::new(1.0, 1.0);
        assert_eq!(
            PointerEvent::from_keyword("DRAG", at),
            Some(PointerEvent::Drag(at))
        );
        assert_eq!(PointerEvent::from_keyword("click", at), None);
    }
}
