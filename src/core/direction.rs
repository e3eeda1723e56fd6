//! Facing directions on the board.
//!
//! Directions are encoded clockwise, 0-3: Right, Down, Left, Up.
//! The y axis grows downward, so `Down` increases `y`.

use serde::{Deserialize, Serialize};

/// A facing direction. Turning rotates by one step mod 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    Right,
    /// +y
    Down,
    /// -x
    Left,
    /// -y
    Up,
}

impl Direction {
    /// All four directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Get the numeric encoding (0-3, clockwise from Right).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    /// Decode from a numeric encoding, wrapping mod 4.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        }
    }

    /// Get the unit step for one forward move.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    /// Rotate one step counter-clockwise.
    #[must_use]
    pub const fn turned_left(self) -> Self {
        Self::from_index(self.index().wrapping_add(3))
    }

    /// Rotate one step clockwise.
    #[must_use]
    pub const fn turned_right(self) -> Self {
        Self::from_index(self.index().wrapping_add(1))
    }

    /// Whether two directions lie on perpendicular axes.
    ///
    /// Odd index-sum parity means one direction is horizontal and the
    /// other vertical; this distinguishes a side collision from a
    /// head-on collision.
    #[must_use]
    pub const fn crosses(self, other: Direction) -> bool {
        (self.index() + other.index()) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_encoding_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.index()), dir);
        }
        assert_eq!(Direction::from_index(7), Direction::Up);
    }

    #[test]
    fn test_turn_left_cycle() {
        assert_eq!(Direction::Up.turned_left(), Direction::Left);
        assert_eq!(Direction::Left.turned_left(), Direction::Down);
        assert_eq!(Direction::Down.turned_left(), Direction::Right);
        assert_eq!(Direction::Right.turned_left(), Direction::Up);
    }

    #[test]
    fn test_turn_right_cycle() {
        assert_eq!(Direction::Up.turned_right(), Direction::Right);
        assert_eq!(Direction::Right.turned_right(), Direction::Down);
        assert_eq!(Direction::Down.turned_right(), Direction::Left);
        assert_eq!(Direction::Left.turned_right(), Direction::Up);
    }

    #[test]
    fn test_turns_are_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.turned_left().turned_right(), dir);
            assert_eq!(dir.turned_right().turned_left(), dir);
        }
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Up.offset(), (0, -1));
    }

    #[test]
    fn test_crosses_parity() {
        assert!(Direction::Right.crosses(Direction::Down));
        assert!(Direction::Up.crosses(Direction::Left));
        assert!(!Direction::Right.crosses(Direction::Left));
        assert!(!Direction::Up.crosses(Direction::Down));
        assert!(!Direction::Up.crosses(Direction::Up));
    }
}
