//! Mapping of stored hand slots to compass seats.
//!
//! Upstream records always store four hands in the slot order that applies
//! when North deals. For any other dealer the seats shift clockwise by the
//! dealer's offset (N=0, E=1, S=2, W=3).

use crate::Position;

/// `SLOT_FOR_SEAT[offset][seat]` is the raw slot holding `seat`'s hand,
/// i.e. `(seat - offset + 4) % 4`.
const SLOT_FOR_SEAT: [[usize; 4]; 4] = [
    [0, 1, 2, 3],
    [3, 0, 1, 2],
    [2, 3, 0, 1],
    [1, 2, 3, 0],
];

fn rotate<T: Clone>(slots: &[T; 4], offset: usize) -> [T; 4] {
    let table = &SLOT_FOR_SEAT[offset % 4];
    std::array::from_fn(|seat| slots[table[seat]].clone())
}

/// Assign raw slots to seats for the given dealer.
/// The result is indexed by seat (N, E, S, W).
pub fn map_slots<T: Clone>(raw: &[T; 4], dealer: Position) -> [T; 4] {
    rotate(raw, dealer.offset())
}

/// Inverse of [`map_slots`]: recover the stored slot order from seats
pub fn unmap_slots<T: Clone>(seats: &[T; 4], dealer: Position) -> [T; 4] {
    rotate(seats, (4 - dealer.offset()) % 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_dealer_is_identity() {
        let raw = ["a", "b", "c", "d"];
        assert_eq!(map_slots(&raw, Position::North), raw);
    }

    #[test]
    fn test_east_dealer_shifts_clockwise() {
        let raw = ["a", "b", "c", "d"];
        // N gets slot 3, E slot 0, S slot 1, W slot 2
        assert_eq!(map_slots(&raw, Position::East), ["d", "a", "b", "c"]);
        assert_eq!(map_slots(&raw, Position::South), ["c", "d", "a", "b"]);
        assert_eq!(map_slots(&raw, Position::West), ["b", "c", "d", "a"]);
    }

    #[test]
    fn test_table_matches_formula() {
        for offset in 0..4 {
            for seat in 0..4 {
                assert_eq!(SLOT_FOR_SEAT[offset][seat], (seat + 4 - offset) % 4);
            }
        }
    }

    #[test]
    fn test_inverse_recovers_raw_slots() {
        let assignments = [[0, 1, 2, 3], [3, 1, 0, 2], [2, 2, 1, 1], [9, 8, 7, 6]];
        for raw in assignments {
            for dealer in Position::ALL {
                let seats = map_slots(&raw, dealer);
                assert_eq!(unmap_slots(&seats, dealer), raw, "dealer {:?}", dealer);
            }
        }
    }
}
