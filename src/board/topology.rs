//! Track indexing
//!
//! Every side walks the board as a single serpentine track of `4 * columns`
//! cells. Lanes 1 and 3 are walked in ascending column order, lanes 0 and 2
//! in descending order, so the last cell of one lane sits next to the first
//! cell of the following one. The two sides share lane directions but visit
//! the lanes in opposite order (see [`Side::lane_order`]).
//!
//! Both mappings return `None` for anything off the board; edge queries are
//! a normal part of move generation.

use super::{Pos, Side, LANES};

/// Whether a lane is walked in ascending column order
#[inline]
pub fn lane_ascends(lane: u8) -> bool {
    lane % 2 == 1
}

/// Track index of `pos` from `side`'s perspective.
pub fn index_of(pos: Pos, side: Side, columns: usize) -> Option<usize> {
    if pos.lane as usize >= LANES || pos.col as usize >= columns {
        return None;
    }
    let lane_rank = side.progress(pos.lane) as usize;
    Some(lane_rank * columns + offset_in_lane(pos.lane, pos.col as usize, columns))
}

/// Cell at track index `index` from `side`'s perspective.
pub fn position_at(index: usize, side: Side, columns: usize) -> Option<Pos> {
    if columns == 0 || index >= LANES * columns {
        return None;
    }
    let lane = side.lane_order()[index / columns];
    let col = offset_in_lane(lane, index % columns, columns);
    Some(Pos::new(lane, col as u8))
}

/// Column reached after `steps` cells into `lane`, counted from its entry end.
#[inline]
pub fn lane_entry(lane: u8, steps: usize, columns: usize) -> Option<Pos> {
    if steps >= columns {
        return None;
    }
    Some(Pos::new(lane, offset_in_lane(lane, steps, columns) as u8))
}

/// Smallest throw that carries a piece at `pos` out of its lane.
#[inline]
pub fn steps_to_leave(pos: Pos, columns: usize) -> usize {
    if lane_ascends(pos.lane) {
        columns - pos.col as usize
    } else {
        pos.col as usize + 1
    }
}

// Self-inverse: maps a column to its offset along the lane and back.
#[inline]
fn offset_in_lane(lane: u8, n: usize, columns: usize) -> usize {
    if lane_ascends(lane) {
        n
    } else {
        columns - 1 - n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_b_track_starts_on_lane_zero_right_edge() {
        assert_eq!(position_at(0, Side::SideB, 9), Some(Pos::new(0, 8)));
        assert_eq!(position_at(8, Side::SideB, 9), Some(Pos::new(0, 0)));
        assert_eq!(position_at(9, Side::SideB, 9), Some(Pos::new(1, 0)));
        assert_eq!(position_at(18, Side::SideB, 9), Some(Pos::new(2, 8)));
        assert_eq!(position_at(35, Side::SideB, 9), Some(Pos::new(3, 8)));
    }

    #[test]
    fn test_side_a_track_starts_on_lane_three_left_edge() {
        assert_eq!(position_at(0, Side::SideA, 9), Some(Pos::new(3, 0)));
        assert_eq!(position_at(8, Side::SideA, 9), Some(Pos::new(3, 8)));
        assert_eq!(position_at(9, Side::SideA, 9), Some(Pos::new(2, 8)));
        assert_eq!(position_at(18, Side::SideA, 9), Some(Pos::new(1, 0)));
        assert_eq!(position_at(35, Side::SideA, 9), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_bijection_all_sizes() {
        for columns in 2..=16 {
            for side in Side::ALL {
                for index in 0..LANES * columns {
                    let pos = position_at(index, side, columns).unwrap();
                    assert_eq!(index_of(pos, side, columns), Some(index));
                }
                for lane in 0..LANES as u8 {
                    for col in 0..columns as u8 {
                        let pos = Pos::new(lane, col);
                        let index = index_of(pos, side, columns).unwrap();
                        assert_eq!(position_at(index, side, columns), Some(pos));
                    }
                }
            }
        }
    }

    #[test]
    fn test_consecutive_indices_are_adjacent_cells() {
        for side in Side::ALL {
            for index in 0..(LANES * 5 - 1) {
                let a = position_at(index, side, 5).unwrap();
                let b = position_at(index + 1, side, 5).unwrap();
                let lane_gap = (a.lane as i32 - b.lane as i32).abs();
                let col_gap = (a.col as i32 - b.col as i32).abs();
                assert_eq!(lane_gap + col_gap, 1, "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_out_of_range_has_no_mapping() {
        assert_eq!(position_at(36, Side::SideA, 9), None);
        assert_eq!(position_at(usize::MAX, Side::SideB, 9), None);
        assert_eq!(index_of(Pos { lane: 4, col: 0 }, Side::SideA, 9), None);
        assert_eq!(index_of(Pos::new(0, 9), Side::SideB, 9), None);
    }

    #[test]
    fn test_lane_entry_follows_lane_direction() {
        assert_eq!(lane_entry(1, 0, 5), Some(Pos::new(1, 0)));
        assert_eq!(lane_entry(2, 0, 5), Some(Pos::new(2, 4)));
        assert_eq!(lane_entry(2, 3, 5), Some(Pos::new(2, 1)));
        assert_eq!(lane_entry(3, 5, 5), None);
    }

    #[test]
    fn test_steps_to_leave() {
        assert_eq!(steps_to_leave(Pos::new(3, 0), 4), 4);
        assert_eq!(steps_to_leave(Pos::new(3, 3), 4), 1);
        assert_eq!(steps_to_leave(Pos::new(0, 0), 4), 1);
        assert_eq!(steps_to_leave(Pos::new(2, 3), 4), 4);
    }
}
