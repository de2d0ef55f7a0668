//! Bit twiddling.

use super::IndexMode;
use crate::{Direction, Resolution};
use std::num::NonZeroU8;

/// Offset (in bits) of the mode in an H3 index.
const MODE_OFFSET: usize = 59;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;

/// Offset (in bits) of the cell edge in an H3 index.
const EDGE_OFFSET: usize = 56;
const EDGE_MASK: u64 = 0b111 << EDGE_OFFSET;

/// Offset (in bits) of the cell vertex in an H3 index.
const VERTEX_OFFSET: usize = 56;
const VERTEX_MASK: u64 = 0b111 << VERTEX_OFFSET;

/// The bit offset of the resolution in an H3 index.
const RESOLUTION_OFFSET: u64 = 52;
// Bitmask to select the resolution bits in an H3 index.
const RESOLUTION_MASK: u64 = 0b1111 << RESOLUTION_OFFSET;

/// Offset (in bits) of the base cell in an H3 index.
const BASE_CELL_OFFSET: u64 = 45;
// Bitmask to select the base cell bits in an H3 index.
const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;

// Bitmask to select the directions bits in an H3 index.
pub const DIRECTIONS_MASK: u64 = 0x0000_1fff_ffff_ffff;

/// Returns the H3 index mode  bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_mode(bits: u64) -> u8 {
    ((bits & MODE_MASK) >> MODE_OFFSET) as u8
}

/// Clears the H3 index mode bits.
#[must_use]
pub const fn clr_mode(bits: u64) -> u64 {
    bits & !MODE_MASK
}

/// Sets the H3 index mode bits.
#[must_use]
pub const fn set_mode(bits: u64, mode: IndexMode) -> u64 {
    clr_mode(bits) | ((mode as u64) << MODE_OFFSET)
}

/// Returns the H3 index cell edge bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_edge(bits: u64) -> u8 {
    ((bits & EDGE_MASK) >> EDGE_OFFSET) as u8
}

/// Clears the H3 index cell edge bits.
#[must_use]
pub const fn clr_edge(bits: u64) -> u64 {
    bits & !EDGE_MASK
}

/// Returns the H3 index cell vertex bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_vertex(bits: u64) -> u8 {
    ((bits & VERTEX_MASK) >> VERTEX_OFFSET) as u8
}

/// Clears the H3 index cell vertex bits.
#[must_use]
pub const fn clr_vertex(bits: u64) -> u64 {
    bits & !VERTEX_MASK
}

/// Returns the H3 index resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_resolution(bits: u64) -> Resolution {
    // SAFETY: the masking restricts the value on 4 bits (thus 0-15).
    Resolution::new_unchecked(
        ((bits & RESOLUTION_MASK) >> RESOLUTION_OFFSET) as u8,
    )
}

/// Clears the H3 index resolution bits.
#[must_use]
pub const fn clr_resolution(bits: u64) -> u64 {
    bits & !RESOLUTION_MASK
}

/// Sets the H3 index resolution bits.
#[must_use]
pub fn set_resolution(bits: u64, resolution: Resolution) -> u64 {
    clr_resolution(bits) | (u64::from(resolution) << RESOLUTION_OFFSET)
}

/// Returns the H3 index base cell bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_base_cell(bits: u64) -> u8 {
    ((bits & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
}

/// Sets the H3 index base cell bits.
#[must_use]
pub fn set_base_cell(bits: u64, cell: u8) -> u64 {
    (bits & !BASE_CELL_MASK) | (u64::from(cell) << BASE_CELL_OFFSET)
}

/// Returns the H3 index direction bits at the given resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub fn get_direction(bits: u64, resolution: Resolution) -> u8 {
    ((bits & resolution.direction_mask()) >> resolution.direction_offset())
        as u8
}

/// Sets unused directions in an H3 index at the given resolution.
#[must_use]
pub fn set_unused(bits: u64, resolution: Resolution) -> u64 {
    let unused_end_offset = resolution.direction_offset();
    let unused_bits = (1 << unused_end_offset) - 1;

    bits | unused_bits
}

/// Sets the direction bits at the given resolution.
fn set_direction(
    bits: u64,
    resolution: Resolution,
    direction: Direction,
) -> u64 {
    let mask = resolution.direction_mask();
    let shifted = u64::from(direction) << resolution.direction_offset();

    (bits & !mask) | shifted
}

/// Returns the first non-center direction, starting from resolution 1, if
/// any.
///
/// Used to detect the pentagonal deleted-subsequence case: a pentagon cell
/// index whose leading non-zero digit is `K` is invalid and must be rotated
/// out during indexing.
#[must_use]
pub fn first_axe(bits: u64) -> Option<NonZeroU8> {
    let resolution = get_resolution(bits);

    Resolution::range(Resolution::One, resolution)
        .map(|res| get_direction(bits, res))
        .find(|&digit| digit != 0)
        .and_then(|digit| Direction::new_unchecked(digit).axe())
}

/// Rotates every direction digit of the index `count` times, by 60° steps.
#[must_use]
pub fn rotate60<const CCW: bool>(bits: u64, count: usize) -> u64 {
    let resolution = get_resolution(bits);

    Resolution::range(Resolution::One, resolution).fold(bits, |acc, res| {
        let digit = Direction::new_unchecked(get_direction(acc, res))
            .rotate60::<CCW>(count);
        set_direction(acc, res, digit)
    })
}

/// Rotates a pentagon index by 60°, accounting for the deleted K-axis
/// subsequence.
///
/// Same as a single-step [`rotate60`], except that as soon as the rotation
/// would produce a leading `K` digit (the missing pentagon direction), an
/// extra rotation is applied to push the index out of the deleted
/// subsequence.
#[must_use]
pub fn pentagon_rotate60<const CCW: bool>(bits: u64) -> u64 {
    let resolution = get_resolution(bits);
    let mut result = bits;
    let mut found_first_non_center = false;

    for res in Resolution::range(Resolution::One, resolution) {
        let digit = Direction::new_unchecked(get_direction(result, res))
            .rotate60_once::<CCW>();
        result = set_direction(result, res, digit);

        if !found_first_non_center && digit != Direction::Center {
            found_first_non_center = true;
            if first_axe(result) == Direction::K.axe() {
                result = rotate60::<CCW>(result, 1);
            }
        }
    }

    result
}
