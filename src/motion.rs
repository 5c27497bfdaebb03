//! Maps the live track offset to per-card visuals.
//!
//! Everything here is a pure function of its arguments, so hosts can call it
//! every frame for every card.

/// Rotation (degrees) of a card one pitch to the right of center
pub const MAX_ROTATION: f32 = 90.0;

/// Piecewise-linear interpolation through three control points, without clamping.
///
/// `input` must be strictly increasing. Values outside `input[0]..=input[2]`
/// continue along the nearest segment.
pub fn interpolate(input: [f32; 3], output: [f32; 3], x: f32) -> f32 {
    let (i0, i1, o0, o1) = if x < input[1] {
        (input[0], input[1], output[0], output[1])
    } else {
        (input[1], input[2], output[1], output[2])
    };
    let span = i1 - i0;
    if span == 0.0 {
        return o0;
    }
    o0 + (x - i0) / span * (o1 - o0)
}

/// Y-axis rotation in degrees for the card at `index` when the track sits at `offset`.
///
/// A centered card faces the viewer (0°). One pitch to the left it has turned
/// to 90°, one pitch to the right to -90°, and it keeps turning beyond that.
pub fn card_rotation(index: usize, offset: f32, track_item_offset: f32) -> f32 {
    let index = index as f32;
    interpolate(
        [
            -(index + 1.0) * track_item_offset,
            -index * track_item_offset,
            -(index - 1.0) * track_item_offset,
        ],
        [MAX_ROTATION, 0.0, -MAX_ROTATION],
        offset,
    )
}

/// Horizontal perspective origin for the track, in px from its left edge
pub fn perspective_origin_x(current_index: usize, track_item_offset: f32, item_width: f32) -> f32 {
    current_index as f32 * track_item_offset + item_width / 2.0
}

/// Resting track offset for a given index
pub fn target_offset(index: usize, track_item_offset: f32) -> f32 {
    -(index as f32 * track_item_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_card_rotation() {
        assert_eq!(card_rotation(0, 0.0, 300.0), 0.0);
        assert_eq!(card_rotation(0, -300.0, 300.0), 90.0);
        assert_eq!(card_rotation(0, 300.0, 300.0), -90.0);
        assert_eq!(card_rotation(0, -150.0, 300.0), 45.0);
    }

    #[test]
    fn test_rotation_extrapolates() {
        assert_eq!(card_rotation(0, -450.0, 300.0), 135.0);
        assert_eq!(card_rotation(0, 600.0, 300.0), -180.0);
    }

    #[test]
    fn test_rotation_of_later_cards() {
        // Card 2 is centered when the track has moved two pitches left
        assert_eq!(card_rotation(2, -600.0, 300.0), 0.0);
        // With the track at rest, card 2 is two pitches to the right
        assert_eq!(card_rotation(2, 0.0, 300.0), -180.0);
        assert_eq!(card_rotation(1, -300.0, 300.0), 0.0);
        assert_eq!(card_rotation(1, -450.0, 300.0), 45.0);
    }

    #[test]
    fn test_interpolate_degenerate_span() {
        assert_eq!(interpolate([0.0, 0.0, 1.0], [5.0, 6.0, 7.0], -1.0), 5.0);
    }

    #[test]
    fn test_perspective_origin_and_target() {
        assert_eq!(perspective_origin_x(0, 584.0, 568.0), 284.0);
        assert_eq!(perspective_origin_x(2, 584.0, 568.0), 1452.0);
        assert_eq!(target_offset(3, 316.0), -948.0);
        assert_eq!(target_offset(0, 316.0), 0.0);
    }
}
