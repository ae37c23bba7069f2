//! Championship points and win-streak scoring.
//!
//! Finishing positions map to base points through a fixed table, and a win
//! that immediately follows another win earns an extra streak point. The
//! streak is evaluated over the sequence of positions exactly as recorded,
//! so callers must feed positions in result insertion order.

/// Extra points for a win immediately following another win.
pub const STREAK_BONUS: u32 = 1;

/// Base points for a finishing position.
///
/// Positions outside 1-10 (including 0 and negatives) score zero.
///
/// # Examples
/// ```
/// use raceboard::core::scoring::base_points;
/// assert_eq!(base_points(1), 25);
/// assert_eq!(base_points(10), 1);
/// assert_eq!(base_points(11), 0);
/// ```
pub fn base_points(position: i32) -> u32 {
    match position {
        1 => 25,
        2 => 18,
        3 => 15,
        4 => 12,
        5 => 10,
        6 => 8,
        7 => 6,
        8 => 4,
        9 => 2,
        10 => 1,
        _ => 0,
    }
}

/// Total points for a sequence of finishing positions in recording order.
///
/// Sums base points per position and adds [`STREAK_BONUS`] for every win
/// that directly follows another win. A non-win result resets the streak.
pub fn tally<I>(positions: I) -> u32
where
    I: IntoIterator<Item = i32>,
{
    let mut total = 0u32;
    let mut in_streak = false;

    for position in positions {
        let mut points = base_points(position);
        if position == 1 && in_streak {
            points += STREAK_BONUS;
        }
        in_streak = position == 1;
        total += points;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points_table() {
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (i, points) in expected.iter().enumerate() {
            assert_eq!(base_points(i as i32 + 1), *points);
        }
    }

    #[test]
    fn test_base_points_out_of_range() {
        assert_eq!(base_points(0), 0);
        assert_eq!(base_points(-3), 0);
        assert_eq!(base_points(11), 0);
        assert_eq!(base_points(100), 0);
    }

    #[test]
    fn test_tally_no_streak() {
        // 25 + 18 + 15
        assert_eq!(tally([1, 2, 3]), 58);
    }

    #[test]
    fn test_tally_two_consecutive_wins() {
        // 25 + (25 + 1)
        assert_eq!(tally([1, 1]), 51);
    }

    #[test]
    fn test_tally_broken_streak() {
        // 25 + 18 + 25, no bonus after the streak is broken
        assert_eq!(tally([1, 2, 1]), 68);
    }

    #[test]
    fn test_tally_three_wins_in_a_row() {
        // 25 + 26 + 26
        assert_eq!(tally([1, 1, 1]), 77);
    }

    #[test]
    fn test_tally_streak_not_started_by_non_win() {
        // The bonus needs a win on the previous result, not just any result.
        assert_eq!(tally([2, 1]), 18 + 25);
    }

    #[test]
    fn test_tally_ignores_invalid_positions() {
        // Out-of-range positions score zero and also break a streak.
        assert_eq!(tally([1, 0, 1]), 50);
        assert_eq!(tally([1, -5, 99]), 25);
    }

    #[test]
    fn test_tally_empty() {
        assert_eq!(tally([]), 0);
    }
}
