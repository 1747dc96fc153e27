//! Pairwise braking cost between two robots sharing a two-lane road.
//!
//! Robots cruise at speeds drawn from `[SPEED_MIN, SPEED_MAX]`. A lane
//! threshold splits traffic: robots at or below the threshold use the
//! slow lane, robots at or above it use the fast lane. When two robots
//! share a lane, the faster one forces the slower one to brake; in the
//! slow lane the slower robot brakes to a standstill, in the fast lane
//! only down to the threshold. Pairs in different lanes never interact.

/// Lower bound of the cruising-speed range.
pub const SPEED_MIN: f64 = 1.0;

/// Upper bound of the cruising-speed range.
pub const SPEED_MAX: f64 = 2.0;

// Speeds closer than this are treated as equal, with no interaction.
const EQUAL_SPEED_TOLERANCE: f64 = 1e-10;

/// Weighted braking cost contributed by a pair of robots cruising at
/// `v1` and `v2` under the given lane threshold.
///
/// Symmetric in `v1` and `v2`, and exactly zero both for equal speeds
/// and for pairs that straddle the threshold.
pub fn interaction_cost(v1: f64, v2: f64, threshold: f64) -> f64 {
    let v_slow = v1.min(v2);
    let v_fast = v1.max(v2);

    if (v_fast - v_slow).abs() < EQUAL_SPEED_TOLERANCE {
        return 0.0;
    }

    // Encounter rate grows with the relative speed gap and falls off
    // with both cruising speeds.
    let weight = 2.0 * (v_fast - v_slow).abs() / (v1 * v2);

    let mut cost = 0.0;
    if v_slow <= threshold && v_fast <= threshold {
        // Both in the slow lane: the slower robot brakes to zero.
        cost += v_slow * v_slow;
    } else if v_slow >= threshold && v_fast >= threshold {
        // Both in the fast lane: the slower robot brakes down to the
        // threshold only.
        cost += (v_slow - threshold) * (v_slow - threshold);
    }

    weight * cost
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const THRESHOLDS: [f64; 5] = [1.0, 1.25, 1.5, 1.75, 2.0];

    #[test]
    fn test_equal_speeds_contribute_nothing() {
        for threshold in THRESHOLDS {
            assert_eq!(interaction_cost(1.5, 1.5, threshold), 0.0);
            assert_eq!(interaction_cost(SPEED_MIN, SPEED_MIN, threshold), 0.0);
            assert_eq!(interaction_cost(SPEED_MAX, SPEED_MAX, threshold), 0.0);
        }
    }

    #[test]
    fn test_nearly_equal_speeds_contribute_nothing() {
        assert_eq!(interaction_cost(1.5, 1.5 + 5e-11, 1.0), 0.0);
    }

    #[test]
    fn test_symmetric_in_speeds() {
        let speeds = [1.0, 1.17, 1.5, 1.83, 2.0];
        for threshold in THRESHOLDS {
            for v1 in speeds {
                for v2 in speeds {
                    assert_eq!(
                        interaction_cost(v1, v2, threshold),
                        interaction_cost(v2, v1, threshold)
                    );
                }
            }
        }
    }

    #[test]
    fn test_slow_lane_pair() {
        // weight = 2 * 0.2 / (1.2 * 1.4), cost = 1.2^2
        assert_relative_eq!(
            interaction_cost(1.2, 1.4, 1.5),
            0.3428571428571428,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fast_lane_pair() {
        // weight = 2 * 0.2 / (1.8 * 1.6), cost = (1.6 - 1.5)^2
        assert_relative_eq!(
            interaction_cost(1.8, 1.6, 1.5),
            0.001388888888888889,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_straddling_pair_contributes_nothing() {
        assert_eq!(interaction_cost(1.1, 1.9, 1.5), 0.0);
        assert_eq!(interaction_cost(1.49, 1.51, 1.5), 0.0);
    }

    #[test]
    fn test_pair_at_threshold_boundary() {
        // The slower robot sits exactly at the threshold: the pair
        // shares the fast lane and the braking distance is zero.
        assert_eq!(interaction_cost(1.25, 1.5, 1.25), 0.0);
        // The faster robot sits exactly at the threshold: the pair
        // shares the slow lane.
        assert_relative_eq!(
            interaction_cost(1.1, 1.25, 1.25),
            2.0 * 0.15 * 1.21 / (1.1 * 1.25),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_finite_outside_nominal_range() {
        // Defensive: the formulas stay well-defined on a superset of
        // the speed range.
        assert!(interaction_cost(0.5, 2.5, 1.5).is_finite());
        assert!(interaction_cost(0.9, 1.1, 1.0).is_finite());
    }
}
