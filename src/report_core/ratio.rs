//! Derived ratio metrics over cumulative sums
//!
//! Ratios are computed from whole-window totals, not averaged per match.
//! Rounding is a display concern and happens in the reporter.

/// Kills per death. Defined as 0 when no deaths were recorded, regardless
/// of kills.
pub fn kd_ratio(kills: u32, deaths: u32) -> f64 {
    if deaths > 0 {
        f64::from(kills) / f64::from(deaths)
    } else {
        0.0
    }
}

/// Headshot percentage of kills. Defined as 0 when no kills were recorded.
pub fn headshot_pct(headshots: u32, kills: u32) -> f64 {
    if kills > 0 {
        (f64::from(headshots) / f64::from(kills)) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kd_ratio() {
        assert_eq!(kd_ratio(14, 13), 14.0 / 13.0);
        assert_eq!(kd_ratio(0, 5), 0.0);
    }

    #[test]
    fn test_kd_zero_deaths_is_zero_even_with_kills() {
        assert_eq!(kd_ratio(30, 0), 0.0);
    }

    #[test]
    fn test_headshot_pct() {
        assert_eq!(headshot_pct(4, 14), (4.0 / 14.0) * 100.0);
        assert_eq!(headshot_pct(0, 10), 0.0);
    }

    #[test]
    fn test_headshot_pct_zero_kills_is_zero() {
        assert_eq!(headshot_pct(3, 0), 0.0);
    }
}
