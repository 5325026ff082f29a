use crate::locale::Locale;
use serde::{Deserialize, Serialize};

pub const DEVELOPMENT_RATIO: f64 = 0.45;
pub const TESTING_RATIO: f64 = 0.25;
pub const DEPLOYMENT_RATIO: f64 = 0.15;
pub const MAINTENANCE_RATIO: f64 = 0.15;

/// Working days in a week, used for the week count of the time label.
pub const DAYS_PER_WEEK: u32 = 5;

/// Days allotted to each delivery phase.
///
/// Each phase is rounded up on its own, so the parts may add up to as much as
/// three days more than the total they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    pub development: u32,
    pub testing: u32,
    pub deployment: u32,
    pub maintenance: u32,
}

impl PhaseBreakdown {
    pub fn from_total(total_days: u32) -> Self {
        let share = |ratio: f64| (f64::from(total_days) * ratio).ceil() as u32;
        Self {
            development: share(DEVELOPMENT_RATIO),
            testing: share(TESTING_RATIO),
            deployment: share(DEPLOYMENT_RATIO),
            maintenance: share(MAINTENANCE_RATIO),
        }
    }

    /// Sum of all phases; never less than the total the breakdown came from.
    pub fn sum(&self) -> u32 {
        self.development + self.testing + self.deployment + self.maintenance
    }
}

/// Number of working weeks needed for `total_days`, rounded up.
pub fn weeks(total_days: u32) -> u32 {
    total_days.div_ceil(DAYS_PER_WEEK)
}

/// Short duration label such as `12j (3 sem.)`.
pub fn time_label(total_days: u32, locale: Locale) -> String {
    let weeks = weeks(total_days);
    match locale {
        Locale::En => format!("{}d ({} wk.)", total_days, weeks),
        Locale::Fr => format!("{}j ({} sem.)", total_days, weeks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiples_are_not_rounded_up() {
        let parts = PhaseBreakdown::from_total(100);
        assert_eq!(parts.development, 45);
        assert_eq!(parts.testing, 25);
        assert_eq!(parts.deployment, 15);
        assert_eq!(parts.maintenance, 15);
        assert_eq!(parts.sum(), 100);
    }

    #[test]
    fn independent_ceilings_overstate_small_totals() {
        let parts = PhaseBreakdown::from_total(1);
        assert_eq!(parts.sum(), 4);
        let parts = PhaseBreakdown::from_total(7);
        assert_eq!((parts.development, parts.testing, parts.deployment, parts.maintenance), (4, 2, 2, 2));
    }

    #[test]
    fn week_count_rounds_up() {
        assert_eq!(weeks(1), 1);
        assert_eq!(weeks(5), 1);
        assert_eq!(weeks(6), 2);
        assert_eq!(weeks(100), 20);
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(time_label(12, Locale::Fr), "12j (3 sem.)");
        assert_eq!(time_label(12, Locale::En), "12d (3 wk.)");
    }
}
