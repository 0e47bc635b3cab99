// Screening pipeline: job text -> RequirementRecord, then candidate records
// are scored against it and reduced into batch analytics.

pub mod analytics;
pub mod jd_parser;
pub mod qa;
pub mod scoring;

/// Round to 2 decimal places, the precision every reported score uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(49.996), 50.0);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(0.0), 0.0);
    }
}
