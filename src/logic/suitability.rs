use crate::models::SuitabilityLevel;

/// Map a suitability score onto its recommendation strength.
pub fn bucket(score: u8) -> SuitabilityLevel {
    if score >= 90 {
        SuitabilityLevel::HighlyRecommended
    } else if score >= 75 {
        SuitabilityLevel::Recommended
    } else if score >= 60 {
        SuitabilityLevel::Moderate
    } else {
        SuitabilityLevel::LowRecommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_step_points() {
        assert_eq!(bucket(90), SuitabilityLevel::HighlyRecommended);
        assert_eq!(bucket(89), SuitabilityLevel::Recommended);
        assert_eq!(bucket(75), SuitabilityLevel::Recommended);
        assert_eq!(bucket(74), SuitabilityLevel::Moderate);
        assert_eq!(bucket(60), SuitabilityLevel::Moderate);
        assert_eq!(bucket(59), SuitabilityLevel::LowRecommended);
        assert_eq!(bucket(0), SuitabilityLevel::LowRecommended);
        assert_eq!(bucket(100), SuitabilityLevel::HighlyRecommended);
    }

    #[test]
    fn bucketing_is_monotonic() {
        // SuitabilityLevel orders strongest-first, so rising scores
        // must never move to a later (weaker) variant.
        let mut previous = bucket(0);
        for score in 1..=100u8 {
            let current = bucket(score);
            assert!(current <= previous, "bucket regressed at score {score}");
            previous = current;
        }
    }
}
