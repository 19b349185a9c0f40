use crate::models::{SoilBand, SoilParameter};

/// Inclusive band ranges per parameter, narrowest first:
/// excellent, good, moderate. The bands are nested, so evaluation
/// order matters; anything outside all three is poor.
fn ranges(parameter: SoilParameter) -> [(f64, f64); 3] {
    match parameter {
        SoilParameter::Ph => [(6.5, 7.5), (6.0, 8.0), (5.5, 8.5)],
        SoilParameter::Organic => [(3.0, 5.0), (2.0, 6.0), (1.0, 7.0)],
        SoilParameter::Nitrogen => [(40.0, 60.0), (30.0, 70.0), (20.0, 80.0)],
        SoilParameter::Phosphorus => [(20.0, 30.0), (15.0, 35.0), (10.0, 40.0)],
        SoilParameter::Potassium => [(150.0, 200.0), (120.0, 220.0), (100.0, 250.0)],
    }
}

/// Classify one soil parameter reading into a qualitative band.
/// Total over the reals: negative or absurd values simply fall
/// through to poor, never an error.
pub fn classify(parameter: SoilParameter, value: f64) -> SoilBand {
    let [excellent, good, moderate] = ranges(parameter);
    if value >= excellent.0 && value <= excellent.1 {
        SoilBand::Excellent
    } else if value >= good.0 && value <= good.1 {
        SoilBand::Good
    } else if value >= moderate.0 && value <= moderate.1 {
        SoilBand::Moderate
    } else {
        SoilBand::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ph_bands_narrowest_first() {
        assert_eq!(classify(SoilParameter::Ph, 7.0), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Ph, 6.2), SoilBand::Good);
        assert_eq!(classify(SoilParameter::Ph, 5.7), SoilBand::Moderate);
        assert_eq!(classify(SoilParameter::Ph, 2.0), SoilBand::Poor);
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(classify(SoilParameter::Ph, 6.5), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Ph, 7.5), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Ph, 8.0), SoilBand::Good);
        assert_eq!(classify(SoilParameter::Ph, 8.5), SoilBand::Moderate);
        assert_eq!(classify(SoilParameter::Ph, 8.51), SoilBand::Poor);
    }

    #[test]
    fn sample_reading_bands() {
        // The shipped soil sample: 6.8 / 3.2% / 45 / 22 / 180.
        assert_eq!(classify(SoilParameter::Ph, 6.8), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Organic, 3.2), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Nitrogen, 45.0), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Phosphorus, 22.0), SoilBand::Excellent);
        assert_eq!(classify(SoilParameter::Potassium, 180.0), SoilBand::Excellent);
    }

    #[test]
    fn nutrient_bands_step_down_with_distance() {
        assert_eq!(classify(SoilParameter::Nitrogen, 35.0), SoilBand::Good);
        assert_eq!(classify(SoilParameter::Nitrogen, 25.0), SoilBand::Moderate);
        assert_eq!(classify(SoilParameter::Nitrogen, 10.0), SoilBand::Poor);
        assert_eq!(classify(SoilParameter::Potassium, 230.0), SoilBand::Moderate);
        assert_eq!(classify(SoilParameter::Phosphorus, 12.0), SoilBand::Moderate);
    }

    #[test]
    fn out_of_domain_values_are_poor_not_errors() {
        for parameter in SoilParameter::ALL {
            assert_eq!(classify(parameter, -5.0), SoilBand::Poor);
            assert_eq!(classify(parameter, 1.0e9), SoilBand::Poor);
            assert_eq!(classify(parameter, f64::NAN), SoilBand::Poor);
        }
    }
}
