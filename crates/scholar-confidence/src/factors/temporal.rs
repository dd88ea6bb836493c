use scholar_core::config::ConfidenceConfig;
use scholar_core::models::Document;

/// Recency factor.
///
/// 1.0 while `reference_year - year <= full_score_years`, then halves every
/// `half_life_years`. Unknown year scores `unknown_year_score`; years after
/// the reference year count as age 0.
pub fn recency(year: Option<i32>, reference_year: i32, config: &ConfidenceConfig) -> f64 {
    let Some(year) = year else {
        return config.unknown_year_score.clamp(0.0, 1.0);
    };
    let age = f64::from((reference_year - year).max(0));
    let full = f64::from(config.full_score_years);
    if age <= full {
        return 1.0;
    }
    0.5f64.powf((age - full) / config.half_life_years).clamp(0.0, 1.0)
}

/// Mean recency over `docs`.
pub fn calculate(docs: &[&Document], reference_year: i32, config: &ConfidenceConfig) -> f64 {
    super::mean(docs.iter().map(|d| recency(d.year, reference_year, config)))
}
