//! Green-score grading and rule-based recommendations.
//!
//! Scoring is a linear penalty model clamped at both ends: each
//! category earns `(1 - actual/(benchmark × spread)) × 100`, and the
//! overall score is the weighted sum. Recommendations come from a
//! fixed ordered rule list; rule order is the tie-break, the list is
//! never re-sorted.

use super::models::{EmissionsBreakdown, Impact, Recommendation, ScoreResult, Source};
use super::non_neg;
use crate::engine::factors::{CategoryTable, ScoringConfig};

/// Grade a breakdown against fixed US benchmarks.
///
/// Total over any breakdown: out-of-range or missing fields read as 0
/// and score accordingly (below-benchmark emissions are rewarded).
pub fn score(breakdown: &EmissionsBreakdown, config: &ScoringConfig) -> ScoreResult {
    let scores = category_scores(breakdown, config);
    let weights = &config.weights;
    let weighted = scores.transport * weights.transport
        + scores.energy * weights.energy
        + scores.flight * weights.flight
        + scores.diet * weights.diet
        + scores.lifestyle * weights.lifestyle;
    let score = weighted.round().clamp(0.0, 100.0) as u8;

    let total_kg = non_neg(breakdown.total_kg);
    let weekly_avg = config.weekly_average();

    let (summary, compared_to_average) = if total_kg < weekly_avg {
        let pct = (((weekly_avg - total_kg) / weekly_avg) * 100.0).round();
        (
            format!(
                "Your weekly footprint of {} kg CO₂ is below the US average of ~{} kg — great work!",
                total_kg, weekly_avg
            ),
            format!("{}% below US average", pct),
        )
    } else {
        let pct = (((total_kg - weekly_avg) / weekly_avg) * 100.0).round();
        (
            format!(
                "Your weekly footprint of {} kg CO₂ is above the US average of ~{} kg. Small changes can make a big difference.",
                total_kg, weekly_avg
            ),
            format!("{}% above US average", pct),
        )
    };

    ScoreResult {
        score,
        summary,
        recommendations: recommendations(breakdown),
        weekly_target: (total_kg * 0.85).round(),
        compared_to_average,
        source: Source::Offline,
    }
}

/// Per-category 0-100 scores, before weighting.
fn category_scores(breakdown: &EmissionsBreakdown, config: &ScoringConfig) -> CategoryTable {
    let clamp = |actual: f64, benchmark: f64, spread: f64| {
        ((1.0 - non_neg(actual) / (benchmark * spread)) * 100.0)
            .round()
            .clamp(0.0, 100.0)
    };
    let b = &config.benchmarks;
    let s = &config.spreads;
    CategoryTable {
        transport: clamp(breakdown.transport_kg, b.transport, s.transport),
        energy: clamp(breakdown.energy_kg, b.energy, s.energy),
        flight: clamp(breakdown.flight_kg, b.flight, s.flight),
        diet: clamp(breakdown.diet_kg, b.diet, s.diet),
        lifestyle: clamp(breakdown.lifestyle_kg, b.lifestyle, s.lifestyle),
    }
}

fn rec(title: &str, description: &str, impact: Impact, savings_kg: f64) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        impact,
        savings_kg,
    }
}

/// Evaluate the fixed rule list in category order and truncate to 5.
///
/// The catch-all tracking suggestion is always appended last, so it
/// survives only when fewer than 5 threshold rules fire.
fn recommendations(breakdown: &EmissionsBreakdown) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let transport_kg = non_neg(breakdown.transport_kg);
    if transport_kg > 25.0 {
        recs.push(rec(
            "Reduce driving",
            "Consider carpooling, biking, or public transit for short trips to cut transport emissions significantly.",
            Impact::High,
            (transport_kg * 0.3).round(),
        ));
    } else if transport_kg > 0.0 {
        recs.push(rec(
            "Keep up efficient transport",
            "Your driving footprint is low — maintaining this or switching to an EV could reduce it further.",
            Impact::Low,
            (transport_kg * 0.15).round(),
        ));
    }

    let energy_kg = non_neg(breakdown.energy_kg);
    if energy_kg > 40.0 {
        recs.push(rec(
            "Optimize energy use",
            "Switch to LED bulbs, unplug idle devices, and set your thermostat 2°F lower to save energy and emissions.",
            Impact::Medium,
            (energy_kg * 0.15).round(),
        ));
    }

    let flight_kg = non_neg(breakdown.flight_kg);
    if flight_kg > 0.0 {
        recs.push(rec(
            "Offset your flights",
            "Purchase verified carbon offsets or consider train travel for distances under 500 miles.",
            Impact::High,
            (flight_kg * 0.5).round(),
        ));
    }

    let diet_kg = non_neg(breakdown.diet_kg);
    if diet_kg > 35.0 {
        recs.push(rec(
            "Try plant-forward meals",
            "Replacing 3 meat meals per week with plant-based options can cut dietary emissions by 25%.",
            Impact::Medium,
            (diet_kg * 0.25).round(),
        ));
    }

    let lifestyle_kg = non_neg(breakdown.lifestyle_kg);
    if lifestyle_kg > 15.0 {
        recs.push(rec(
            "Shop more consciously",
            "Buy second-hand, reduce impulse purchases, and consolidate online orders to cut shipping emissions.",
            Impact::Medium,
            (lifestyle_kg * 0.3).round(),
        ));
    }

    recs.push(rec(
        "Track consistently",
        "Logging your activity weekly helps identify patterns and keeps you accountable for reduction goals.",
        Impact::Low,
        0.0,
    ));

    recs.truncate(5);
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::estimator::estimate;
    use crate::engine::factors::EmissionFactors;
    use crate::engine::models::ActivityInput;
    use crate::engine::round2;

    fn breakdown(transport: f64, energy: f64, flight: f64, diet: f64, lifestyle: f64) -> EmissionsBreakdown {
        EmissionsBreakdown {
            transport_kg: transport,
            energy_kg: energy,
            flight_kg: flight,
            diet_kg: diet,
            lifestyle_kg: lifestyle,
            total_kg: round2(transport + energy + flight + diet + lifestyle),
            trees_equivalent: 0,
            source: Source::Offline,
        }
    }

    #[test]
    fn test_zero_breakdown_scores_perfect() {
        let result = score(&breakdown(0.0, 0.0, 0.0, 0.0, 0.0), &ScoringConfig::default());
        assert_eq!(result.score, 100);
        assert_eq!(result.weekly_target, 0.0);
    }

    #[test]
    fn test_extreme_breakdown_clamps_to_zero() {
        let result = score(
            &breakdown(1e12, 1e12, 1e12, 1e12, 1e12),
            &ScoringConfig::default(),
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_negative_fields_score_as_zero_emissions() {
        let result = score(
            &breakdown(-10.0, -5.0, -1.0, -2.0, -3.0),
            &ScoringConfig::default(),
        );
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_demo_scenario_score() {
        let input = ActivityInput {
            car_miles: 100.0,
            electricity_kwh: 90.0,
            gas_therms: 3.0,
            streaming_hours: 10.0,
            ..ActivityInput::default()
        };
        let estimated = estimate(&input, &EmissionFactors::default());
        let result = score(&estimated, &ScoringConfig::default());
        // transport 74, energy 54, flight 100, diet 50, lifestyle 63
        // weighted: 18.5 + 13.5 + 15 + 10 + 9.45 = 66.45
        assert_eq!(result.score, 66);
        assert_eq!(result.weekly_target, 118.0);
        assert_eq!(result.compared_to_average, "28% below US average");
        assert!(result.summary.contains("below the US average"));
    }

    #[test]
    fn test_recommendation_order_and_truncation() {
        // Every threshold rule fires, so the catch-all is cut.
        let result = score(
            &breakdown(100.0, 100.0, 500.0, 60.0, 40.0),
            &ScoringConfig::default(),
        );
        let titles: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Reduce driving",
                "Optimize energy use",
                "Offset your flights",
                "Try plant-forward meals",
                "Shop more consciously",
            ]
        );
    }

    #[test]
    fn test_catch_all_present_when_few_rules_fire() {
        let result = score(&breakdown(0.0, 0.0, 0.0, 0.0, 0.0), &ScoringConfig::default());
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].title, "Track consistently");
        assert_eq!(result.recommendations[0].savings_kg, 0.0);
    }

    #[test]
    fn test_flight_rule_never_fires_without_flights() {
        let result = score(
            &breakdown(40.0, 50.0, 0.0, 39.41, 8.86),
            &ScoringConfig::default(),
        );
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.title != "Offset your flights"));
    }

    #[test]
    fn test_low_transport_gets_low_impact_variant() {
        let result = score(
            &breakdown(10.0, 0.0, 0.0, 0.0, 0.0),
            &ScoringConfig::default(),
        );
        let first = &result.recommendations[0];
        assert_eq!(first.title, "Keep up efficient transport");
        assert_eq!(first.impact, Impact::Low);
        assert_eq!(first.savings_kg, 2.0);
    }

    #[test]
    fn test_savings_are_rounded_fractions_of_category() {
        let result = score(
            &breakdown(40.4, 50.67, 0.0, 39.41, 8.86),
            &ScoringConfig::default(),
        );
        let by_title = |title: &str| {
            result
                .recommendations
                .iter()
                .find(|r| r.title == title)
                .unwrap()
                .savings_kg
        };
        assert_eq!(by_title("Reduce driving"), 12.0);
        assert_eq!(by_title("Optimize energy use"), 8.0);
        assert_eq!(by_title("Try plant-forward meals"), 10.0);
    }

    #[test]
    fn test_above_average_phrasing() {
        let result = score(
            &breakdown(200.0, 100.0, 50.0, 50.0, 20.0),
            &ScoringConfig::default(),
        );
        assert!(result.summary.contains("above the US average"));
        assert!(result.compared_to_average.ends_with("above US average"));
    }

    #[test]
    fn test_idempotent() {
        let b = breakdown(40.4, 50.67, 244.0, 39.41, 8.86);
        let config = ScoringConfig::default();
        assert_eq!(score(&b, &config), score(&b, &config));
    }
}
