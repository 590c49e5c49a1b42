//! Tests for the pure aggregation engine.

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::portfolio::aggregation::{
        aggregate_by_geography, aggregate_by_hazard, aggregate_by_horizon, aggregate_by_sector,
        summarize, Diversification, RiskLevel,
    };
    use crate::portfolio::companies::PortfolioCompany;
    use climatefolio_risk_data::{
        ClimateScore, CompanyScoreAggregation, CompanyScores, GroupedScore, Hazard,
        RiskDataError, ScoreAggregation,
    };

    fn holding(id: &str, sector: Option<&str>, weight: Decimal) -> PortfolioCompany {
        PortfolioCompany {
            id: id.to_string(),
            name: id.to_uppercase(),
            sector: sector.map(str::to_string),
            weight,
            ..Default::default()
        }
    }

    fn grouped(entries: Vec<GroupedScore>) -> ScoreAggregation {
        ScoreAggregation { results: entries }
    }

    fn entry(country: Option<&str>, score: Option<f64>) -> GroupedScore {
        GroupedScore {
            country: country.map(str::to_string),
            score,
            ..Default::default()
        }
    }

    fn agg_ok(company_id: &str, data: ScoreAggregation) -> CompanyScoreAggregation {
        CompanyScoreAggregation {
            company_id: company_id.to_string(),
            result: Ok(data),
        }
    }

    fn agg_err(company_id: &str) -> CompanyScoreAggregation {
        CompanyScoreAggregation {
            company_id: company_id.to_string(),
            result: Err(RiskDataError::Provider {
                provider: "DCR_API".to_string(),
                message: "boom".to_string(),
            }),
        }
    }

    fn scores_ok(company_id: &str, data: ClimateScore) -> CompanyScores {
        CompanyScores {
            company_id: company_id.to_string(),
            result: Ok(data),
        }
    }

    fn scores_err(company_id: &str) -> CompanyScores {
        CompanyScores {
            company_id: company_id.to_string(),
            result: Err(RiskDataError::Timeout {
                provider: "DCR_API".to_string(),
            }),
        }
    }

    // ==================== Sector ====================

    #[test]
    fn test_sector_worked_scenario() {
        let companies = vec![
            holding("a", Some("Tech"), dec!(60)),
            holding("b", Some("Energy"), dec!(40)),
        ];
        let results = vec![
            agg_ok("a", grouped(vec![entry(None, Some(0.5))])),
            agg_ok("b", grouped(vec![entry(None, Some(0.2))])),
        ];

        let buckets = aggregate_by_sector(&companies, &results);
        assert_eq!(buckets.len(), 2);

        let tech = &buckets[0];
        assert_eq!(tech.sector, "Tech");
        assert_eq!(tech.total_weight, dec!(60));
        assert_eq!(tech.avg_score, Some(0.5));
        assert_eq!(tech.companies, 1);
        assert_eq!(tech.risk_level, RiskLevel::Medium);
        assert!((tech.weighted_contribution - 30.0 / 38.0).abs() < 1e-9);

        let energy = &buckets[1];
        assert_eq!(energy.sector, "Energy");
        assert!((energy.weighted_contribution - 8.0 / 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_sector_missing_sector_lands_in_unknown() {
        let companies = vec![
            holding("a", None, dec!(50)),
            holding("b", Some(""), dec!(50)),
        ];
        let buckets = aggregate_by_sector(&companies, &[]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].sector, "Unknown");
        assert_eq!(buckets[0].companies, 2);
        assert_eq!(buckets[0].total_weight, dec!(100));
    }

    #[test]
    fn test_sector_without_scores_is_unknown_level() {
        let companies = vec![holding("a", Some("Tech"), dec!(100))];
        let buckets = aggregate_by_sector(&companies, &[]);
        assert_eq!(buckets[0].avg_score, None);
        assert_eq!(buckets[0].risk_level, RiskLevel::Unknown);
        assert_eq!(buckets[0].weighted_contribution, 0.0);
    }

    #[test]
    fn test_sector_failed_company_keeps_weight_contributes_no_risk() {
        let companies = vec![
            holding("a", Some("Tech"), dec!(60)),
            holding("b", Some("Energy"), dec!(40)),
        ];
        let results = vec![
            agg_ok("a", grouped(vec![entry(None, Some(0.5))])),
            agg_err("b"),
        ];

        let buckets = aggregate_by_sector(&companies, &results);
        let energy = buckets.iter().find(|b| b.sector == "Energy").unwrap();
        assert_eq!(energy.total_weight, dec!(40));
        assert_eq!(energy.avg_score, None);
        assert_eq!(energy.risk_level, RiskLevel::Unknown);
        assert_eq!(energy.weighted_contribution, 0.0);

        let tech = buckets.iter().find(|b| b.sector == "Tech").unwrap();
        assert!((tech.weighted_contribution - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sector_takes_max_score_and_first_entry_only() {
        let companies = vec![
            holding("a", Some("Tech"), dec!(50)),
            holding("b", Some("Tech"), dec!(50)),
        ];
        let results = vec![
            // Second entry is ignored; only the first grouped row counts.
            agg_ok(
                "a",
                grouped(vec![entry(None, Some(0.3)), entry(None, Some(0.9))]),
            ),
            agg_ok("b", grouped(vec![entry(None, Some(0.7))])),
        ];

        let buckets = aggregate_by_sector(&companies, &results);
        assert_eq!(buckets[0].avg_score, Some(0.7));
        assert_eq!(buckets[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn test_sector_sorted_by_weight_descending() {
        let companies = vec![
            holding("a", Some("Energy"), dec!(20)),
            holding("b", Some("Tech"), dec!(50)),
            holding("c", Some("Utilities"), dec!(30)),
        ];
        let buckets = aggregate_by_sector(&companies, &[]);
        let order: Vec<&str> = buckets.iter().map(|b| b.sector.as_str()).collect();
        assert_eq!(order, vec!["Tech", "Utilities", "Energy"]);
    }

    // ==================== Geography ====================

    #[test]
    fn test_geography_company_weight_counts_in_every_country() {
        let companies = vec![holding("a", None, dec!(60))];
        let results = vec![agg_ok(
            "a",
            grouped(vec![
                entry(Some("Canada"), Some(0.4)),
                entry(Some("United States"), Some(0.6)),
            ]),
        )];

        let buckets = aggregate_by_geography(&companies, &results);
        assert_eq!(buckets.len(), 2);
        for bucket in &buckets {
            assert_eq!(bucket.total_weight, dec!(60));
            assert_eq!(bucket.companies, 1);
        }
        let us = buckets
            .iter()
            .find(|b| b.country == "United States")
            .unwrap();
        assert_eq!(us.avg_score, Some(0.6));
    }

    #[test]
    fn test_geography_without_results_is_empty() {
        let companies = vec![holding("a", None, dec!(100))];
        assert!(aggregate_by_geography(&companies, &[agg_err("a")]).is_empty());
        assert!(aggregate_by_geography(&companies, &[]).is_empty());
    }

    #[test]
    fn test_geography_blank_region_falls_back_to_unknown() {
        let companies = vec![holding("a", None, dec!(100))];
        let results = vec![agg_ok(
            "a",
            grouped(vec![GroupedScore {
                country: Some(String::new()),
                country_code: None,
                score: Some(0.5),
                ..Default::default()
            }]),
        )];

        let buckets = aggregate_by_geography(&companies, &results);
        assert_eq!(buckets[0].country, "Unknown");
    }

    #[test]
    fn test_geography_contributions_share_weighted_risk() {
        let companies = vec![
            holding("a", None, dec!(50)),
            holding("b", None, dec!(50)),
        ];
        let results = vec![
            agg_ok("a", grouped(vec![entry(Some("Canada"), Some(0.4))])),
            agg_ok("b", grouped(vec![entry(Some("Germany"), Some(0.4))])),
        ];

        let buckets = aggregate_by_geography(&companies, &results);
        let total: f64 = buckets.iter().map(|b| b.weighted_contribution).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((buckets[0].weighted_contribution - 0.5).abs() < 1e-9);
    }

    // ==================== Hazard ====================

    fn hazard_record(fields: &[(&str, f64)]) -> ClimateScore {
        let mut record = ClimateScore::default();
        for (name, value) in fields {
            match *name {
                "heat" => record.heat = Some(*value),
                "flood" => record.flood = Some(*value),
                "wildfire" => record.wildfire = Some(*value),
                "wind" => record.wind = Some(*value),
                "drought" => record.drought = Some(*value),
                "coastal" => record.coastal = Some(*value),
                other => {
                    record
                        .extra
                        .insert(other.to_string(), json!(*value));
                }
            }
        }
        record
    }

    #[test]
    fn test_hazard_gates_on_positive_signal() {
        let companies = vec![holding("a", None, dec!(100))];
        let results = vec![scores_ok(
            "a",
            hazard_record(&[("heat", 0.7), ("flood", 0.0), ("wind", -0.2)]),
        )];

        let buckets = aggregate_by_hazard(&companies, &results);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hazard, Hazard::Heat);
        assert!((buckets[0].portfolio_exposure - 1.0).abs() < 1e-9);
        assert_eq!(buckets[0].avg_risk_score, 0.7);
        assert_eq!(buckets[0].companies, 1);
        assert_eq!(buckets[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn test_hazard_reads_suffixed_signal_fields() {
        let companies = vec![holding("a", None, dec!(50))];
        let results = vec![scores_ok("a", hazard_record(&[("flood_score", 0.4)]))];

        let buckets = aggregate_by_hazard(&companies, &results);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hazard, Hazard::Flood);
        assert!((buckets[0].portfolio_exposure - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hazard_values_sum_to_one() {
        let companies = vec![
            holding("a", None, dec!(60)),
            holding("b", None, dec!(40)),
        ];
        let results = vec![
            scores_ok("a", hazard_record(&[("heat", 0.5), ("flood", 0.3)])),
            scores_ok("b", hazard_record(&[("heat", 0.2), ("drought", 0.6)])),
        ];

        let buckets = aggregate_by_hazard(&companies, &results);
        assert_eq!(buckets.len(), 3);
        let total: f64 = buckets.iter().map(|b| b.value).sum();
        assert!((total - 1.0).abs() < 1e-9);
        // Taxonomy order is preserved in the output.
        let order: Vec<Hazard> = buckets.iter().map(|b| b.hazard).collect();
        assert_eq!(order, vec![Hazard::Heat, Hazard::Flood, Hazard::Drought]);
    }

    #[test]
    fn test_hazard_zero_weight_company_bucket_is_dropped() {
        let companies = vec![
            holding("a", None, dec!(0)),
            holding("b", None, dec!(100)),
        ];
        let results = vec![
            scores_ok("a", hazard_record(&[("coastal", 0.9)])),
            scores_ok("b", hazard_record(&[("heat", 0.5)])),
        ];

        let buckets = aggregate_by_hazard(&companies, &results);
        // Coastal exposure is 0, so its share is 0 and it is filtered.
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hazard, Hazard::Heat);
    }

    #[test]
    fn test_hazard_failed_company_contributes_nothing() {
        let companies = vec![holding("a", None, dec!(100))];
        assert!(aggregate_by_hazard(&companies, &[scores_err("a")]).is_empty());
    }

    // ==================== Horizon ====================

    #[test]
    fn test_horizon_covers_full_list_when_data_present() {
        let companies = vec![holding("a", None, dec!(100))];
        let mut record = ClimateScore {
            dcr_score: Some(0.4),
            ..Default::default()
        };
        record.extra.insert("score_2050".to_string(), json!(0.8));

        let buckets = aggregate_by_horizon(&companies, &[scores_ok("a", record)]);
        assert_eq!(buckets.len(), 9);
        assert_eq!(buckets[0].horizon, 2025);
        assert_eq!(buckets[8].horizon, 2100);

        let y2050 = buckets.iter().find(|b| b.horizon == 2050).unwrap();
        assert!((y2050.score - 0.8).abs() < 1e-9);
        let y2030 = buckets.iter().find(|b| b.horizon == 2030).unwrap();
        assert!((y2030.score - 0.4).abs() < 1e-9);
        assert_eq!(y2030.weight, dec!(100));
    }

    #[test]
    fn test_horizon_weights_scores_by_portfolio_share() {
        let companies = vec![
            holding("a", None, dec!(60)),
            holding("b", None, dec!(40)),
        ];
        let record_a = ClimateScore {
            dcr_score: Some(0.5),
            ..Default::default()
        };
        let record_b = ClimateScore {
            dcr_score: Some(0.2),
            ..Default::default()
        };

        let buckets = aggregate_by_horizon(
            &companies,
            &[scores_ok("a", record_a), scores_ok("b", record_b)],
        );
        // 0.5 × 0.6 + 0.2 × 0.4 = 0.38 for every year.
        for bucket in &buckets {
            assert!((bucket.score - 0.38).abs() < 1e-9);
        }
        let total: f64 = buckets.iter().map(|b| b.weighted_contribution).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_horizon_empty_without_data() {
        let companies = vec![holding("a", None, dec!(100))];
        assert!(aggregate_by_horizon(&companies, &[scores_err("a")]).is_empty());
        assert!(aggregate_by_horizon(&companies, &[]).is_empty());
    }

    #[test]
    fn test_horizon_missing_fields_count_as_zero_but_cover_year() {
        let companies = vec![holding("a", None, dec!(100))];
        let buckets = aggregate_by_horizon(&companies, &[scores_ok("a", ClimateScore::default())]);
        assert_eq!(buckets.len(), 9);
        for bucket in &buckets {
            assert_eq!(bucket.score, 0.0);
            assert_eq!(bucket.weighted_contribution, 0.0);
        }
    }

    // ==================== Summary ====================

    #[test]
    fn test_summarize_weight_averages_sector_scores() {
        let companies = vec![
            holding("a", Some("Tech"), dec!(60)),
            holding("b", Some("Energy"), dec!(40)),
        ];
        let results = vec![
            agg_ok("a", grouped(vec![entry(None, Some(0.8))])),
            agg_ok("b", grouped(vec![entry(None, Some(0.2))])),
        ];
        let buckets = aggregate_by_sector(&companies, &results);

        let summary = summarize(&companies, &buckets);
        assert_eq!(summary.total_companies, 2);
        assert_eq!(summary.total_weight, dec!(100));
        assert!((summary.avg_risk_score - (0.8 * 60.0 + 0.2 * 40.0) / 100.0).abs() < 1e-9);
        assert_eq!(summary.high_risk_sectors, 1);
        assert_eq!(summary.diversification, Diversification::Low);
    }

    #[test]
    fn test_summarize_empty_portfolio() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_companies, 0);
        assert_eq!(summary.avg_risk_score, 0.0);
        assert_eq!(summary.high_risk_sectors, 0);
        assert_eq!(summary.diversification, Diversification::Low);
    }

    #[test]
    fn test_diversification_bands() {
        assert_eq!(Diversification::from_company_count(11), Diversification::Good);
        assert_eq!(
            Diversification::from_company_count(6),
            Diversification::Moderate
        );
        assert_eq!(Diversification::from_company_count(5), Diversification::Low);
    }
}
