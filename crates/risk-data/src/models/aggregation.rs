//! Grouped score aggregation results.

use serde::{Deserialize, Serialize};

/// Asset-level score aggregation for one company, grouped by the
/// requested dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreAggregation {
    #[serde(default)]
    pub results: Vec<GroupedScore>,
}

impl ScoreAggregation {
    /// The first grouped entry, used when a single representative score
    /// per company is wanted.
    pub fn first(&self) -> Option<&GroupedScore> {
        self.results.first()
    }
}

/// One grouped entry of a [`ScoreAggregation`].
///
/// Carries the group key for whichever dimension was requested plus the
/// score fields the API populates for that grouping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupedScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcr_score: Option<f64>,
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl GroupedScore {
    /// Representative score: `score`, else `avg_score`, else `dcr_score`.
    /// Zero values are treated as absent, matching the upstream contract.
    pub fn primary_score(&self) -> Option<f64> {
        nonzero(self.score)
            .or_else(|| nonzero(self.avg_score))
            .or_else(|| nonzero(self.dcr_score))
    }

    /// Geography label: `country`, else `country_code`, else "Unknown".
    pub fn region_label(&self) -> &str {
        nonempty(self.country.as_deref())
            .or_else(|| nonempty(self.country_code.as_deref()))
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_score_priority() {
        let grouped = GroupedScore {
            score: Some(0.5),
            avg_score: Some(0.3),
            dcr_score: Some(0.1),
            ..Default::default()
        };
        assert_eq!(grouped.primary_score(), Some(0.5));

        let grouped = GroupedScore {
            avg_score: Some(0.3),
            dcr_score: Some(0.1),
            ..Default::default()
        };
        assert_eq!(grouped.primary_score(), Some(0.3));

        let grouped = GroupedScore {
            dcr_score: Some(0.1),
            ..Default::default()
        };
        assert_eq!(grouped.primary_score(), Some(0.1));
    }

    #[test]
    fn test_primary_score_skips_zeros() {
        let grouped = GroupedScore {
            score: Some(0.0),
            avg_score: Some(0.3),
            ..Default::default()
        };
        assert_eq!(grouped.primary_score(), Some(0.3));

        let grouped = GroupedScore {
            score: Some(0.0),
            ..Default::default()
        };
        assert_eq!(grouped.primary_score(), None);
    }

    #[test]
    fn test_region_label_fallbacks() {
        let grouped = GroupedScore {
            country: Some("Canada".to_string()),
            country_code: Some("CA".to_string()),
            ..Default::default()
        };
        assert_eq!(grouped.region_label(), "Canada");

        let grouped = GroupedScore {
            country: Some(String::new()),
            country_code: Some("CA".to_string()),
            ..Default::default()
        };
        assert_eq!(grouped.region_label(), "CA");

        let grouped = GroupedScore::default();
        assert_eq!(grouped.region_label(), "Unknown");
    }

    #[test]
    fn test_aggregation_first() {
        let aggregation: ScoreAggregation = serde_json::from_str(
            r#"{"results":[{"asset_type":"office","score":0.4},{"asset_type":"plant"}]}"#,
        )
        .unwrap();
        assert_eq!(aggregation.first().unwrap().asset_type.as_deref(), Some("office"));

        let empty = ScoreAggregation::default();
        assert!(empty.first().is_none());
    }
}
