//! Per-company climate score records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::hazard::Hazard;
use super::query::RiskMetric;

/// Scalar climate score record for one company under one query.
///
/// The API leaves every field optional and additionally delivers dynamic
/// per-horizon fields (`score_2030`, `impact_2050`, ...) and suffixed
/// hazard variants (`heat_score`, ...). The dynamic fields are captured
/// in the flattened `extra` map; the accessors below resolve them.
///
/// Upstream treats an explicit `0` the same as an absent field, so every
/// accessor skips zero values when walking its fallback chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClimateScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcr_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvar_50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvar_95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvar_99: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_99: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildfire: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drought: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coastal: Option<f64>,

    /// Dynamic fields: `score_{year}`, `impact_{year}`, `{hazard}_score`
    /// and anything else the API adds.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Treat zero as an absent observation.
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl ClimateScore {
    /// Raw value of the requested metric field, if present.
    pub fn metric_value(&self, metric: RiskMetric) -> Option<f64> {
        match metric {
            RiskMetric::DcrScore => self.dcr_score,
            RiskMetric::ExpectedImpact => self.expected_impact,
            RiskMetric::Cvar50 => self.cvar_50,
            RiskMetric::Cvar95 => self.cvar_95,
            RiskMetric::Cvar99 => self.cvar_99,
            RiskMetric::Var50 => self.var_50,
            RiskMetric::Var95 => self.var_95,
            RiskMetric::Var99 => self.var_99,
        }
    }

    fn extra_f64(&self, key: &str) -> Option<f64> {
        self.extra.get(key).and_then(serde_json::Value::as_f64)
    }

    /// Selected metric with the full fallback chain:
    /// metric, then `cvar_95`, then `dcr_score`, then `expected_impact`.
    /// Returns `None` when no field in the chain carries a nonzero value.
    pub fn best_metric(&self, metric: RiskMetric) -> Option<f64> {
        nonzero(self.metric_value(metric))
            .or_else(|| nonzero(self.cvar_95))
            .or_else(|| nonzero(self.dcr_score))
            .or_else(|| nonzero(self.expected_impact))
    }

    /// Selected metric with the shorter risk-score chain used for hazard
    /// attribution: metric, then `cvar_95`, then `dcr_score`.
    pub fn best_risk_score(&self, metric: RiskMetric) -> Option<f64> {
        nonzero(self.metric_value(metric))
            .or_else(|| nonzero(self.cvar_95))
            .or_else(|| nonzero(self.dcr_score))
    }

    /// Direct hazard signal: the hazard's own field, else its `_score`
    /// suffixed variant. `None` when neither carries a nonzero value.
    pub fn hazard_signal(&self, hazard: Hazard) -> Option<f64> {
        let direct = match hazard {
            Hazard::Heat => self.heat,
            Hazard::Flood => self.flood,
            Hazard::Wildfire => self.wildfire,
            Hazard::Wind => self.wind,
            Hazard::Drought => self.drought,
            Hazard::Coastal => self.coastal,
        };
        nonzero(direct).or_else(|| nonzero(self.extra_f64(&format!("{}_score", hazard.key()))))
    }

    /// Score projected at a horizon year: `score_{year}`, else `dcr_score`.
    pub fn horizon_score(&self, year: u16) -> Option<f64> {
        nonzero(self.extra_f64(&format!("score_{}", year))).or_else(|| nonzero(self.dcr_score))
    }

    /// Impact projected at a horizon year: `impact_{year}`, else
    /// `expected_impact`.
    pub fn horizon_impact(&self, year: u16) -> Option<f64> {
        nonzero(self.extra_f64(&format!("impact_{}", year)))
            .or_else(|| nonzero(self.expected_impact))
    }
}
