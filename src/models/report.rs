// src/models/report.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::question::TraitDomain;

/// Aggregated score for one trait domain.
///
/// `score` is the per-trait mean on the 1..5 scale rounded to two
/// decimals, or the sentinel 0 when no answered question maps to the
/// domain. Derived on demand by the scorer, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TraitResult {
    pub domain: TraitDomain,
    /// Display name of the domain.
    pub label: String,
    pub score: f64,
    /// `score * 20`, for progress-bar style rendering.
    pub percent: f64,
    pub description: String,
}

/// One bar of the summary chart.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Fixed value-axis range of the summary chart.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
}

/// The data a bar-chart renderer needs: category/value pairs plus the
/// fixed [0, 5] axis.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub value_axis: ValueAxis,
}

/// Full results payload returned once the session is completed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResultsResponse {
    pub results: Vec<TraitResult>,
    pub chart: ChartSeries,
}
