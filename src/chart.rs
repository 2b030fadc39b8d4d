use crate::models::Summary;
use serde::Serialize;

pub const CHART_LABELS: [&str; 3] = ["Daily", "Weekly", "Monthly"];
pub const CHART_COLORS: [&str; 3] = ["#36a2eb", "#ffcd56", "#ff6384"];
pub const DATASET_LABEL: &str = "Productivity Entries";

/// Bar chart configuration in the shape Chart.js expects.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 3],
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: [u64; 3],
    pub background_color: [&'static str; 3],
}

impl ChartConfig {
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            kind: "bar",
            data: ChartData {
                labels: CHART_LABELS,
                datasets: vec![Dataset {
                    label: DATASET_LABEL,
                    data: [summary.daily, summary.weekly, summary.monthly],
                    background_color: CHART_COLORS,
                }],
            },
        }
    }
}
