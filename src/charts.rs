use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u64>,
}

/// A single-dataset chart ready to hand to Chart.js.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset: ChartDataset,
}

impl ChartSpec {
    pub fn bar(label: impl Into<String>, labels: Vec<String>, data: Vec<u64>) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            dataset: ChartDataset {
                label: label.into(),
                data,
            },
        }
    }

    pub fn pie<'a>(label: impl Into<String>, slices: impl IntoIterator<Item = (&'a String, &'a u64)>) -> Self {
        let (labels, data) = slices
            .into_iter()
            .map(|(category, count)| (category.clone(), *count))
            .unzip();
        Self {
            kind: ChartKind::Pie,
            labels,
            dataset: ChartDataset {
                label: label.into(),
                data,
            },
        }
    }

    pub fn to_chartjs_config(&self) -> Value {
        json!({
            "type": self.kind,
            "data": {
                "labels": self.labels,
                "datasets": [self.dataset],
            },
        })
    }
}
