use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::entities::report::{CashBlock, Performance, ReportHeader, ReportState};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not a valid report record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persisted form of the report. Field names and the positional row layout
/// are a stable contract with previously saved data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    #[serde(default)]
    pub header: Option<HeaderRecord>,
    #[serde(default)]
    pub overview: Option<Vec<RowRecord>>,
    #[serde(default)]
    pub holdings: Option<Vec<RowRecord>>,
    #[serde(default)]
    pub performance: Option<PerformanceRecord>,
    #[serde(default)]
    pub cash: Option<CashRecord>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderRecord {
    #[serde(default, deserialize_with = "raw_text")]
    pub fund_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    pub report_period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    #[serde(default, deserialize_with = "raw_columns")]
    pub cols: Vec<Option<String>>,
}

impl RowRecord {
    fn column(&self, idx: usize, fallback: &str) -> String {
        self.cols
            .get(idx)
            .cloned()
            .flatten()
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    #[serde(default, deserialize_with = "raw_text")]
    pub monthly_return: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRecord {
    #[serde(default, deserialize_with = "raw_text")]
    pub start_balance: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    pub deposits: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    pub withdrawals: Option<String>,
}

/// Accepts a string, a number or a boolean and keeps its textual form.
/// `null` reads as missing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
            RawValue::Flag(flag) => flag.to_string(),
        }
    }
}

fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(value.map(String::from))
}

fn raw_columns<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<RawValue>>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(|value| value.map(String::from))
        .collect())
}

impl SnapshotRecord {
    pub fn capture(state: &ReportState, timestamp: String) -> Self {
        Self {
            header: Some(HeaderRecord {
                fund_name: Some(state.header.fund_name.clone()),
                account_number: Some(state.header.account_number.clone()),
                report_period: Some(state.header.report_period.clone()),
            }),
            overview: Some(
                state
                    .overview
                    .iter()
                    .map(|row| RowRecord {
                        cols: vec![
                            Some(row.asset_type.clone()),
                            Some(row.market_value.clone()),
                        ],
                    })
                    .collect(),
            ),
            holdings: Some(
                state
                    .holdings
                    .iter()
                    .map(|row| RowRecord {
                        cols: vec![
                            Some(row.symbol.clone()),
                            Some(row.name.clone()),
                            Some(row.quantity.clone()),
                            Some(row.unit_price.clone()),
                        ],
                    })
                    .collect(),
            ),
            performance: Some(PerformanceRecord {
                monthly_return: Some(state.performance.monthly_return.clone()),
            }),
            cash: Some(CashRecord {
                start_balance: Some(state.cash.start_balance.clone()),
                deposits: Some(state.cash.deposits.clone()),
                withdrawals: Some(state.cash.withdrawals.clone()),
            }),
            timestamp: Some(timestamp),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds a fresh state by replaying row appends in saved order. Missing
    /// text fields become empty, missing numeric fields become `0`.
    pub fn restore(self) -> ReportState {
        let mut state = ReportState::new();

        let header = self.header.unwrap_or_default();
        state.header = ReportHeader {
            fund_name: header.fund_name.unwrap_or_default(),
            account_number: header.account_number.unwrap_or_default(),
            report_period: header.report_period.unwrap_or_default(),
        };

        for row in self.overview.unwrap_or_default() {
            state.append_overview_row(row.column(0, ""), row.column(1, "0"));
        }
        for row in self.holdings.unwrap_or_default() {
            state.append_holding_row(
                row.column(0, ""),
                row.column(1, ""),
                row.column(2, "0"),
                row.column(3, "0"),
            );
        }

        let performance = self.performance.unwrap_or_default();
        state.performance = Performance {
            monthly_return: performance.monthly_return.unwrap_or_else(zero),
        };

        let cash = self.cash.unwrap_or_default();
        state.cash = CashBlock {
            start_balance: cash.start_balance.unwrap_or_else(zero),
            deposits: cash.deposits.unwrap_or_else(zero),
            withdrawals: cash.withdrawals.unwrap_or_else(zero),
        };

        state.timestamp = self.timestamp;
        state
    }
}

fn zero() -> String {
    "0".to_string()
}
