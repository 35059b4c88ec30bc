//! JSON contracts: chart data ingestion and engine snapshot export.
//!
//! A chart data document is an array of chart groups:
//!
//! ```json
//! [{
//!   "columns": [["x", 1542412800000, 1542499200000], ["y0", 37, 20]],
//!   "types": {"y0": "line", "x": "x"},
//!   "names": {"y0": "#0"},
//!   "colors": {"y0": "#3DC23F"}
//! }]
//! ```
//!
//! `x` values are unix milliseconds and are stored as unix seconds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{Column, MIN_SERIES_COLUMNS, Series};
use crate::error::{ChartError, ChartResult};

use super::EngineSnapshot;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const TIME_COLUMN_TYPE: &str = "x";
const MILLIS_PER_SECOND: i64 = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

#[derive(Debug, Deserialize)]
struct ChartGroupDocument {
    columns: Vec<Vec<Value>>,
    #[serde(default)]
    types: IndexMap<String, String>,
    names: IndexMap<String, String>,
    colors: IndexMap<String, String>,
}

/// Parses a chart data document into one series list per chart group.
///
/// Series of each group are ordered by name. Any malformed group fails the
/// whole document.
pub fn parse_chart_data(input: &str) -> ChartResult<Vec<Vec<Series>>> {
    let groups: Vec<ChartGroupDocument> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))?;

    let parsed = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            parse_group(group).map_err(|err| match err {
                ChartError::InvalidData(message) => {
                    ChartError::InvalidData(format!("chart group {index}: {message}"))
                }
                other => other,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    debug!(groups = parsed.len(), "parsed chart data document");
    Ok(parsed)
}

fn parse_group(group: ChartGroupDocument) -> ChartResult<Vec<Series>> {
    let table = column_table(&group.columns)?;
    let time_key = table
        .keys()
        .find(|key| {
            group
                .types
                .get(key.as_str())
                .map_or(key.as_str() == TIME_COLUMN_TYPE, |kind| kind == TIME_COLUMN_TYPE)
        })
        .cloned()
        .ok_or_else(|| ChartError::InvalidData("missing `x` time column".to_owned()))?;
    let times: Vec<i64> = table[&time_key]
        .iter()
        .map(|millis| millis / MILLIS_PER_SECOND)
        .collect();

    let mut series = Vec::with_capacity(group.names.len());
    for (key, name) in &group.names {
        if *key == time_key {
            continue;
        }
        let values = table
            .get(key)
            .ok_or_else(|| ChartError::InvalidData(format!("no column for series `{key}`")))?;
        let color = group
            .colors
            .get(key)
            .ok_or_else(|| ChartError::InvalidData(format!("no color for series `{key}`")))?;
        let columns = times
            .iter()
            .zip(values)
            .map(|(time, value)| Column::new(*time, *value))
            .collect();
        series.push(Series::new(name.clone(), color.clone(), columns)?);
    }
    series.sort_by(|left, right| left.name().cmp(right.name()));
    Ok(series)
}

/// Splits raw `[id, v1, v2, ...]` arrays into an id-keyed table, checking
/// that every column has the same number of integer samples.
fn column_table(columns: &[Vec<Value>]) -> ChartResult<IndexMap<String, Vec<i64>>> {
    let Some(first) = columns.first() else {
        return Err(ChartError::InvalidData("no columns".to_owned()));
    };
    let expected = first.len();
    if expected <= MIN_SERIES_COLUMNS {
        return Err(ChartError::InvalidData(format!(
            "columns need at least {MIN_SERIES_COLUMNS} samples, got {}",
            expected.saturating_sub(1)
        )));
    }

    let mut table = IndexMap::with_capacity(columns.len());
    for column in columns {
        if column.len() != expected {
            return Err(ChartError::InvalidData(format!(
                "column lengths differ: expected {expected}, got {}",
                column.len()
            )));
        }
        let Some(Value::String(key)) = column.first() else {
            return Err(ChartError::InvalidData(
                "column must start with a string id".to_owned(),
            ));
        };
        let samples = column[1..]
            .iter()
            .map(|value| {
                value.as_i64().ok_or_else(|| {
                    ChartError::InvalidData(format!("column `{key}` holds non-integer {value}"))
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        table.insert(key.clone(), samples);
    }
    Ok(table)
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
