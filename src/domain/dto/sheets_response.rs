//! Google Sheets API v4 요청/응답 DTO 모듈

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `values.append` 요청 본문
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesRequest {
    pub major_dimension: &'static str,
    pub values: Vec<Vec<Option<String>>>,
}

impl AppendValuesRequest {
    pub fn rows(values: Vec<Vec<Option<String>>>) -> Self {
        Self {
            major_dimension: "ROWS",
            values,
        }
    }
}

/// `values.append` 응답
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub table_range: Option<String>,
    #[serde(default)]
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: Option<i64>,
    #[serde(default)]
    pub updated_columns: Option<i64>,
    #[serde(default)]
    pub updated_cells: Option<i64>,
}

/// `values.get` 응답
///
/// 빈 범위를 조회하면 `values` 필드 자체가 생략됩니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}
