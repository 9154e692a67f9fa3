//! 스프레드시트 대상 및 기록 결과 모델

use crate::config::RelayConfig;

/// 모든 기록이 향하는 고정 대상 (스프레드시트 ID + 범위)
///
/// 서버 시작 시 한 번 결정되며 요청마다 달라지지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetTarget {
    pub spreadsheet_id: String,
    pub range: String,
}

impl SpreadsheetTarget {
    pub fn new(spreadsheet_id: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
        }
    }

    /// 설정(`SPREADSHEET_ID`, `SHEET_RANGE`)에서 대상을 만듭니다.
    pub fn from_config() -> Self {
        Self::new(RelayConfig::spreadsheet_id(), RelayConfig::sheet_range())
    }

    /// 같은 스프레드시트의 다른 범위
    pub fn with_range(&self, range: impl Into<String>) -> Self {
        Self::new(self.spreadsheet_id.clone(), range)
    }
}

impl Default for SpreadsheetTarget {
    fn default() -> Self {
        Self::new(RelayConfig::DEFAULT_SPREADSHEET_ID, RelayConfig::DEFAULT_RANGE)
    }
}

/// Sheets API `valueInputOption`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// 입력값을 파싱하지 않고 그대로 저장
    Raw,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
        }
    }
}

/// `values.append` 결과 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub updated_cells: i64,
    pub updated_range: String,
}
