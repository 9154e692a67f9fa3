//! 폼 제출 레코드 모델

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::errors::errors::{AppError, AppResult};

/// 폼 제출 레코드
///
/// 다섯 개의 선택적 문자열 필드가 순서대로 시트의 한 행에 매핑됩니다.
/// 필드 존재 여부나 형식은 검증하지 않습니다. 숫자/불리언 값은 문자열로 바꾸고,
/// `null`이거나 없는 필드는 빈 셀이 됩니다. 정의되지 않은 필드는 무시합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub more_inf: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl SubmissionRecord {
    /// HTTP 요청 본문을 제출 레코드로 파싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문이 비어 있거나 `null`, JSON 형식 오류,
    ///   또는 최상위 값이 객체가 아닌 경우
    ///
    /// 빈 객체 `{}`는 허용되며 모든 셀이 비어 있는 행이 됩니다.
    pub fn from_json_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::ValidationError("No data provided".to_string()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::ValidationError(format!("Malformed JSON body: {}", e)))?;

        match value {
            Value::Null => Err(AppError::ValidationError("No data provided".to_string())),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| AppError::ValidationError(format!("Invalid submission: {}", e))),
            _ => Err(AppError::ValidationError(
                "Submission body must be a JSON object".to_string(),
            )),
        }
    }

    /// 시트에 추가할 한 행 `[name, sub, email, phone, more_inf]`
    pub fn to_row(&self) -> Vec<Option<String>> {
        vec![
            self.name.clone(),
            self.sub.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.more_inf.clone(),
        ]
    }
}
