//! 터미널 출력 포맷팅 유틸리티
//!
//! 관리 CLI(`relay_admin`)가 사용하는 출력 함수들입니다.
//! 모든 함수는 `Write` 대상을 받아 테스트에서 버퍼로 출력을 확인할 수 있습니다.

use std::io::{self, Write};
use serde_json::Value;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Authorize Relay                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);

    writeln!(out, "╔{}╗", border)?;
    writeln!(out, "║{:^50}║", title)?;
    writeln!(out, "╚{}╝", border)
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Loading client credentials
/// ```
pub fn print_step_start<W: Write>(out: &mut W, step: u8, description: &str) -> io::Result<()> {
    writeln!(out, "→ Step {}: {}", step, description)
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Token stored (token.json)
/// ```
pub fn print_step_complete<W: Write>(
    out: &mut W,
    step: u8,
    description: &str,
    detail: &str,
) -> io::Result<()> {
    writeln!(out, "✓ Step {}: {} ({})", step, description, detail)
}

/// 셀 값을 출력용 문자열로 변환합니다. 비어 있는 셀은 빈 문자열입니다.
pub fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// 각 행의 A열과 E열을 `"A, E"` 형식으로 출력합니다
///
/// 행이 하나도 없으면 `No data found.`를 출력합니다.
pub fn print_rows<W: Write>(out: &mut W, rows: &[Vec<Value>]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No data found.");
    }

    for row in rows {
        writeln!(out, "{}, {}", cell_text(row.first()), cell_text(row.get(4)))?;
    }
    Ok(())
}
