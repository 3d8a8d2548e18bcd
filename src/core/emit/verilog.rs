//! Verilog 스타일 테이블 텍스트 출력
//!
//! 출력 형식 (배너 1줄 + 엔트리 라인들):
//! ```text
//! // tanh LUT for S7.8 format, range [0.25, 3.0], step 0.01
//!     tanh_lut[  0] = 16'h003F; // tanh(0.25)
//! ```

use crate::core::table::{LutGenerator, TableEntry, TableParams};
use std::io::{self, Write};

/// 배너용 실수 표기: 정수값이어도 소수점을 유지 (3 → "3.0")
fn format_domain_value(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// 배너 라인
pub fn banner(params: &TableParams) -> String {
    format!(
        "// tanh LUT for {} format, range [{}, {}], step {}",
        params.format.notation(),
        format_domain_value(params.start_value),
        format_domain_value(params.end_value()),
        format_domain_value(params.step_value),
    )
}

/// 엔트리 대입 라인
///
/// 인덱스는 index_pad 폭으로 오른쪽 정렬(공백 채움), 16진수는
/// width/4 자리 대문자 0채움, 입력값 주석은 소수점 둘째 자리까지.
pub fn entry_line(params: &TableParams, entry: &TableEntry) -> String {
    format!(
        "    {name}[{index:>pad$}] = {width}'h{code:0digits$X}; // tanh({x:.2})",
        name = params.table_name,
        index = entry.index,
        pad = params.index_pad,
        width = params.format.width(),
        code = entry.encoded_output,
        digits = params.format.hex_digits(),
        x = entry.input_value,
    )
}

/// 배너 + 전체 엔트리 라인 (lazy, 인덱스 오름차순)
pub fn lines(generator: &LutGenerator) -> impl Iterator<Item = String> + '_ {
    std::iter::once(banner(&generator.params))
        .chain(generator.entries().map(move |entry| entry_line(&generator.params, &entry)))
}

/// writer로 전체 테이블 기록
pub fn write_table<W: Write>(generator: &LutGenerator, writer: &mut W) -> io::Result<()> {
    for line in lines(generator) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// 전체 테이블 문자열 (각 라인은 개행으로 끝남)
pub fn render_table(generator: &LutGenerator) -> String {
    let mut out = String::new();
    for line in lines(generator) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
