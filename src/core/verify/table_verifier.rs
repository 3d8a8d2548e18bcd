//! 생성된 테이블을 실수 기준값과 대조하는 검증기
//!
//! 텍스트로 방출된 테이블을 다시 파싱해 인덱스가 조밀한 오름차순인지,
//! 각 워드의 복원값이 반-ULP 한계 안에 있는지 확인한다.

use crate::core::fixed::{dequantize, saturates};
use crate::core::table::{LutGenerator, TableParams};
use crate::core::verify::report::{AccuracyGrade, VerifyReport};

/// 대입 라인 한 줄 파싱
///
/// 배너/주석/빈 줄은 `Ok(None)`, 엔트리 라인은 `Ok(Some((index, code)))`.
/// 형식이 깨졌거나 비트 폭이 맞지 않으면 에러.
pub fn parse_table_line(
    table_name: &str,
    expected_width: u32,
    line: &str,
) -> Result<Option<(usize, u64)>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return Ok(None);
    }

    let rest = trimmed
        .strip_prefix(table_name)
        .ok_or_else(|| format!("인식할 수 없는 라인: {}", line))?;
    let rest = rest
        .strip_prefix('[')
        .ok_or_else(|| format!("'[' 누락: {}", line))?;

    let close = rest.find(']').ok_or_else(|| format!("']' 누락: {}", line))?;
    let index = rest[..close]
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("인덱스 파싱 실패 ({}): {}", e, line))?;

    let rest = rest[close + 1..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .ok_or_else(|| format!("'=' 누락: {}", line))?;

    let rest = rest.trim_start();
    let tick = rest
        .find("'h")
        .ok_or_else(|| format!("\"'h\" 누락: {}", line))?;
    let width = rest[..tick]
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("비트 폭 파싱 실패 ({}): {}", e, line))?;
    if width != expected_width {
        return Err(format!(
            "비트 폭 불일치: {} (기대값 {}): {}",
            width, expected_width, line
        ));
    }

    let rest = &rest[tick + 2..];
    let semi = rest.find(';').ok_or_else(|| format!("';' 누락: {}", line))?;
    let code = u64::from_str_radix(rest[..semi].trim(), 16)
        .map_err(|e| format!("워드 파싱 실패 ({}): {}", e, line))?;

    Ok(Some((index, code)))
}

/// 텍스트 테이블 검증
pub fn verify_text(params: &TableParams, text: &str) -> Result<VerifyReport, String> {
    params.validate()?;

    let mut pairs: Vec<(usize, u64)> = Vec::new();
    for line in text.lines() {
        if let Some(pair) = parse_table_line(&params.table_name, params.format.width(), line)? {
            pairs.push(pair);
        }
    }

    if pairs.len() != params.entry_count {
        return Err(format!(
            "엔트리 수 불일치: {} (기대값 {})",
            pairs.len(),
            params.entry_count
        ));
    }
    for (pos, (index, _)) in pairs.iter().enumerate() {
        if *index != pos {
            return Err(format!(
                "인덱스가 조밀한 오름차순이 아닙니다: {}번째 엔트리의 인덱스가 {}",
                pos, index
            ));
        }
    }

    Ok(accumulate(params, &pairs))
}

/// 생성기 출력을 직접 검증 (파싱 단계 생략)
pub fn verify_generator(generator: &LutGenerator) -> VerifyReport {
    let pairs: Vec<(usize, u64)> = generator
        .entries()
        .map(|entry| (entry.index, entry.encoded_output))
        .collect();
    accumulate(&generator.params, &pairs)
}

/// (인덱스, 워드) 쌍에서 오차 통계 집계
fn accumulate(params: &TableParams, pairs: &[(usize, u64)]) -> VerifyReport {
    let format = params.format;
    let half_ulp_bound = format.half_ulp();

    let mut max_abs_error = 0.0_f64;
    let mut worst_index = 0_usize;
    let mut sum_sq = 0.0_f64;
    let mut saturated_count = 0_usize;

    for &(index, code) in pairs {
        let real = libm::tanh(params.input_at(index));
        let approx = dequantize(format, code);
        let err = (approx - real).abs();

        if err > max_abs_error {
            max_abs_error = err;
            worst_index = index;
        }
        sum_sq += err * err;
        if saturates(format, real) {
            saturated_count += 1;
        }
    }

    let rmse = if pairs.is_empty() {
        0.0
    } else {
        (sum_sq / pairs.len() as f64).sqrt()
    };
    let passed = max_abs_error <= half_ulp_bound && saturated_count == 0;

    VerifyReport {
        entry_count: pairs.len(),
        max_abs_error,
        rmse,
        worst_index,
        saturated_count,
        half_ulp_bound,
        passed,
        grade: AccuracyGrade::from_rmse(rmse, format.ulp()),
    }
}
