//! 고정소수점 양자화/역양자화

use super::format::FixedPointFormat;

/// 실수 → 고정소수점 비트 패턴
///
/// 반올림은 0.5에서 0으로부터 먼 쪽으로 (ties away from zero).
/// 표현 범위를 넘는 값은 포화 없이 마스크로 랩어라운드된다.
pub fn quantize(format: FixedPointFormat, value: f64) -> u64 {
    let scaled = (value * format.scale()).round() as i64;
    (scaled as u64) & format.mask()
}

/// 고정소수점 비트 패턴 → 실수 (부호 확장 후 스케일 복원)
pub fn dequantize(format: FixedPointFormat, bits: u64) -> f64 {
    let raw = bits & format.mask();
    let signed = if raw & format.sign_bit() != 0 {
        (raw | !format.mask()) as i64
    } else {
        raw as i64
    };
    signed as f64 / format.scale()
}

/// 양자화 결과가 표현 범위를 벗어나는지 확인
///
/// 생성 경로는 막지 않고 검증 리포트의 진단용으로만 쓴다.
pub fn saturates(format: FixedPointFormat, value: f64) -> bool {
    let scaled = (value * format.scale()).round();
    scaled > format.max_scaled() as f64 || scaled < format.min_scaled() as f64
}
