use crate::core::fixed::FixedPointFormat;
use crate::core::table::params::TableParams;

#[test]
fn 기준_파라미터_테스트() {
    let params = TableParams::reference();

    assert_eq!(params.entry_count, 276);
    assert_eq!(params.start_value, 0.25);
    assert_eq!(params.step_value, 0.01);
    assert_eq!(params.format, FixedPointFormat::s7_8());
    assert_eq!(params.table_name, "tanh_lut");
    assert!(params.validate().is_ok(), "기준 파라미터는 항상 유효해야 함");
}

#[test]
fn 도메인_계산_테스트() {
    let params = TableParams::reference();

    assert_eq!(params.input_at(0), 0.25);
    assert_eq!(params.input_at(75), 1.0);
    // 0.25 + 275 * 0.01은 f64에서 정확히 3.0
    assert_eq!(params.end_value(), 3.0);
}

#[test]
fn 검증_실패_테스트() {
    let mut params = TableParams::reference();
    params.entry_count = 0;
    assert!(params.validate().is_err(), "entry_count = 0은 거부되어야 함");

    let mut params = TableParams::reference();
    params.step_value = 0.0;
    assert!(params.validate().is_err(), "step = 0은 거부되어야 함");

    let mut params = TableParams::reference();
    params.step_value = -0.01;
    assert!(params.validate().is_err(), "음수 step은 거부되어야 함");

    let mut params = TableParams::reference();
    params.start_value = f64::NAN;
    assert!(params.validate().is_err(), "NaN 시작값은 거부되어야 함");

    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(2, 2); // 폭 5비트
    assert!(params.validate().is_err(), "4의 배수가 아닌 폭은 거부되어야 함");

    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(7, 0);
    assert!(params.validate().is_err(), "frac_bits = 0은 거부되어야 함");

    let mut params = TableParams::reference();
    params.table_name = String::new();
    assert!(params.validate().is_err(), "빈 테이블 이름은 거부되어야 함");
}

#[test]
fn 극단_비트_폭_검증_테스트() {
    // 비트 수 합이 u32를 넘어도 패닉 없이 Err로 거부되어야 함
    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(u32::MAX, 8);
    assert!(params.validate().is_err(), "극단적인 int_bits는 거부되어야 함");

    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(8, u32::MAX);
    assert!(params.validate().is_err(), "극단적인 frac_bits는 거부되어야 함");

    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(u32::MAX, u32::MAX);
    assert!(params.validate().is_err(), "두 필드 모두 극단값이어도 거부되어야 함");

    // 64비트 초과의 일반적인 경우도 같은 경로로 거부
    let mut params = TableParams::reference();
    params.format = FixedPointFormat::new(32, 32); // 폭 65비트
    assert!(params.validate().is_err(), "64비트 초과 폭은 거부되어야 함");
}

#[test]
fn json_직렬화_테스트() {
    let params = TableParams::reference();
    let json = serde_json::to_string_pretty(&params).unwrap();
    let parsed: TableParams = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, params, "JSON 라운드트립이 파라미터를 보존해야 함");
}
