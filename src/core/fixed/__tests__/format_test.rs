use crate::core::fixed::format::FixedPointFormat;

#[test]
fn 포맷_표기_테스트() {
    assert_eq!(FixedPointFormat::s7_8().notation(), "S7.8");
    assert_eq!(FixedPointFormat::new(3, 4).notation(), "S3.4");
    assert_eq!(FixedPointFormat::new(0, 3).notation(), "S0.3");
}

#[test]
fn 비트_폭_테스트() {
    let s78 = FixedPointFormat::s7_8();
    assert_eq!(s78.width(), 16, "S7.8은 16비트여야 함");
    assert_eq!(s78.hex_digits(), 4, "16비트는 16진수 4자리");
    assert_eq!(s78.mask(), 0xFFFF);

    let s34 = FixedPointFormat::new(3, 4);
    assert_eq!(s34.width(), 8);
    assert_eq!(s34.hex_digits(), 2);
    assert_eq!(s34.mask(), 0xFF);
    assert_eq!(s34.sign_bit(), 0x80);
}

#[test]
fn 표현_범위_테스트() {
    let s78 = FixedPointFormat::s7_8();
    assert_eq!(s78.max_scaled(), 32767, "S7.8 최대 정수값");
    assert_eq!(s78.min_scaled(), -32768, "S7.8 최소 정수값");

    let narrow = FixedPointFormat::new(0, 3);
    assert_eq!(narrow.max_scaled(), 7);
    assert_eq!(narrow.min_scaled(), -8);
}

#[test]
fn 스케일_테스트() {
    let s78 = FixedPointFormat::s7_8();
    assert_eq!(s78.scale(), 256.0);
    assert_eq!(s78.ulp(), 1.0 / 256.0);
    assert_eq!(s78.half_ulp(), 1.0 / 512.0);
}

#[test]
fn 폭_역산_테스트() {
    let format = FixedPointFormat::from_width(16, 8);
    assert_eq!(format, FixedPointFormat::s7_8(), "폭 16/소수부 8은 S7.8로 복원되어야 함");
    assert_eq!(FixedPointFormat::from_width(8, 4), FixedPointFormat::new(3, 4));
}
