use crate::core::emit::verilog::{banner, entry_line, lines, render_table, write_table};
use crate::core::table::{LutGenerator, TableParams};

#[test]
fn 배너_테스트() {
    let params = TableParams::reference();
    assert_eq!(
        banner(&params),
        "// tanh LUT for S7.8 format, range [0.25, 3.0], step 0.01",
        "기준 배너가 일치하지 않습니다"
    );
}

#[test]
fn 배너_정수_경계_표기_테스트() {
    // 도메인 끝이 정수여도 소수점 표기를 유지해야 함 (3 → 3.0)
    let params = TableParams::reference();
    assert!((params.end_value() - 3.0).abs() < 1e-12);
    assert!(
        banner(&params).contains("[0.25, 3.0]"),
        "정수 경계값은 3.0으로 표기되어야 합니다"
    );
}

#[test]
fn 엔트리_라인_테스트() {
    let generator = LutGenerator::reference();
    let first = generator.entry(0);
    let last = generator.entry(275);

    assert_eq!(
        entry_line(&generator.params, &first),
        "    tanh_lut[  0] = 16'h003F; // tanh(0.25)",
        "첫 엔트리 라인이 일치하지 않습니다"
    );
    assert_eq!(
        entry_line(&generator.params, &last),
        "    tanh_lut[275] = 16'h00FF; // tanh(3.00)",
        "마지막 엔트리 라인이 일치하지 않습니다"
    );
}

#[test]
fn 라인_수_테스트() {
    let generator = LutGenerator::reference();
    let count = lines(&generator).count();
    assert_eq!(count, 277, "배너 1줄 + 엔트리 276줄이어야 합니다");
}

#[test]
fn 렌더링과_기록_일치_테스트() {
    let generator = LutGenerator::reference();
    let rendered = render_table(&generator);

    let mut written: Vec<u8> = Vec::new();
    write_table(&generator, &mut written).unwrap();

    assert_eq!(rendered.as_bytes(), written.as_slice(), "render와 write 결과가 달라서는 안 됩니다");
    assert!(rendered.ends_with('\n'), "마지막 라인도 개행으로 끝나야 합니다");
}

#[test]
fn 커스텀_테이블_설정_테스트() {
    let mut params = TableParams::reference();
    params.table_name = "sigmoid_lut".to_string();
    params.entry_count = 5;
    params.index_pad = 2;
    let generator = LutGenerator::new(params).unwrap();

    let line = entry_line(&generator.params, &generator.entry(3));
    assert!(line.starts_with("    sigmoid_lut[ 3] = 16'h"), "테이블 이름과 패딩이 반영되어야 합니다: {}", line);
}
