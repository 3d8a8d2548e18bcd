//! 기준 tanh LUT의 양자화 정확도 리포트
//!
//! 생성기 직접 검증과 텍스트 왕복 검증을 모두 수행하고
//! 최악 엔트리의 상세를 출력한다

use actlut::core::emit::verilog::render_table;
use actlut::core::fixed::dequantize;
use actlut::core::table::LutGenerator;
use actlut::core::verify::{verify_generator, verify_text};

fn main() -> anyhow::Result<()> {
    println!("=== tanh LUT 정확도 리포트 ===\n");

    let generator = LutGenerator::reference();

    // 1. 생성기 직접 검증
    println!("1. 생성기 직접 검증");
    let report = verify_generator(&generator);
    report.print_summary();

    // 2. 최악 엔트리 상세
    println!("\n2. 최악 엔트리 상세");
    let format = generator.params.format;
    let worst = generator.entry(report.worst_index);
    let restored = dequantize(format, worst.encoded_output);
    println!("  - 인덱스: {}", worst.index);
    println!("  - 입력: tanh({:.2})", worst.input_value);
    println!("  - 실수값: {:.10}", worst.real_output);
    println!(
        "  - 워드: {}'h{:0digits$X} (복원값 {:.10})",
        format.width(),
        worst.encoded_output,
        restored,
        digits = format.hex_digits()
    );
    println!("  - 오차: {:.10}", (restored - worst.real_output).abs());

    // 3. 텍스트 왕복 검증
    println!("\n3. 텍스트 왕복 검증");
    let text = render_table(&generator);
    let roundtrip = verify_text(&generator.params, &text).map_err(anyhow::Error::msg)?;
    if !roundtrip.passed {
        return Err(anyhow::anyhow!("텍스트 왕복 검증 실패"));
    }
    println!("✅ 방출된 텍스트 {}줄 재파싱 통과 (등급 {:?})", text.lines().count(), roundtrip.grade);

    Ok(())
}
