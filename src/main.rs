use actlut::core::emit::verilog::write_table;
use actlut::core::table::LutGenerator;
use std::io::Write;

/// 기준 tanh LUT를 표준 출력으로 방출
fn main() {
    let generator = LutGenerator::reference();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_table(&generator, &mut handle) {
        eprintln!("테이블 출력 실패: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = handle.flush() {
        eprintln!("테이블 출력 실패: {}", e);
        std::process::exit(1);
    }
}
