//! 테이블 출력 모듈 (Verilog 텍스트 / .mem / 바이너리)

pub mod memfile;
pub mod verilog;

#[cfg(test)]
mod __tests__;

pub use memfile::{deserialize_binary, parse_memh, serialize_binary, write_memh, TABLE_MAGIC};
pub use verilog::{banner, entry_line, lines, render_table, write_table};
