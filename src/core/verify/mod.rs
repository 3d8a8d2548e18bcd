//! 테이블 검증 모듈

pub mod report;
pub mod table_verifier;


pub use report::{AccuracyGrade, VerifyReport};
pub use table_verifier::{parse_table_line, verify_generator, verify_text};
