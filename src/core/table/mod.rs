//! 테이블 파라미터와 생성기 모듈

pub mod generator;
pub mod params;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use generator::{LutGenerator, TableEntry};
pub use params::TableParams;
