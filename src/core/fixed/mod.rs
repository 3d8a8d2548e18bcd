//! 고정소수점 표현 모듈

pub mod format;
pub mod quantize;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use format::FixedPointFormat;
pub use quantize::{dequantize, quantize, saturates};
