//! 활성화 함수 고정소수점 LUT 생성 라이브러리
//!
//! tanh 값을 S7.8 2의 보수 고정소수점으로 양자화해 하드웨어용
//! 룩업 테이블(Verilog 대입문, `.mem`, 바이너리)을 생성하고 검증한다

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 고정소수점 포맷과 양자화
    dequantize, quantize, saturates, FixedPointFormat,
    // 테이블 생성
    LutGenerator, TableEntry, TableParams,
    // 검증
    verify_generator, verify_text, AccuracyGrade, VerifyReport,
};

// 편의 타입 별칭
pub type Format = FixedPointFormat;
pub type Generator = LutGenerator;
