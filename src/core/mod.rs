//! # 활성화 함수 LUT 핵심 모듈
//!
//! 고정소수점 양자화, 테이블 생성, 출력, 검증의 핵심 구성 요소들

pub mod emit;
pub mod fixed;
pub mod table;
pub mod verify;

// 주요 타입들 재수출
pub use fixed::*;
pub use table::*;
pub use verify::*;

// 각 모듈이 자체 테스트를 포함함
