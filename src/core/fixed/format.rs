//! 부호 있는 고정소수점 포맷 정의 (S7.8 등)

use serde::{Deserialize, Serialize};

/// 부호 있는 고정소수점 포맷: 1 부호 비트 + int_bits + frac_bits
///
/// S7.8이면 1 + 7 + 8 = 총 16비트, 스케일 2^8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPointFormat {
    /// 정수부 비트 수 (부호 비트 제외)
    pub int_bits: u32,
    /// 소수부 비트 수
    pub frac_bits: u32,
}

impl FixedPointFormat {
    /// 임의 포맷 생성 (유효성은 TableParams::validate에서 검사)
    pub const fn new(int_bits: u32, frac_bits: u32) -> Self {
        Self { int_bits, frac_bits }
    }

    /// 기준 LUT 포맷 S7.8
    pub const fn s7_8() -> Self {
        Self { int_bits: 7, frac_bits: 8 }
    }

    /// 전체 비트 폭에서 역산 (바이너리 컨테이너 헤더 파싱용)
    pub const fn from_width(width: u32, frac_bits: u32) -> Self {
        Self { int_bits: width - 1 - frac_bits, frac_bits }
    }

    /// 전체 비트 폭 (부호 포함)
    pub const fn width(&self) -> u32 {
        1 + self.int_bits + self.frac_bits
    }

    /// 16진수 출력 자릿수 (width / 4)
    pub const fn hex_digits(&self) -> usize {
        (self.width() / 4) as usize
    }

    /// width 비트 마스크
    pub const fn mask(&self) -> u64 {
        if self.width() >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width()) - 1
        }
    }

    /// 부호 비트 위치
    pub const fn sign_bit(&self) -> u64 {
        1u64 << (self.width() - 1)
    }

    /// 표현 가능한 최대 정수값 (스케일 적용 전)
    pub const fn max_scaled(&self) -> i64 {
        if self.width() >= 64 {
            i64::MAX
        } else {
            (1i64 << (self.width() - 1)) - 1
        }
    }

    /// 표현 가능한 최소 정수값 (스케일 적용 전)
    pub const fn min_scaled(&self) -> i64 {
        if self.width() >= 64 {
            i64::MIN
        } else {
            -(1i64 << (self.width() - 1))
        }
    }

    /// 스케일 팩터 2^frac_bits
    pub fn scale(&self) -> f64 {
        (1u64 << self.frac_bits) as f64
    }

    /// 양자화 스텝 2^-frac_bits
    pub fn ulp(&self) -> f64 {
        1.0 / self.scale()
    }

    /// 라운드트립 허용 오차 2^-(frac_bits+1) (half-ULP)
    pub fn half_ulp(&self) -> f64 {
        0.5 / self.scale()
    }

    /// "S7.8" 표기
    pub fn notation(&self) -> String {
        format!("S{}.{}", self.int_bits, self.frac_bits)
    }
}

// S7.8 레이아웃 검증 (컴파일 타임)
const _: () = assert!(FixedPointFormat::s7_8().width() == 16);
const _: () = assert!(FixedPointFormat::s7_8().hex_digits() == 4);
const _: () = assert!(FixedPointFormat::s7_8().mask() == 0xFFFF);
const _: () = assert!(FixedPointFormat::s7_8().sign_bit() == 0x8000);
const _: () = assert!(FixedPointFormat::s7_8().max_scaled() == 32767);
const _: () = assert!(FixedPointFormat::s7_8().min_scaled() == -32768);
