//! LUT 테이블 파라미터

use crate::core::fixed::FixedPointFormat;
use serde::{Deserialize, Serialize};

/// tanh LUT 생성 파라미터
///
/// JSON 설정 파일로 저장/로드할 수 있다 (CLI `--config`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableParams {
    /// 엔트리 개수
    pub entry_count: usize,
    /// 도메인 시작값
    pub start_value: f64,
    /// 도메인 증분 (양수)
    pub step_value: f64,
    /// 출력 고정소수점 포맷
    pub format: FixedPointFormat,
    /// Verilog 배열 이름
    pub table_name: String,
    /// 인덱스 자리 맞춤 최소 폭 (기준 테이블은 3)
    pub index_pad: usize,
}

impl Default for TableParams {
    fn default() -> Self {
        Self::reference()
    }
}

impl TableParams {
    /// 기준 테이블 파라미터: S7.8, 도메인 [0.25, 3.0], step 0.01, 276개
    pub fn reference() -> Self {
        Self {
            entry_count: 276,
            start_value: 0.25,
            step_value: 0.01,
            format: FixedPointFormat::s7_8(),
            table_name: "tanh_lut".to_string(),
            index_pad: 3,
        }
    }

    /// 파라미터 유효성 검사
    pub fn validate(&self) -> Result<(), String> {
        if self.entry_count == 0 {
            return Err("entry_count는 0보다 커야 합니다".to_string());
        }
        if !self.start_value.is_finite() {
            return Err(format!("start_value가 유한하지 않습니다: {}", self.start_value));
        }
        if !(self.step_value > 0.0) || !self.step_value.is_finite() {
            return Err(format!("step_value는 양의 유한값이어야 합니다: {}", self.step_value));
        }
        // 1 + int_bits + frac_bits가 u32 범위를 넘을 수 있으므로 합은 u64로 검사
        let wide_width = 1u64 + self.format.int_bits as u64 + self.format.frac_bits as u64;
        if wide_width > 64 {
            return Err(format!("비트 폭 {}은 64를 초과할 수 없습니다", wide_width));
        }
        let width = self.format.width();
        if width % 4 != 0 {
            return Err(format!(
                "비트 폭 {}은 4의 배수여야 합니다 (16진수 자릿수 = width/4)",
                width
            ));
        }
        if self.format.frac_bits == 0 {
            return Err("frac_bits는 1 이상이어야 합니다".to_string());
        }
        if self.table_name.is_empty() {
            return Err("table_name이 비어 있습니다".to_string());
        }
        Ok(())
    }

    /// i번째 입력값: start + i * step
    pub fn input_at(&self, index: usize) -> f64 {
        self.start_value + index as f64 * self.step_value
    }

    /// 마지막 입력값 (배너 표기용)
    pub fn end_value(&self) -> f64 {
        self.input_at(self.entry_count - 1)
    }

    /// JSON 설정 파일 로드
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate().map_err(anyhow::Error::msg)?;
        Ok(params)
    }

    /// JSON 설정 파일 저장
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
