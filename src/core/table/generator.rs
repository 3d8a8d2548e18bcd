//! tanh LUT 생성기

use super::params::TableParams;
use crate::core::fixed::quantize;
use rayon::prelude::*;

/// 생성된 테이블 엔트리 (저장하지 않는 파생값)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// 엔트리 인덱스
    pub index: usize,
    /// 입력값 start + index * step
    pub input_value: f64,
    /// tanh(input_value)
    pub real_output: f64,
    /// 고정소수점 비트 패턴 (width 비트, 2의 보수)
    pub encoded_output: u64,
}

/// tanh LUT 생성기
///
/// 엔트리 계산은 인덱스와 파라미터만의 순수 함수라서
/// 순차/병렬 어느 경로로도 같은 결과가 나온다.
pub struct LutGenerator {
    pub params: TableParams,
}

impl LutGenerator {
    /// 파라미터를 검증하고 생성기를 만든다
    pub fn new(params: TableParams) -> Result<Self, String> {
        params.validate()?;
        Ok(Self { params })
    }

    /// 기준 테이블 생성기 (S7.8, 276개)
    pub fn reference() -> Self {
        // 기준 파라미터는 항상 유효함
        Self { params: TableParams::reference() }
    }

    /// index 하나의 엔트리 계산
    pub fn entry(&self, index: usize) -> TableEntry {
        let input_value = self.params.input_at(index);
        let real_output = libm::tanh(input_value);
        let encoded_output = quantize(self.params.format, real_output);
        TableEntry { index, input_value, real_output, encoded_output }
    }

    /// 엔트리 시퀀스 (lazy, 호출할 때마다 처음부터 다시 순회)
    pub fn entries(&self) -> impl Iterator<Item = TableEntry> + '_ {
        (0..self.params.entry_count).map(move |i| self.entry(i))
    }

    /// rayon 병렬 생성, 인덱스 오름차순 보존
    pub fn entries_parallel(&self) -> Vec<TableEntry> {
        (0..self.params.entry_count)
            .into_par_iter()
            .map(|i| self.entry(i))
            .collect()
    }
}
