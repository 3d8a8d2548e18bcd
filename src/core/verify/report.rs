//! 검증 리포트 및 정확도 등급

use serde::{Deserialize, Serialize};
use std::fs;

/// 양자화 정확도 등급 (RMSE를 양자화 스텝 단위로 평가)
///
/// 이상적인 최근접 반올림의 RMSE는 약 0.29 스텝이므로 기준 테이블은 A등급이 나온다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyGrade {
    S,
    A,
    B,
    C,
}

impl AccuracyGrade {
    /// RMSE(실수 단위)와 양자화 스텝으로 등급 판정
    pub fn from_rmse(rmse: f64, quant_step: f64) -> Self {
        let ratio = rmse / quant_step;
        if ratio <= 0.15 {
            AccuracyGrade::S
        } else if ratio <= 0.35 {
            AccuracyGrade::A
        } else if ratio <= 0.5 {
            AccuracyGrade::B
        } else {
            AccuracyGrade::C
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccuracyGrade::S => "무손실급",
            AccuracyGrade::A => "고품질",
            AccuracyGrade::B => "양호",
            AccuracyGrade::C => "재설계 필요",
        }
    }
}

/// 테이블 검증 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    pub entry_count: usize,
    pub max_abs_error: f64,
    pub rmse: f64,
    pub worst_index: usize,
    pub saturated_count: usize,
    pub half_ulp_bound: f64,
    pub passed: bool,
    pub grade: AccuracyGrade,
}

impl VerifyReport {
    /// 콘솔 요약 출력
    pub fn print_summary(&self) {
        println!("📊 테이블 검증 결과");
        println!("  - 엔트리 수: {}", self.entry_count);
        println!(
            "  - 최대 절대 오차: {:.8} (허용 한계 {:.8})",
            self.max_abs_error, self.half_ulp_bound
        );
        println!("  - RMSE: {:.8} (최악 인덱스 {})", self.rmse, self.worst_index);
        println!("  - 포화 엔트리: {}개", self.saturated_count);
        let mark = if self.passed { "✅ 통과" } else { "❌ 실패" };
        println!(
            "  - 판정: {} | 등급 {:?} ({})",
            mark,
            self.grade,
            self.grade.description()
        );
    }

    /// 리포트를 JSON 파일로 저장
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// JSON 파일에서 리포트 로드
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }
}
