//! # 批量结果导出
//!
//! 将批量处理结果导出为 CSV（input, output, status, message）。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `csv` + `serde` 写入记录

use crate::batch::runner::{BatchResult, ProcessResult};
use crate::error::{LinemarkError, Result};

use serde::Serialize;
use std::path::Path;

/// CSV 记录
#[derive(Debug, Serialize)]
struct ReportRecord {
    input: String,
    output: String,
    status: &'static str,
    message: String,
}

impl From<&ProcessResult> for ReportRecord {
    fn from(result: &ProcessResult) -> Self {
        let input = result.input().display().to_string();
        match result {
            ProcessResult::Success { output, .. } => ReportRecord {
                input,
                output: output.display().to_string(),
                status: "success",
                message: String::new(),
            },
            ProcessResult::Skipped { output, .. } => ReportRecord {
                input,
                output: output.display().to_string(),
                status: "skipped",
                message: "output already exists".to_string(),
            },
            ProcessResult::Failed { error, .. } => ReportRecord {
                input,
                output: String::new(),
                status: "failed",
                message: error.to_string(),
            },
        }
    }
}

/// 保存批量结果到 CSV
pub fn save_report_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in &result.results {
        wtr.serialize(ReportRecord::from(r))?;
    }

    wtr.flush().map_err(|e| LinemarkError::ReportWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
