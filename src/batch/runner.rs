//! # 批量执行器
//!
//! 依次对每个路径执行 读取 -> 变换 -> 写入。
//!
//! ## 功能
//! - 顺序处理，单个文件失败不会中断后续文件
//! - 可选跳过已存在的输出文件
//! - 进度条显示
//! - 按输入顺序汇总结果
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `files/`, `transform.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::FileError;
use crate::files::{derive_output_path, read_file, write_file};
use crate::transform::transform;
use crate::utils::progress;

use indicatif::ProgressBar;
use std::fmt;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success { input: PathBuf, output: PathBuf },
    /// 跳过（输出文件已存在）
    Skipped { input: PathBuf, output: PathBuf },
    /// 处理失败
    Failed { input: PathBuf, error: FileError },
}

impl ProcessResult {
    pub fn input(&self) -> &Path {
        match self {
            ProcessResult::Success { input, .. }
            | ProcessResult::Skipped { input, .. }
            | ProcessResult::Failed { input, .. } => input,
        }
    }
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessResult::Success { input, output } => {
                write!(f, "[OK] {} -> {}", input.display(), output.display())
            }
            ProcessResult::Skipped { input, output } => write!(
                f,
                "[SKIP] {}: '{}' already exists",
                input.display(),
                output.display()
            ),
            ProcessResult::Failed { input, error } => {
                write!(f, "[ERR] {}: {}", input.display(), error)
            }
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 按输入顺序排列的结果
    pub results: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result {
            ProcessResult::Success { .. } => self.success += 1,
            ProcessResult::Skipped { .. } => self.skipped += 1,
            ProcessResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 每个输入一行的可读结果，按输入顺序
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(|r| r.to_string()).collect()
    }
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner {
    /// 输出已存在时跳过
    keep_existing: bool,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（覆盖已有输出，不显示进度）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_existing(mut self, keep: bool) -> Self {
        self.keep_existing = keep;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表
    pub fn run<P: AsRef<Path>>(&self, files: &[P]) -> BatchResult {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Processing")
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();
        for file in files {
            batch_result.merge(self.process(file.as_ref()));
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }

    /// 处理单个文件
    ///
    /// 先读取输入，读取失败总是报告为失败，即使输出已存在。
    pub fn process(&self, input: &Path) -> ProcessResult {
        let content = match read_file(input) {
            Ok(content) => content,
            Err(error) => {
                return ProcessResult::Failed {
                    input: input.to_path_buf(),
                    error,
                }
            }
        };

        if self.keep_existing {
            let output = derive_output_path(input);
            if output.exists() {
                return ProcessResult::Skipped {
                    input: input.to_path_buf(),
                    output,
                };
            }
        }

        match write_file(input, &transform(&content)) {
            Ok(output) => ProcessResult::Success {
                input: input.to_path_buf(),
                output,
            },
            Err(error) => ProcessResult::Failed {
                input: input.to_path_buf(),
                error,
            },
        }
    }
}
