//! # batch 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Files or directories to process, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Glob pattern for files inside directory inputs
    #[arg(short, long, default_value = "*.txt")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Skip files whose '_modified' output already exists
    #[arg(long, default_value_t = false)]
    pub keep_existing: bool,

    /// Write a CSV report of all outcomes
    #[arg(long)]
    pub report: Option<PathBuf>,
}
