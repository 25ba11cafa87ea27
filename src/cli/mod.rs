//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - （无子命令）/ `shell`: 交互模式
//! - `batch`: 批量处理文件
//! - `info`: 查看文件信息
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: batch, info

pub mod batch;
pub mod info;

use clap::{Parser, Subcommand};

/// linemark - 为文本文件添加行号并转换为大写
#[derive(Parser)]
#[command(name = "linemark")]
#[command(version)]
#[command(about = "Number and uppercase the lines of text files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Process files one at a time from an interactive prompt (default)
    Shell,

    /// Process a list of files or directories sequentially
    Batch(batch::BatchArgs),

    /// Show size, timestamps and type of files
    Info(info::InfoArgs),
}
