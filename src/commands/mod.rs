//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `files/`, `batch/`, `utils/`
//! - 子模块: shell, batch, info

pub mod batch;
pub mod info;
pub mod shell;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令（无子命令时进入交互模式）
pub fn run(cmd: Option<Commands>) -> Result<()> {
    match cmd {
        None | Some(Commands::Shell) => shell::execute(),
        Some(Commands::Batch(args)) => batch::execute(args),
        Some(Commands::Info(args)) => info::execute(args),
    }
}
