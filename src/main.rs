//! # linemark - 文本行号标注工具
//!
//! 读取文本文件，为每一行添加三位行号并转换为大写，
//! 写入到派生文件名 `<name>_modified.<ext>`。
//!
//! ## 子命令
//! - （无）/ `shell` - 交互模式，逐个处理文件
//! - `batch` - 顺序批量处理
//! - `info`  - 查看文件信息
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── files/     (读取、写入、元数据)
//!   │     ├── transform  (行号与大写变换)
//!   │     ├── batch/     (批量处理)
//!   │     └── models/    (统计模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod files;
mod models;
mod transform;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
