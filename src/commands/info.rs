//! # info 命令实现
//!
//! 以表格显示文件大小、时间戳与类型。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `files/info.rs`
//! - 使用 `utils/output.rs`

use crate::cli::info::InfoArgs;
use crate::error::Result;
use crate::files::info::format_time;
use crate::files::{file_info, FileInfo};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 信息表格行
#[derive(Debug, Clone, Tabled)]
struct InfoRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Size (bytes)")]
    size: u64,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&FileInfo> for InfoRow {
    fn from(info: &FileInfo) -> Self {
        Self {
            path: info.path.display().to_string(),
            kind: info.kind(),
            size: info.size,
            modified: format_time(info.modified),
            created: format_time(info.created),
        }
    }
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header("File Information");

    let mut rows = Vec::new();
    for path in &args.paths {
        match file_info(path) {
            Ok(info) => rows.push(InfoRow::from(&info)),
            Err(e) => output::print_error(&format!("Error getting file info: {}", e)),
        }
    }

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    Ok(())
}
