//! # batch 命令实现
//!
//! 顺序处理多个文件，逐个输出结果。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 的收集器、执行器与导出
//! - 使用 `utils/output.rs`

use crate::batch::report::save_report_csv;
use crate::batch::{BatchRunner, FileCollector};
use crate::cli::batch::BatchArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Processing");

    let files = FileCollector::new(args.paths)
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!("No files matched '{}'", args.pattern));
        return Ok(());
    }

    output::print_info(&format!("Found {} file(s) to process", files.len()));

    let result = BatchRunner::new()
        .keep_existing(args.keep_existing)
        .show_progress(true)
        .run(&files);

    for line in result.lines() {
        output::print_outcome(&line);
    }

    if let Some(ref report) = args.report {
        save_report_csv(&result, report)?;
        output::print_success(&format!("Report saved to '{}'", report.display()));
    }

    output::print_done(&format!(
        "Processed {} file(s): {} succeeded, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    Ok(())
}
