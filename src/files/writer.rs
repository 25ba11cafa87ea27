//! # 派生路径写入
//!
//! 在原文件扩展名前插入 `_modified` 后缀，写入变换后的内容。
//!
//! ## 示例
//! - `a.txt` -> `a_modified.txt`
//! - `README` -> `README_modified`
//! - `archive.tar.gz` -> `archive.tar_modified.gz`
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/shell.rs` 调用

use crate::error::{FileError, FileOp};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 输出文件名后缀
pub const OUTPUT_SUFFIX: &str = "_modified";

/// 由输入路径推导输出路径
pub fn derive_output_path(path: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(OUTPUT_SUFFIX);

    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }

    path.with_file_name(name)
}

/// 写入变换内容到派生路径，返回该路径
///
/// 已存在的文件会被覆盖；写入不是原子的。
pub fn write_file(original: &Path, content: &str) -> Result<PathBuf, FileError> {
    let output_path = derive_output_path(original);

    fs::write(&output_path, content)
        .map_err(|e| FileError::from_io(&output_path, FileOp::Write, &e))?;

    Ok(output_path)
}
