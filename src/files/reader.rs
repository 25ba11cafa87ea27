//! # 文本读取
//!
//! 一次性读取整个文件并按 UTF-8 解码。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/shell.rs` 调用

use crate::error::{FileError, FileOp};

use std::fs;
use std::path::Path;

/// 读取文件全部文本内容
pub fn read_file(path: &Path) -> Result<String, FileError> {
    let bytes = fs::read(path).map_err(|e| FileError::from_io(path, FileOp::Read, &e))?;

    String::from_utf8(bytes).map_err(|_| FileError::DecodeError {
        path: path.display().to_string(),
    })
}
