//! # 统一错误处理模块
//!
//! 定义 linemark 的错误类型，使用 `thiserror` 派生。
//!
//! - `FileError`: 单文件操作的封闭错误分类，在文件边界处恢复
//! - `LinemarkError`: 进程级错误，最终由 `main.rs` 打印并退出
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// 文件操作类型（用于错误消息）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Read => write!(f, "read"),
            FileOp::Write => write!(f, "write"),
        }
    }
}

/// 单文件操作错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File '{path}' not found.")]
    NotFound { path: String },

    #[error("Permission denied to {op} '{path}'.")]
    PermissionDenied { path: String, op: FileOp },

    #[error("Unable to decode file '{path}'. It might be a binary file.")]
    DecodeError { path: String },

    #[error("Unexpected error while trying to {op} '{path}': {message}")]
    Unknown {
        path: String,
        op: FileOp,
        message: String,
    },
}

impl FileError {
    /// 将 `io::Error` 归类为 `FileError`
    pub fn from_io(path: &Path, op: FileOp, err: &io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            // 写入时目标目录缺失不属于 NotFound 分类
            io::ErrorKind::NotFound if op == FileOp::Read => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path, op },
            io::ErrorKind::InvalidData if op == FileOp::Read => FileError::DecodeError { path },
            _ => FileError::Unknown {
                path,
                op,
                message: err.to_string(),
            },
        }
    }
}

/// linemark 进程级错误类型
#[derive(Error, Debug)]
pub enum LinemarkError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Failed to write report: {path}")]
    ReportWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Terminal I/O failed")]
    TerminalIo(#[source] io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LinemarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_io_errors() {
        let path = Path::new("notes.txt");

        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(
            FileError::from_io(path, FileOp::Read, &err),
            FileError::NotFound {
                path: "notes.txt".to_string()
            }
        );

        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            FileError::from_io(path, FileOp::Write, &err),
            FileError::PermissionDenied {
                op: FileOp::Write,
                ..
            }
        ));

        let err = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(
            FileError::from_io(path, FileOp::Write, &err),
            FileError::Unknown { .. }
        ));
    }

    #[test]
    fn test_messages() {
        let err = FileError::NotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(err.to_string(), "File 'missing.txt' not found.");

        let err = FileError::PermissionDenied {
            path: "locked.txt".to_string(),
            op: FileOp::Read,
        };
        assert_eq!(err.to_string(), "Permission denied to read 'locked.txt'.");
    }
}
