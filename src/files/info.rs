//! # 文件信息
//!
//! 查询路径的大小、时间戳与类型。
//!
//! ## 依赖关系
//! - 被 `commands/info.rs` 调用
//! - 使用 `chrono` 格式化时间戳

use crate::error::{FileError, FileOp};

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 文件元数据
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// 字节数
    pub size: u64,
    pub modified: Option<SystemTime>,
    /// 部分文件系统不提供创建时间
    pub created: Option<SystemTime>,
    pub is_file: bool,
    pub is_dir: bool,
}

impl FileInfo {
    /// 路径类型描述
    pub fn kind(&self) -> &'static str {
        if self.is_file {
            "file"
        } else if self.is_dir {
            "directory"
        } else {
            "other"
        }
    }
}

/// 查询文件元数据（跟随符号链接）
pub fn file_info(path: &Path) -> Result<FileInfo, FileError> {
    let meta = fs::metadata(path).map_err(|e| FileError::from_io(path, FileOp::Read, &e))?;

    Ok(FileInfo {
        path: path.to_path_buf(),
        size: meta.len(),
        modified: meta.modified().ok(),
        created: meta.created().ok(),
        is_file: meta.is_file(),
        is_dir: meta.is_dir(),
    })
}

/// 以本地时间格式化时间戳
pub fn format_time(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_info() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "12345").unwrap();

        let info = file_info(&path).unwrap();
        assert_eq!(info.size, 5);
        assert!(info.is_file);
        assert!(!info.is_dir);
        assert_eq!(info.kind(), "file");
        assert!(info.modified.is_some());

        let info = file_info(dir.path()).unwrap();
        assert_eq!(info.kind(), "directory");
    }

    #[test]
    fn test_file_info_missing() {
        let dir = tempdir().unwrap();
        let err = file_info(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(None), "-");
        let s = format_time(Some(SystemTime::now()));
        assert_eq!(s.len(), 19);
    }
}
