//! # 文件读写模块
//!
//! 文本文件的读取、派生路径写入以及元数据查询。
//! 所有操作返回 `FileError` 分类错误，文件句柄在函数返回前释放。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 使用 `error.rs` 的 `FileError`
//! - 子模块: reader, writer, info

pub mod info;
pub mod reader;
pub mod writer;

pub use info::{file_info, FileInfo};
pub use reader::read_file;
pub use writer::{derive_output_path, write_file};
