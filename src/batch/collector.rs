//! # 文件收集器
//!
//! 将批量输入展开为待处理文件列表。
//!
//! ## 功能
//! - 目录输入按 glob 模式展开（可递归）
//! - 其他路径原样保留（不存在的路径由执行器报告错误）
//! - 跳过目录中已生成的 `_modified` 输出文件
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{LinemarkError, Result};
use crate::files::writer::OUTPUT_SUFFIX;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    inputs: Vec<PathBuf>,
    /// 文件名匹配模式（None 表示全部匹配）
    pattern: Option<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            pattern: None,
            recursive: false,
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let pattern = glob::Pattern::new(pattern).map_err(|e| LinemarkError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        self.pattern = Some(pattern);
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有待处理文件，保持输入顺序
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_dir() {
                files.extend(self.expand_dir(input));
            } else {
                files.push(input.clone());
            }
        }

        files
    }

    fn expand_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否匹配且不是派生输出
    fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        let is_output = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.ends_with(OUTPUT_SUFFIX));

        !is_output && self.pattern.as_ref().map_or(true, |p| p.matches(name))
    }
}
