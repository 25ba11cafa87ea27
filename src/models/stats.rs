//! # 内容统计
//!
//! 行数、字符数以及变换前后的对比。
//!
//! ## 依赖关系
//! - 被 `commands/shell.rs` 使用
//! - 使用 `tabled` 生成终端表格

use tabled::{Table, Tabled};

/// 单份内容的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    /// 以 `\n` 分隔的行数（空内容计为 1 行）
    pub lines: usize,
    /// Unicode 字符数
    pub chars: usize,
}

impl ContentStats {
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').count(),
            chars: content.chars().count(),
        }
    }
}

/// 表格行
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "File")]
    label: &'static str,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Characters")]
    chars: usize,
}

/// 变换前后对比
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsComparison {
    pub original: ContentStats,
    pub modified: ContentStats,
}

impl StatsComparison {
    pub fn new(original: &str, modified: &str) -> Self {
        Self {
            original: ContentStats::from_content(original),
            modified: ContentStats::from_content(modified),
        }
    }

    /// 字符数变化量（可为负）
    pub fn char_delta(&self) -> i64 {
        self.modified.chars as i64 - self.original.chars as i64
    }

    /// 渲染为终端表格
    pub fn to_table(&self) -> String {
        let rows = [
            StatsRow {
                label: "Original",
                lines: self.original.lines,
                chars: self.original.chars,
            },
            StatsRow {
                label: "Modified",
                lines: self.modified.lines,
                chars: self.modified.chars,
            },
        ];
        Table::new(rows).to_string()
    }
}
