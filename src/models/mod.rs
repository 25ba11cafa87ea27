//! # 数据模型模块
//!
//! 定义内容统计数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: stats

pub mod stats;

pub use stats::StatsComparison;
