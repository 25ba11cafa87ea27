//! # 批量处理模块
//!
//! 对多个文件顺序执行 读取 -> 变换 -> 写入。
//!
//! ## 功能
//! - 展开目录输入并匹配文件名
//! - 顺序处理，逐文件记录结果
//! - 进度反馈与统计
//! - CSV 结果导出
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use runner::BatchRunner;
