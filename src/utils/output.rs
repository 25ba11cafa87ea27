//! # 美化输出工具
//!
//! 提供统一的终端输出样式。`format_*` 返回带标记的字符串，
//! 供写入任意输出流（如交互模式）；`print_*` 直接打印到终端。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 40;

/// 成功消息
pub fn format_success(msg: &str) -> String {
    format!("{} {}", "[OK]".green().bold(), msg)
}

/// 错误消息
pub fn format_error(msg: &str) -> String {
    format!("{} {}", "[ERR]".red().bold(), msg)
}

/// 警告消息
pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "[WARN]".yellow().bold(), msg)
}

/// 信息消息
pub fn format_info(msg: &str) -> String {
    format!("{} {}", "[*]".blue().bold(), msg)
}

/// 处理结果行（`[OK]` / `[SKIP]` / `[ERR]` 开头）
pub fn format_outcome(line: &str) -> String {
    let (tag, rest) = match line.split_once(' ') {
        Some(parts) => parts,
        None => return line.to_string(),
    };

    let tag = match tag {
        "[OK]" => tag.green().bold(),
        "[SKIP]" => tag.dimmed(),
        "[ERR]" => tag.red().bold(),
        _ => return line.to_string(),
    };
    format!("{} {}", tag, rest)
}

/// 分隔线
pub fn format_separator() -> String {
    "─".repeat(RULE_WIDTH).dimmed().to_string()
}

/// 标题栏
pub fn format_header(title: &str) -> String {
    let line = "─".repeat(RULE_WIDTH);
    format!("\n{}\n  {}\n{}", line.dimmed(), title.bold(), line.dimmed())
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{}", format_success(msg));
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{}", format_error(msg));
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{}", format_warning(msg));
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{}", format_info(msg));
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印单个文件的处理结果行，按行首标记着色
pub fn print_outcome(line: &str) {
    println!("{}", format_outcome(line));
}

/// 打印标题栏
pub fn print_header(title: &str) {
    println!("{}\n", format_header(title));
}
