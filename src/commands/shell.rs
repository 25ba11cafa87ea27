//! # 交互模式
//!
//! 逐行读取文件名，处理单个文件并显示预览和统计。
//!
//! ## 状态
//! - 等待输入 -> (`quit` 或输入结束) -> 退出
//! - 等待输入 -> (文件名) -> 处理 -> 等待输入
//!
//! 单个文件的任何错误只打印消息，不会中断循环。
//!
//! ## 依赖关系
//! - 使用 `files/`, `transform.rs`, `models/stats.rs`
//! - 使用 `utils/output.rs`

use crate::error::{FileError, FileOp, LinemarkError, Result};
use crate::files::{read_file, write_file};
use crate::models::StatsComparison;
use crate::transform::{preview, transform};
use crate::utils::output;

use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// 默认示例文件
pub const SAMPLE_FILE: &str = "sample.txt";

const SAMPLE_CONTENT: &str = "Hello and welcome to the file handling challenge!
This is a sample text file created for testing purposes.
Python file operations are essential for many applications.
Error handling makes our programs more robust and user-friendly.
Remember to always close your files properly!";

/// 退出指令（不区分大小写）
const QUIT: &str = "quit";
const PREVIEW_LINES: usize = 5;

const FILENAME_PROMPT: &str = "\nEnter the filename to read (or 'quit' to exit): ";
const STATS_PROMPT: &str = "\nWould you like to see file statistics? (y/n): ";

/// 执行交互模式
pub fn execute() -> Result<()> {
    match ensure_sample_file(Path::new(SAMPLE_FILE)) {
        Ok(true) => {
            output::print_success(&format!("Created {} for testing", SAMPLE_FILE));
        }
        Ok(false) => {}
        Err(e) => output::print_warning(&format!("Could not create sample file: {}", e)),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run()
}

/// 示例文件不存在时创建，返回是否新建
pub fn ensure_sample_file(path: &Path) -> std::result::Result<bool, FileError> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, SAMPLE_CONTENT).map_err(|e| FileError::from_io(path, FileOp::Write, &e))?;
    Ok(true)
}

/// 交互式处理循环
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 运行直到 `quit` 或输入结束
    pub fn run(&mut self) -> Result<()> {
        self.say(output::format_header("File Read & Write"))?;

        loop {
            let line = match self.prompt(FILENAME_PROMPT)? {
                Some(line) => line,
                None => break,
            };

            let filename = line.trim();
            if filename.to_lowercase() == QUIT {
                break;
            }

            if filename.is_empty() {
                self.say(output::format_warning("Please enter a valid filename."))?;
                continue;
            }

            self.process(Path::new(filename))?;
        }

        self.say("Goodbye!")
    }

    /// 处理单个文件
    fn process(&mut self, path: &Path) -> Result<()> {
        let content = match read_file(path) {
            Ok(content) => content,
            Err(e) => return self.say(output::format_error(&e.to_string())),
        };
        self.say(output::format_success(&format!(
            "Successfully read '{}'",
            path.display()
        )))?;

        let modified = transform(&content);

        let output_path = match write_file(path, &modified) {
            Ok(p) => p,
            Err(e) => return self.say(output::format_error(&e.to_string())),
        };
        self.say(output::format_success(&format!(
            "Successfully created modified file: '{}'",
            output_path.display()
        )))?;

        self.say(format!(
            "\nPreview of modified content (first {} lines):",
            PREVIEW_LINES
        ))?;
        self.say(output::format_separator())?;
        for line in preview(&modified, PREVIEW_LINES) {
            self.say(line)?;
        }

        let wants_stats = self
            .prompt(STATS_PROMPT)?
            .is_some_and(|answer| {
                // 只去掉行尾换行，与退出指令的处理不同
                answer.trim_end_matches(['\r', '\n']).to_lowercase() == "y"
            });

        if wants_stats {
            let stats = StatsComparison::new(&content, &modified);
            self.say("\nStatistics:")?;
            self.say(stats.to_table())?;
            self.say(format!(
                "File size increased by: {} characters",
                stats.char_delta()
            ))?;
        }

        Ok(())
    }

    /// 打印提示并读取一行，输入结束时返回 None
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text).map_err(LinemarkError::TerminalIo)?;
        self.output.flush().map_err(LinemarkError::TerminalIo)?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(LinemarkError::TerminalIo)?;

        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(LinemarkError::TerminalIo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_with(input: &str) -> String {
        let mut out = Vec::new();
        Shell::new(Cursor::new(input.as_bytes().to_vec()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_case_insensitive() {
        for word in ["quit", "QUIT", "  Quit  "] {
            let out = run_with(&format!("{}\nnever-read.txt\n", word));
            assert!(out.contains("Goodbye!"));
            assert!(!out.contains("never-read"));
        }
    }

    #[test]
    fn test_empty_input_reprompts() {
        let out = run_with("\n   \nquit\n");
        assert_eq!(out.matches("Please enter a valid filename.").count(), 2);
        assert_eq!(out.matches("Enter the filename to read").count(), 3);
    }

    #[test]
    fn test_eof_terminates() {
        let out = run_with("");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_process_with_statistics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\nworld").unwrap();

        let out = run_with(&format!("{}\ny\nquit\n", path.display()));

        let written = fs::read_to_string(dir.path().join("a_modified.txt")).unwrap();
        assert_eq!(written, "001: HELLO\n002: WORLD");
        assert!(out.contains("a_modified.txt"));
        assert!(out.contains("001: HELLO"));
        assert!(out.contains("Statistics:"));
        assert!(out.contains("File size increased by: 10 characters"));
    }

    #[test]
    fn test_statistics_declined() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();

        let out = run_with(&format!("{}\nn\nquit\n", path.display()));
        assert!(out.contains("001: X"));
        assert!(!out.contains("Statistics:"));
    }

    #[test]
    fn test_statistics_answer_not_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();

        let p = path.display();
        let out = run_with(&format!("{}\n y\n{}\nY\nquit\n", p, p));
        assert_eq!(out.matches("Statistics:").count(), 1);
    }

    #[test]
    fn test_error_does_not_stop_loop() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = dir.path().join("b.txt");
        fs::write(&present, "b").unwrap();

        let out = run_with(&format!(
            "{}\n{}\nn\nquit\n",
            missing.display(),
            present.display()
        ));

        assert!(out.contains("not found"));
        assert!(!dir.path().join("missing_modified.txt").exists());
        assert!(dir.path().join("b_modified.txt").exists());
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_preview_limited() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seven.txt");
        fs::write(&path, "1\n2\n3\n4\n5\n6\n7").unwrap();

        let out = run_with(&format!("{}\n", path.display()));
        assert!(out.contains("005: 5"));
        assert!(!out.contains("006: 6"));
    }

    #[test]
    fn test_ensure_sample_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SAMPLE_FILE);

        assert!(ensure_sample_file(&path).unwrap());
        assert!(!ensure_sample_file(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONTENT);
    }
}
