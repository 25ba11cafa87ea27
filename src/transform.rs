//! # 内容变换
//!
//! 为每一行添加三位行号前缀并转换为大写。
//!
//! ## 规则
//! - 仅以 `\n` 分行，`\r` 视为行内容的一部分
//! - 第 i 行（从 1 开始）输出为 `{i:03}: {LINE}`
//! - 以 `\n` 重新连接
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/shell.rs` 调用
//! - 纯函数，无外部依赖

/// 行号与内容之间的分隔符
const SEPARATOR: &str = ": ";

/// 对文本内容进行行号标注与大写转换
pub fn transform(content: &str) -> String {
    let mut result = String::with_capacity(content.len() + content.len() / 4 + 8);

    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&format!("{:03}{}{}", i + 1, SEPARATOR, line.to_uppercase()));
    }

    result
}

/// 取变换结果的前 n 行作为预览
pub fn preview(content: &str, n: usize) -> Vec<&str> {
    content.split('\n').take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_transform_basic() {
        let out = transform("hello\nworld");
        assert_eq!(out, "001: HELLO\n002: WORLD");
    }

    #[test]
    fn test_transform_empty() {
        assert_eq!(transform(""), "001: ");
    }

    #[test]
    fn test_transform_line_shape() {
        let input = "first line\nSecond Line\n\nmixed 42 chars!\nlast";
        let out = transform(input);
        let re = Regex::new(r"^(\d{3}): (.*)$").unwrap();

        let original: Vec<&str> = input.split('\n').collect();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), original.len());

        for (i, line) in lines.iter().enumerate() {
            let caps = re.captures(line).unwrap();
            assert_eq!(caps[1].parse::<usize>().unwrap(), i + 1);
            assert_eq!(&caps[2], original[i].to_uppercase());
        }
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        assert_eq!(transform("a\n"), "001: A\n002: ");
    }

    #[test]
    fn test_carriage_return_kept() {
        assert_eq!(transform("ab\r\ncd"), "001: AB\r\n002: CD");
    }

    #[test]
    fn test_unicode_uppercase() {
        assert_eq!(transform("straße"), "001: STRASSE");
        assert_eq!(transform("ärger"), "001: ÄRGER");
    }

    #[test]
    fn test_wide_index() {
        let input = vec!["x"; 1000].join("\n");
        let out = transform(&input);
        assert!(out.ends_with("\n1000: X"));
        assert!(out.starts_with("001: X\n"));
    }

    #[test]
    fn test_not_idempotent() {
        let once = transform("a");
        assert_eq!(transform(&once), "001: 001: A");
    }

    #[test]
    fn test_preview() {
        let out = transform("1\n2\n3\n4\n5\n6\n7");
        let lines = preview(&out, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "005: 5");
        assert_eq!(preview("001: ", 5), vec!["001: "]);
    }
}
