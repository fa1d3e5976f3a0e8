//! listxattr 结果解析

/// 将以 `\0` 结尾的名称序列转换为字符串列表
///
/// 缓冲区格式为 `"user.a\0user.b\0"`。每遇到一个 `\0` 产生一个名称，
/// 末尾没有 `\0` 终止的残段直接丢弃。非 UTF-8 字节以 U+FFFD 替换。
pub(crate) fn split_nul_terminated(buf: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut offset = 0;

    for (index, &byte) in buf.iter().enumerate() {
        if byte == 0 {
            names.push(String::from_utf8_lossy(&buf[offset..index]).into_owned());
            offset = index + 1;
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        let names = split_nul_terminated(b"user.a\0user.bb\0");
        assert_eq!(names, vec!["user.a", "user.bb"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_nul_terminated(b"").is_empty());
        assert_eq!(split_nul_terminated(b"\0"), vec![""]);
    }

    #[test]
    fn test_trailing_segment_dropped() {
        let names = split_nul_terminated(b"user.a\0user.partial");
        assert_eq!(names, vec!["user.a"]);
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let names = split_nul_terminated(b"user.\xff\0");
        assert_eq!(names, vec!["user.\u{fffd}"]);
    }
}
