//! 测试辅助

use std::path::Path;

use tempfile::NamedTempFile;

/// 创建一个支持 user 扩展属性的临时文件
///
/// 依次尝试系统临时目录与 crate 目录（/tmp 可能是不支持 user xattr 的 tmpfs）。
/// 都不支持时返回 `None`，调用方直接跳过测试。
pub(crate) fn scratch_file() -> Option<NamedTempFile> {
    let dirs = [std::env::temp_dir(), Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()];

    for dir in dirs {
        let Ok(file) = NamedTempFile::new_in(&dir) else {
            continue;
        };
        if crate::set(file.path(), "xattr_core.probe", b"1").is_ok()
            && crate::remove(file.path(), "xattr_core.probe").is_ok()
        {
            return Some(file);
        }
    }

    eprintln!("user xattrs unsupported here, skipping filesystem test");
    None
}
