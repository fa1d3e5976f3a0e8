//! 低级 API
//!
//! 每次调用恰好对应一次系统调用：不加命名空间前缀，不分配内存，
//! 错误为原始的 `io::Error`。调用方可以复用缓冲区。
//!
//! 高级函数（[`crate::get`] 等）建立在这些函数之上。

use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::flags::XattrFlags;
use crate::sys::{to_cstring, Backend, Native};

/// 读取属性值到 `dest`
///
/// `attr` 为完整属性名（Linux 上需自带 "user." 等前缀）。
///
/// 成功返回写入的字节数。`dest` 为空时返回属性值的当前大小，
/// 可用于分配缓冲区；`dest` 太小时返回错误（ERANGE）。
///
/// # 示例
///
/// ```no_run
/// let mut buf = [0u8; 64];
/// let len = xattr_core::getxattr("/tmp/f", "user.foo", &mut buf)?;
/// let value = &buf[..len];
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn getxattr<P: AsRef<Path>>(path: P, attr: &str, dest: &mut [u8]) -> io::Result<usize> {
    let path = to_cstring(path.as_ref().as_os_str().as_bytes())?;
    let name = to_cstring(attr.as_bytes())?;
    Native.get(&path, &name, dest, true)
}

/// 设置属性值
///
/// `flags` 原样传给内核，见 [`XattrFlags`]。
pub fn setxattr<P: AsRef<Path>>(path: P, attr: &str, data: &[u8], flags: XattrFlags) -> io::Result<()> {
    let path = to_cstring(path.as_ref().as_os_str().as_bytes())?;
    let name = to_cstring(attr.as_bytes())?;
    Native.set(&path, &name, data, flags, true)
}

/// 列出属性名到 `dest`（`\0` 分隔，含命名空间前缀）
///
/// 成功返回写入的字节数；`dest` 为空时返回所需大小。
pub fn listxattr<P: AsRef<Path>>(path: P, dest: &mut [u8]) -> io::Result<usize> {
    let path = to_cstring(path.as_ref().as_os_str().as_bytes())?;
    Native.list(&path, dest, true)
}

/// 删除属性
pub fn removexattr<P: AsRef<Path>>(path: P, attr: &str) -> io::Result<()> {
    let path = to_cstring(path.as_ref().as_os_str().as_bytes())?;
    let name = to_cstring(attr.as_bytes())?;
    Native.remove(&path, &name, true)
}
