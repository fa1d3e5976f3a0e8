//! 平台适配层
//!
//! 每个平台一个实现，编译期通过 `cfg(target_os)` 选出 [`Native`]，
//! 不做运行时分支。适配层只负责调用系统调用，错误原样返回。
//!
//! sys/linux.rs 对应 Linux/Android（getxattr 系列，属性不存在为 ENODATA）
//! sys/macos.rs 对应 macOS/iOS（带 position/options 参数，属性不存在为 ENOATTR）

use std::ffi::{CStr, CString};
use std::io;

use crate::flags::XattrFlags;
use crate::namespace::Namespace;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::Linux as Native;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod macos;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub use macos::MacOs as Native;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios"
)))]
compile_error!("xattr_core supports only Linux, Android, macOS and iOS");

/// 扩展属性系统调用接口
///
/// 实现此 trait 以提供一个平台的 get/set/list/remove 系统调用。
/// `dest` 为空时只查询所需的缓冲区大小。
///
/// # 示例
///
/// ```rust,ignore
/// use xattr_core::sys::{Backend, Native};
///
/// let path = c"/tmp/f";
/// let size = Native.get(path, c"user.foo", &mut [], true)?;
/// let mut buf = vec![0u8; size];
/// let size = Native.get(path, c"user.foo", &mut buf, true)?;
/// ```
pub trait Backend {
    /// 命名空间对应的属性名前缀
    ///
    /// 平台不支持该命名空间时返回 `None`。
    fn namespace_prefix(&self, namespace: Namespace) -> Option<&'static str>;

    /// 读取属性值
    ///
    /// 返回写入 `dest` 的字节数；`dest` 为空时返回值的实际大小。
    fn get(&self, path: &CStr, name: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize>;

    /// 设置属性值，`flags` 原样传给内核
    fn set(
        &self,
        path: &CStr,
        name: &CStr,
        data: &[u8],
        flags: XattrFlags,
        follow: bool,
    ) -> io::Result<()>;

    /// 列出属性名（`\0` 分隔）
    ///
    /// 返回写入 `dest` 的字节数；`dest` 为空时返回所需大小。
    fn list(&self, path: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize>;

    /// 删除属性
    fn remove(&self, path: &CStr, name: &CStr, follow: bool) -> io::Result<()>;

    /// 错误是否表示属性不存在
    fn is_not_exist(&self, err: &io::Error) -> bool;
}

/// 转换为 C 字符串，内部含 `\0` 时返回 InvalidInput
pub(crate) fn to_cstring(bytes: &[u8]) -> io::Result<CString> {
    CString::new(bytes).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "xattr path or name contains a nul byte")
    })
}

/// 输出缓冲区指针；空缓冲区传 NULL，表示只查询大小
fn out_buf(dest: &mut [u8]) -> (*mut libc::c_void, usize) {
    if dest.is_empty() {
        (core::ptr::null_mut(), 0)
    } else {
        (dest.as_mut_ptr().cast(), dest.len())
    }
}

/// 转换返回长度的系统调用结果
fn cvt_size(ret: libc::ssize_t) -> io::Result<usize> {
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(ret as usize)
    }
}

/// 转换返回 0/-1 的系统调用结果
fn cvt(ret: libc::c_int) -> io::Result<()> {
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
