//! macOS/iOS 平台实现
//!
//! Darwin 的 xattr 调用多了 position 与 options 参数；属性名没有命名空间前缀。

use std::ffi::CStr;
use std::io;

use super::{cvt, cvt_size, out_buf, Backend};
use crate::flags::XattrFlags;
use crate::namespace::Namespace;

/// macOS 扩展属性系统调用
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOs;

fn options(follow: bool) -> libc::c_int {
    if follow {
        0
    } else {
        libc::XATTR_NOFOLLOW
    }
}

impl Backend for MacOs {
    fn namespace_prefix(&self, namespace: Namespace) -> Option<&'static str> {
        match namespace {
            Namespace::User => Some(""),
            _ => None,
        }
    }

    fn get(&self, path: &CStr, name: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize> {
        let (ptr, len) = out_buf(dest);
        // SAFETY: path/name 是有效的 C 字符串；ptr 为 NULL（len 为 0）或指向 len 字节的可写缓冲区
        let ret = unsafe { libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, len, 0, options(follow)) };
        cvt_size(ret)
    }

    fn set(
        &self,
        path: &CStr,
        name: &CStr,
        data: &[u8],
        flags: XattrFlags,
        follow: bool,
    ) -> io::Result<()> {
        let value = data.as_ptr().cast::<libc::c_void>();
        // SAFETY: value 指向 data.len() 字节的只读数据
        let ret = unsafe {
            libc::setxattr(
                path.as_ptr(),
                name.as_ptr(),
                value,
                data.len(),
                0,
                flags.bits() | options(follow),
            )
        };
        cvt(ret)
    }

    fn list(&self, path: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize> {
        let (ptr, len) = out_buf(dest);
        // SAFETY: 同 get
        let ret = unsafe { libc::listxattr(path.as_ptr(), ptr.cast(), len, options(follow)) };
        cvt_size(ret)
    }

    fn remove(&self, path: &CStr, name: &CStr, follow: bool) -> io::Result<()> {
        // SAFETY: path/name 是有效的 C 字符串
        let ret = unsafe { libc::removexattr(path.as_ptr(), name.as_ptr(), options(follow)) };
        cvt(ret)
    }

    fn is_not_exist(&self, err: &io::Error) -> bool {
        err.raw_os_error() == Some(libc::ENOATTR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(MacOs.namespace_prefix(Namespace::User), Some(""));
        assert_eq!(MacOs.namespace_prefix(Namespace::Security), None);
    }

    #[test]
    fn test_is_not_exist() {
        assert!(MacOs.is_not_exist(&io::Error::from_raw_os_error(libc::ENOATTR)));
        assert!(!MacOs.is_not_exist(&io::Error::from_raw_os_error(libc::ENOENT)));
    }
}
