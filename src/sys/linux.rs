//! Linux/Android 平台实现

use std::ffi::CStr;
use std::io;

use super::{cvt, cvt_size, out_buf, Backend};
use crate::flags::XattrFlags;
use crate::namespace::Namespace;

/// Linux 扩展属性系统调用
///
/// `follow == false` 时使用 `l*xattr`，作用于符号链接本身。
#[derive(Debug, Clone, Copy, Default)]
pub struct Linux;

impl Backend for Linux {
    fn namespace_prefix(&self, namespace: Namespace) -> Option<&'static str> {
        Some(namespace.linux_prefix())
    }

    fn get(&self, path: &CStr, name: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize> {
        let (ptr, len) = out_buf(dest);
        // SAFETY: path/name 是有效的 C 字符串；ptr 为 NULL（len 为 0）或指向 len 字节的可写缓冲区
        let ret = unsafe {
            if follow {
                libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, len)
            } else {
                libc::lgetxattr(path.as_ptr(), name.as_ptr(), ptr, len)
            }
        };
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
            if follow {
                libc::setxattr(path.as_ptr(), name.as_ptr(), value, data.len(), flags.bits())
            } else {
                libc::lsetxattr(path.as_ptr(), name.as_ptr(), value, data.len(), flags.bits())
            }
        };
        cvt(ret)
    }

    fn list(&self, path: &CStr, dest: &mut [u8], follow: bool) -> io::Result<usize> {
        let (ptr, len) = out_buf(dest);
        // SAFETY: 同 get
        let ret = unsafe {
            if follow {
                libc::listxattr(path.as_ptr(), ptr.cast(), len)
            } else {
                libc::llistxattr(path.as_ptr(), ptr.cast(), len)
            }
        };
        cvt_size(ret)
    }

    fn remove(&self, path: &CStr, name: &CStr, follow: bool) -> io::Result<()> {
        // SAFETY: path/name 是有效的 C 字符串
        let ret = unsafe {
            if follow {
                libc::removexattr(path.as_ptr(), name.as_ptr())
            } else {
                libc::lremovexattr(path.as_ptr(), name.as_ptr())
            }
        };
        cvt(ret)
    }

    fn is_not_exist(&self, err: &io::Error) -> bool {
        err.raw_os_error() == Some(libc::ENODATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(Linux.namespace_prefix(Namespace::User), Some("user."));
        assert_eq!(Linux.namespace_prefix(Namespace::Trusted), Some("trusted."));
    }

    #[test]
    fn test_is_not_exist() {
        assert!(Linux.is_not_exist(&io::Error::from_raw_os_error(libc::ENODATA)));
        assert!(!Linux.is_not_exist(&io::Error::from_raw_os_error(libc::ENOENT)));
        assert!(!Linux.is_not_exist(&io::Error::new(io::ErrorKind::NotFound, "x")));
    }
}
