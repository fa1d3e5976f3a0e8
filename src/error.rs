//! 错误类型定义
//!
//! 高级操作（get/set/list/remove）返回的错误都包装为 [`Error`]，
//! 其中记录了失败的操作名、文件路径、属性名以及底层系统错误。
//! 低级操作（getxattr 等）直接返回原始的 `io::Error`，不做包装。

use core::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// 失败的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// 读取属性值
    Getxattr,
    /// 设置属性值
    Setxattr,
    /// 列出属性名
    Listxattr,
    /// 删除属性
    Removexattr,
}

impl Op {
    /// 操作名（与系统调用同名）
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Getxattr => "getxattr",
            Op::Setxattr => "setxattr",
            Op::Listxattr => "listxattr",
            Op::Removexattr => "removexattr",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 错误类别
///
/// 由底层 errno 推导而来，便于调用方按类别处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 属性不存在
    NotFound,
    /// 文件系统或平台不支持扩展属性
    Unsupported,
    /// 权限错误
    PermissionDenied,
    /// 属性名过长
    NameTooLong,
    /// 缓冲区太小或值超出限制
    Range,
    /// 空间不足
    NoSpace,
    /// 无效参数
    InvalidInput,
    /// 其它 I/O 错误
    Io,
}

/// 扩展属性操作错误
#[derive(Debug)]
pub struct Error {
    op: Op,
    path: PathBuf,
    attr: String,
    not_exist: bool,
    source: io::Error,
}

impl Error {
    /// 创建新错误
    ///
    /// `attr` 为调用方传入的属性名（不含命名空间前缀），list 操作为空串。
    /// `not_exist` 由平台适配层判定（见 [`crate::sys::Backend::is_not_exist`]）。
    pub(crate) fn new(op: Op, path: &Path, attr: &str, not_exist: bool, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            attr: attr.to_owned(),
            not_exist,
            source,
        }
    }

    /// 失败的操作
    pub const fn op(&self) -> Op {
        self.op
    }

    /// 文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 属性名（list 操作为空串）
    pub fn attr(&self) -> &str {
        &self.attr
    }

    /// 底层系统错误
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// 取出底层系统错误
    pub fn into_io_error(self) -> io::Error {
        self.source
    }

    /// 属性是否不存在
    pub const fn is_not_exist(&self) -> bool {
        self.not_exist
    }

    /// 获取错误类别
    pub fn kind(&self) -> ErrorKind {
        if self.not_exist {
            return ErrorKind::NotFound;
        }
        match self.source.raw_os_error() {
            Some(libc::ENOTSUP) => ErrorKind::Unsupported,
            Some(libc::EPERM) | Some(libc::EACCES) => ErrorKind::PermissionDenied,
            Some(libc::ENAMETOOLONG) => ErrorKind::NameTooLong,
            Some(libc::ERANGE) | Some(libc::E2BIG) => ErrorKind::Range,
            Some(libc::ENOSPC) | Some(libc::EDQUOT) => ErrorKind::NoSpace,
            Some(libc::EINVAL) => ErrorKind::InvalidInput,
            Some(_) => ErrorKind::Io,
            None => match self.source.kind() {
                io::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
                io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
                _ => ErrorKind::Io,
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}: {}", self.op, self.path.display(), self.attr, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}

/// 判断错误是否表示属性不存在
///
/// 只有高级操作返回的 [`Error`] 才能被识别；原始的 `io::Error`
/// （例如 [`crate::getxattr`] 的返回值）一律返回 `false`。
pub fn is_not_exist(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<Error>().is_some_and(Error::is_not_exist)
}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;
