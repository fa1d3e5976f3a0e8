//! xattr_core: 跨平台的文件扩展属性（xattr）访问
//!
//! 各 Unix 系统的扩展属性系统调用在名称、参数、错误码和命名空间前缀上都不相同。
//! 这个库把这些差异藏在一组统一的操作后面：
//! - **高级 API**：[`get`]、[`set`]、[`list`]、[`remove`]，自动管理缓冲区，
//!   自动加/去 "user." 前缀，错误包装为 [`Error`]
//! - **低级 API**：[`getxattr`]、[`setxattr`]、[`listxattr`]、[`removexattr`]，
//!   每次调用对应一次系统调用，返回原始 `io::Error`
//!
//! 是否支持扩展属性取决于文件系统；Linux 上部分文件系统需要 `user_xattr` 挂载选项。
//!
//! # 示例
//!
//! ```rust,no_run
//! use xattr_core::{get, set, list, remove, is_not_exist};
//!
//! fn main() -> xattr_core::Result<()> {
//!     set("/tmp/f", "foo", b"bar")?;
//!     assert_eq!(get("/tmp/f", "foo")?, b"bar");
//!     assert!(list("/tmp/f")?.contains(&"foo".to_string()));
//!
//!     remove("/tmp/f", "foo")?;
//!     let err = get("/tmp/f", "foo").unwrap_err();
//!     assert!(is_not_exist(&err));
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`sys`] - 平台适配层（编译期选择）
//! - [`flags`] - setxattr 标志
//! - [`namespace`] - 命名空间前缀

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

/// 错误处理
pub mod error;

/// 平台适配层
pub mod sys;

/// setxattr 标志
pub mod flags;

/// 命名空间
pub mod namespace;

/// 配置
pub mod config;

/// 高级 API
mod api;

/// 低级 API
mod raw;

/// listxattr 结果解析
mod parse;

#[cfg(test)]
mod test_util;

// ===== 公共导出 =====

// 错误处理
pub use error::{is_not_exist, Error, ErrorKind, Op, Result};

// 配置与类型
pub use config::XattrConfig;
pub use flags::XattrFlags;
pub use namespace::Namespace;

// 高级 API
pub use api::{get, list, remove, set, Xattrs};

// 低级 API
pub use raw::{getxattr, listxattr, removexattr, setxattr};
