//! xattr 公共 API
//!
//! 在平台适配层之上提供带缓冲区管理和命名空间前缀的高级操作。
//!
//! # 读取流程
//!
//! get/list 先以空缓冲区查询所需大小，再分配恰好大小的缓冲区读取一次。
//! 两次系统调用之间属性可能被其它进程修改：缩小时结果按第二次返回的长度截断，
//! 增大时内核返回 ERANGE，作为普通错误交给调用方。不做重试。

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use log::{debug, trace};

use crate::config::XattrConfig;
use crate::error::{Error, Op, Result};
use crate::flags::XattrFlags;
use crate::namespace::{apply_prefix, strip_prefix};
use crate::parse::split_nul_terminated;
use crate::sys::{to_cstring, Backend, Native};

/// 扩展属性访问句柄
///
/// 绑定一个平台后端与一份 [`XattrConfig`]。默认后端为编译期选出的 [`Native`]。
///
/// # 示例
///
/// ```no_run
/// use xattr_core::{Namespace, XattrConfig, Xattrs};
///
/// let xattrs = Xattrs::new(XattrConfig::default().with_namespace(Namespace::Trusted));
/// xattrs.set("/tmp/f", "owner", b"alice")?;
/// let value = xattrs.get("/tmp/f", "owner")?;
/// # Ok::<(), xattr_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Xattrs<B: Backend = Native> {
    backend: B,
    config: XattrConfig,
}

impl Xattrs<Native> {
    /// 使用本机后端创建句柄
    pub fn new(config: XattrConfig) -> Self {
        Self {
            backend: Native,
            config,
        }
    }
}

impl<B: Backend> Xattrs<B> {
    /// 使用指定后端创建句柄
    pub fn with_backend(backend: B, config: XattrConfig) -> Self {
        Self { backend, config }
    }

    /// 当前配置
    pub fn config(&self) -> &XattrConfig {
        &self.config
    }

    /// 平台后端
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 获取扩展属性值
    ///
    /// 属性值为空时返回空 `Vec`，不报错。
    pub fn get<P: AsRef<Path>>(&self, path: P, attr: &str) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let c_path = self.c_path(Op::Getxattr, path, attr)?;
        let name = self.full_name(Op::Getxattr, path, attr)?;
        let follow = self.config.follow_symlinks;

        // 1. 查询大小
        let size = self
            .backend
            .get(&c_path, &name, &mut [], follow)
            .map_err(|err| self.wrap(Op::Getxattr, path, attr, err))?;
        trace!("[XATTR] getxattr {} {}: size={}", path.display(), attr, size);
        if size == 0 {
            return Ok(Vec::new());
        }

        // 2. 读入恰好大小的缓冲区，只信任第二次返回的长度
        let mut buf = vec![0u8; size];
        let size = self
            .backend
            .get(&c_path, &name, &mut buf, follow)
            .map_err(|err| self.wrap(Op::Getxattr, path, attr, err))?;
        buf.truncate(size);
        Ok(buf)
    }

    /// 设置扩展属性（不存在则创建，存在则替换）
    ///
    /// 仅创建/仅替换语义见 [`crate::setxattr`]。
    pub fn set<P: AsRef<Path>>(&self, path: P, attr: &str, data: &[u8]) -> Result<()> {
        let path = path.as_ref();
        let c_path = self.c_path(Op::Setxattr, path, attr)?;
        let name = self.full_name(Op::Setxattr, path, attr)?;

        self.backend
            .set(&c_path, &name, data, XattrFlags::empty(), self.config.follow_symlinks)
            .map_err(|err| self.wrap(Op::Setxattr, path, attr, err))
    }

    /// 删除扩展属性
    pub fn remove<P: AsRef<Path>>(&self, path: P, attr: &str) -> Result<()> {
        let path = path.as_ref();
        let c_path = self.c_path(Op::Removexattr, path, attr)?;
        let name = self.full_name(Op::Removexattr, path, attr)?;

        self.backend
            .remove(&c_path, &name, self.config.follow_symlinks)
            .map_err(|err| self.wrap(Op::Removexattr, path, attr, err))
    }

    /// 列出当前命名空间下的属性名（已去掉前缀）
    ///
    /// 其它命名空间的属性（如 "security.selinux"）不会出现在结果中。
    /// 顺序由文件系统决定。
    pub fn list<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let c_path = self.c_path(Op::Listxattr, path, "")?;
        let prefix = self.prefix(Op::Listxattr, path, "")?;
        let follow = self.config.follow_symlinks;

        let size = self
            .backend
            .list(&c_path, &mut [], follow)
            .map_err(|err| self.wrap(Op::Listxattr, path, "", err))?;
        trace!("[XATTR] listxattr {}: size={}", path.display(), size);
        if size == 0 {
            return Ok(Vec::new());
        }

        let mut buf = vec![0u8; size];
        let size = self
            .backend
            .list(&c_path, &mut buf, follow)
            .map_err(|err| self.wrap(Op::Listxattr, path, "", err))?;
        buf.truncate(size);

        let names = split_nul_terminated(&buf)
            .into_iter()
            .filter_map(|full| match strip_prefix(prefix, &full) {
                Some(name) => Some(name.to_owned()),
                None => {
                    trace!("[XATTR] listxattr {}: skip {:?}", path.display(), full);
                    None
                }
            })
            .collect();
        Ok(names)
    }

    /// 包装底层错误
    fn wrap(&self, op: Op, path: &Path, attr: &str, err: io::Error) -> Error {
        let not_exist = self.backend.is_not_exist(&err);
        debug!("[XATTR] {} {} {} failed: {}", op, path.display(), attr, err);
        Error::new(op, path, attr, not_exist, err)
    }

    fn prefix(&self, op: Op, path: &Path, attr: &str) -> Result<&'static str> {
        self.backend
            .namespace_prefix(self.config.namespace)
            .ok_or_else(|| {
                self.wrap(op, path, attr, io::Error::from_raw_os_error(libc::ENOTSUP))
            })
    }

    fn full_name(&self, op: Op, path: &Path, attr: &str) -> Result<CString> {
        let prefix = self.prefix(op, path, attr)?;
        to_cstring(apply_prefix(prefix, attr).as_bytes())
            .map_err(|err| self.wrap(op, path, attr, err))
    }

    fn c_path(&self, op: Op, path: &Path, attr: &str) -> Result<CString> {
        to_cstring(path.as_os_str().as_bytes()).map_err(|err| self.wrap(op, path, attr, err))
    }
}

/// 获取扩展属性值
///
/// 使用默认配置（user 命名空间，跟随符号链接）。
///
/// # 示例
///
/// ```no_run
/// xattr_core::set("/tmp/f", "foo", b"bar")?;
/// assert_eq!(xattr_core::get("/tmp/f", "foo")?, b"bar");
/// # Ok::<(), xattr_core::Error>(())
/// ```
pub fn get<P: AsRef<Path>>(path: P, attr: &str) -> Result<Vec<u8>> {
    Xattrs::<Native>::default().get(path, attr)
}

/// 设置扩展属性
pub fn set<P: AsRef<Path>>(path: P, attr: &str, data: &[u8]) -> Result<()> {
    Xattrs::<Native>::default().set(path, attr, data)
}

/// 删除扩展属性
pub fn remove<P: AsRef<Path>>(path: P, attr: &str) -> Result<()> {
    Xattrs::<Native>::default().remove(path, attr)
}

/// 列出扩展属性名
pub fn list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Xattrs::<Native>::default().list(path)
}


#[cfg(test)]
mod native_tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_util::scratch_file;

    #[test]
    fn test_set_get_list_remove() {
        let Some(file) = scratch_file() else { return };
        let path = file.path();

        set(path, "foo", b"bar").unwrap();
        assert_eq!(get(path, "foo").unwrap(), b"bar");
        assert!(list(path).unwrap().contains(&"foo".to_owned()));

        remove(path, "foo").unwrap();
        let err = get(path, "foo").unwrap_err();
        assert!(crate::is_not_exist(&err));
    }

    #[test]
    fn test_list_exact_set() {
        let Some(file) = scratch_file() else { return };
        let path = file.path();

        for name in ["a", "b", "c"] {
            set(path, name, name.as_bytes()).unwrap();
        }
        let mut names = list(path).unwrap();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_binary_and_empty_values() {
        let Some(file) = scratch_file() else { return };
        let path = file.path();

        let value = [0u8, 1, 0, 255, 0];
        set(path, "bin", &value).unwrap();
        assert_eq!(get(path, "bin").unwrap(), value);

        set(path, "empty", b"").unwrap();
        assert!(get(path, "empty").unwrap().is_empty());
    }

    #[test]
    fn test_absent_attribute() {
        let Some(file) = scratch_file() else { return };
        let path = file.path();

        let err = get(path, "never-set").unwrap_err();
        assert!(err.is_not_exist());
        assert_eq!(err.attr(), "never-set");
        assert_eq!(err.path(), path);
        assert!(!list(path).unwrap().contains(&"never-set".to_owned()));

        let err = remove(path, "never-set").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_symlink_not_followed() {
        let Some(file) = scratch_file() else { return };
        let link = file.path().with_extension("lnk");
        std::os::unix::fs::symlink(file.path(), &link).unwrap();

        set(file.path(), "foo", b"bar").unwrap();
        assert_eq!(get(&link, "foo").unwrap(), b"bar");

        // Linux 不允许符号链接本身带 user 属性，读取时报告不存在
        let nofollow = Xattrs::new(XattrConfig::default().with_follow_symlinks(false));
        let err = nofollow.get(&link, "foo").unwrap_err();
        assert!(err.is_not_exist());

        std::fs::remove_file(&link).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = get("/nonexistent/xattr_core/file", "foo").unwrap_err();
        assert!(!err.is_not_exist());
        assert_eq!(err.io_error().raw_os_error(), Some(libc::ENOENT));
    }
}
