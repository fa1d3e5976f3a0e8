//! setxattr 标志

use bitflags::bitflags;

bitflags! {
    /// setxattr 标志
    ///
    /// 位值即各平台的 `XATTR_*` 常量，原样传给内核。
    /// 空标志表示“不存在则创建，存在则替换”。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct XattrFlags: libc::c_int {
        /// 仅创建：属性已存在时失败（EEXIST）
        const CREATE  = libc::XATTR_CREATE;
        /// 仅替换：属性不存在时失败
        const REPLACE = libc::XATTR_REPLACE;
    }
}
