//! 高级 API 配置

use crate::namespace::Namespace;

/// 扩展属性访问配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrConfig {
    /// 属性所在的命名空间
    pub namespace: Namespace,
    /// 是否跟随符号链接（`false` 时操作链接本身）
    pub follow_symlinks: bool,
}

impl Default for XattrConfig {
    fn default() -> Self {
        Self {
            namespace: Namespace::User,
            follow_symlinks: true,
        }
    }
}

impl XattrConfig {
    /// 指定命名空间
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// 指定是否跟随符号链接
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}
