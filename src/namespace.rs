//! xattr 命名空间前缀处理
//!
//! Linux 要求属性名带命名空间前缀（如 "user."）。高级 API 在
//! get/set/remove 时自动加上前缀，list 时去掉前缀，调用方看不到平台差异。

/// 扩展属性命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Namespace {
    /// 用户自定义属性（默认）
    #[default]
    User,
    /// 可信属性（需要 CAP_SYS_ADMIN）
    Trusted,
    /// 安全标签（如 SELinux）
    Security,
    /// 系统属性（如 ACL）
    System,
}

/// 命名空间前缀表
static PREFIX_TABLE: &[(Namespace, &str)] = &[
    (Namespace::User, "user."),
    (Namespace::Trusted, "trusted."),
    (Namespace::Security, "security."),
    (Namespace::System, "system."),
];

impl Namespace {
    /// 该命名空间在 Linux 上的前缀
    pub fn linux_prefix(self) -> &'static str {
        PREFIX_TABLE
            .iter()
            .find(|(ns, _)| *ns == self)
            .map(|(_, prefix)| *prefix)
            .unwrap_or("")
    }

    /// 根据完整属性名推断命名空间
    ///
    /// ```
    /// use xattr_core::Namespace;
    /// assert_eq!(Namespace::from_linux_name("security.selinux"), Some(Namespace::Security));
    /// assert_eq!(Namespace::from_linux_name("comment"), None);
    /// ```
    pub fn from_linux_name(full_name: &str) -> Option<Self> {
        PREFIX_TABLE
            .iter()
            .find(|(_, prefix)| full_name.starts_with(prefix))
            .map(|(ns, _)| *ns)
    }
}

/// 给属性名加上前缀
pub(crate) fn apply_prefix(prefix: &str, attr: &str) -> String {
    let mut full = String::with_capacity(prefix.len() + attr.len());
    full.push_str(prefix);
    full.push_str(attr);
    full
}

/// 去掉属性名的前缀
///
/// 不带该前缀的名称返回 `None`，由调用方过滤掉。
pub(crate) fn strip_prefix<'a>(prefix: &str, full_name: &'a str) -> Option<&'a str> {
    full_name.strip_prefix(prefix)
}
