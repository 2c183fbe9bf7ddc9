//! 会话存储
//!
//! token 与随行的身份快照落在 LocalStorage，刷新页面后会话仍在。
//! 所有键集中在这里定义，`clear` 必须覆盖全部会话键；
//! 配置键（`parkdesk_api_base`）不属于会话，登出不动它。

use parkdesk_shared::UserKind;

use crate::logging::console_error;
use crate::web::LocalStorage;

pub const KEY_TOKEN: &str = "parkdesk_token";
pub const KEY_USER_KIND: &str = "parkdesk_user_kind";
pub const KEY_DISPLAY_NAME: &str = "parkdesk_display_name";

/// 会话存储的注入点
///
/// 客户端与登录流程只依赖这个 trait，浏览器实现落 LocalStorage，
/// 测试实现落内存。
pub trait TokenStore {
    /// 当前 token；空串与纯空白视作不存在
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn user_kind(&self) -> Option<UserKind>;
    fn display_name(&self) -> Option<String>;
    /// 登录成功后记录身份快照，供刷新后恢复会话
    fn remember_identity(&self, kind: UserKind, display_name: &str);
    /// 清除全部会话键，幂等
    fn clear(&self);
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 生产实现：LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        non_blank(LocalStorage::get(KEY_TOKEN))
    }

    fn set_token(&self, token: &str) {
        if !LocalStorage::set(KEY_TOKEN, token) {
            console_error!("[session] token 写入 LocalStorage 失败");
        }
    }

    fn user_kind(&self) -> Option<UserKind> {
        UserKind::from_wire_name(&LocalStorage::get(KEY_USER_KIND)?)
    }

    fn display_name(&self) -> Option<String> {
        non_blank(LocalStorage::get(KEY_DISPLAY_NAME))
    }

    fn remember_identity(&self, kind: UserKind, display_name: &str) {
        LocalStorage::set(KEY_USER_KIND, kind.wire_name());
        LocalStorage::set(KEY_DISPLAY_NAME, display_name);
    }

    fn clear(&self) {
        LocalStorage::delete(KEY_TOKEN);
        LocalStorage::delete(KEY_USER_KIND);
        LocalStorage::delete(KEY_DISPLAY_NAME);
    }
}

/// 测试实现：内存存储
#[cfg(test)]
pub mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    // 测试里客户端与事件回调共享同一份存储
    impl<S: TokenStore> TokenStore for Rc<S> {
        fn token(&self) -> Option<String> {
            (**self).token()
        }
        fn set_token(&self, token: &str) {
            (**self).set_token(token)
        }
        fn user_kind(&self) -> Option<UserKind> {
            (**self).user_kind()
        }
        fn display_name(&self) -> Option<String> {
            (**self).display_name()
        }
        fn remember_identity(&self, kind: UserKind, display_name: &str) {
            (**self).remember_identity(kind, display_name)
        }
        fn clear(&self) {
            (**self).clear()
        }
    }

    /// 内存版会话存储，行为与浏览器实现对齐
    #[derive(Debug, Default)]
    pub struct MemoryTokenStore {
        token: RefCell<Option<String>>,
        kind: RefCell<Option<UserKind>>,
        display_name: RefCell<Option<String>>,
    }

    impl MemoryTokenStore {
        pub fn with_token(token: &str) -> Self {
            let store = Self::default();
            store.set_token(token);
            store
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn token(&self) -> Option<String> {
            non_blank(self.token.borrow().clone())
        }

        fn set_token(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn user_kind(&self) -> Option<UserKind> {
            *self.kind.borrow()
        }

        fn display_name(&self) -> Option<String> {
            self.display_name.borrow().clone()
        }

        fn remember_identity(&self, kind: UserKind, display_name: &str) {
            *self.kind.borrow_mut() = Some(kind);
            *self.display_name.borrow_mut() = Some(display_name.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
            *self.kind.borrow_mut() = None;
            *self.display_name.borrow_mut() = None;
        }
    }

    #[test]
    fn test_blank_token_reads_as_absent() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.token(), None);

        store.set_token("   ");
        assert_eq!(store.token(), None);

        store.set_token("tok-1");
        assert_eq!(store.token(), Some("tok-1".into()));
    }

    #[test]
    fn test_clear_is_idempotent_and_covers_identity() {
        let store = MemoryTokenStore::with_token("tok-1");
        store.remember_identity(UserKind::Staff, "王敏");

        store.clear();
        store.clear();

        assert_eq!(store.token(), None);
        assert_eq!(store.user_kind(), None);
        assert_eq!(store.display_name(), None);
    }
}
