//! 变更状态机
//!
//! 表单提交与删除共用一套显式状态：
//! `Idle → Submitting → Succeeded / Failed(文案) → Idle`。
//! 比一个 `is_submitting` 布尔多出来的，是失败文案的归属与
//! "提交中再点一次"的裁决都收在同一个类型里。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl MutationState {
    /// 进入提交态；已在提交中则返回 `false`，调用方丢弃这次点击
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Submitting) {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        *self = Self::Succeeded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// 挂载守卫
///
/// 异步回调落地前先问一句"组件还在吗"：已卸载就整体丢弃，
/// 不碰任何信号。克隆共享同一份标记。
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn dismiss(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// 组件内使用：卸载时自动失效
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let for_cleanup = guard.clone();
    on_cleanup(move || for_cleanup.dismiss());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejects_double_submit() {
        let mut state = MutationState::default();
        assert!(state.begin());
        // 提交中再点一次：拒绝，状态不变
        assert!(!state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_failure_owns_the_message() {
        let mut state = MutationState::default();
        assert!(state.begin());
        state.fail("车牌号已存在");
        assert_eq!(state.error(), Some("车牌号已存在"));
        assert!(!state.is_submitting());

        // 失败后允许重新提交
        assert!(state.begin());
        state.succeed();
        assert_eq!(state, MutationState::Succeeded);
        assert_eq!(state.error(), None);

        state.reset();
        assert_eq!(state, MutationState::Idle);
    }

    #[test]
    fn test_mount_guard_shares_state_across_clones() {
        let guard = MountGuard::new();
        let clone = guard.clone();
        assert!(guard.alive());

        clone.dismiss();
        assert!(!guard.alive());
    }
}
