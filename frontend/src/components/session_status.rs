//! 会话状态角标
//!
//! 顶栏上的一枚小徽章，定期探测 `/auth/session` 告诉用户自己
//! 还在不在线。探测结果只改角标文案；真正的会话过期（401/403）
//! 由客户端全局裁决清场跳转，这里不重复处理。

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use parkdesk_shared::protocol::SessionCheckRequest;

use crate::mutation::use_mount_guard;
use crate::session::use_api;

const PROBE_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeState {
    Checking,
    Online,
    /// 服务端明确答复会话无效（探测接口不带 401，全局裁决不会触发）
    Invalid,
    Offline,
}

impl ProbeState {
    fn badge_class(self) -> &'static str {
        match self {
            Self::Checking => "badge badge-ghost badge-sm",
            Self::Online => "badge badge-success badge-sm",
            Self::Invalid => "badge badge-warning badge-sm",
            Self::Offline => "badge badge-error badge-sm",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Checking => "检查中",
            Self::Online => "在线",
            Self::Invalid => "已失效",
            Self::Offline => "离线",
        }
    }
}

#[component]
pub fn SessionStatus() -> impl IntoView {
    let api = use_api();
    let guard = use_mount_guard();
    let (state, set_state) = signal(ProbeState::Checking);

    let probe = {
        let api = api.clone();
        let guard = guard.clone();
        move || {
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.send(&SessionCheckRequest).await;
                if !guard.alive() {
                    return;
                }
                let next = match result {
                    Ok(true) => ProbeState::Online,
                    Ok(false) => ProbeState::Invalid,
                    // 过期清场正在进行，保持现状等跳转
                    Err(err) if err.is_auth_expired() => return,
                    Err(_) => ProbeState::Offline,
                };
                set_state.set(next);
            });
        }
    };

    probe();

    let interval = {
        let probe = probe.clone();
        Interval::new(PROBE_INTERVAL_MS, move || probe())
    };
    // 句柄存进当前作用域，组件卸载即销毁，轮询随之停止
    let _poller = StoredValue::new_local(interval);

    view! {
        <span class=move || state.get().badge_class()>
            {move || state.get().text()}
        </span>
    }
}
