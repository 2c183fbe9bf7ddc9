//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 裁决 -> 处理 -> 加载"的导航流程，
//! 裁决本身是纯逻辑，在 [`super::route`] 里单独测试。

use leptos::prelude::*;
use parkdesk_shared::UserKind;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GateDecision};
use crate::logging::console_log;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证与身份类别都是注入的信号，与会话系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号）
    is_authenticated: Signal<bool>,
    /// 登录主体类别（注入的信号，决定落地页）
    user_kind: Signal<Option<UserKind>>,
    /// 守卫记下的目的地，单槽：后一次拦截覆盖前一次
    pending: RwSignal<Option<AppRoute>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 首次加载的 URL 也要过守卫：未认证直开受保护地址时，
    /// 受保护页面一帧都不渲染，目的地记进 pending。
    fn new(is_authenticated: Signal<bool>, user_kind: Signal<Option<UserKind>>) -> Self {
        let initial = AppRoute::from_path(&current_path());
        let mut remembered = None;

        let resolved = match initial.gate(is_authenticated.get_untracked()) {
            GateDecision::Allow => initial,
            GateDecision::RedirectToLogin { remember } => {
                console_log!("[Router] 未认证访问 {remember}，已拦截至登录页");
                remembered = Some(remember);
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                redirect
            }
            GateDecision::RedirectToLanding => {
                let kind = user_kind.get_untracked().unwrap_or(UserKind::EndUser);
                let redirect = AppRoute::default_landing(kind);
                replace_history_state(redirect.to_path());
                redirect
            }
        };

        let (current_route, set_route) = signal(resolved);

        Self {
            current_route,
            set_route,
            is_authenticated,
            user_kind,
            pending: RwSignal::new(remembered),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 取走守卫记下的目的地（一次性）
    pub fn take_pending(&self) -> Option<AppRoute> {
        self.pending.try_update(|p| p.take()).flatten()
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 裁决(Gate) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 按路由枚举导航
    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 会话失效时的硬跳转：替换当前历史项，不记目的地
    /// （半途的 pending 一并作废）
    pub fn force_login(&self) {
        self.pending.set(None);
        self.apply(AppRoute::auth_failure_redirect(), false);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        match target_route.gate(self.is_authenticated.get_untracked()) {
            GateDecision::RedirectToLogin { remember } => {
                console_log!("[Router] 未认证访问 {remember}，记下目的地并转登录页");
                self.pending.set(Some(remember));
                self.apply(AppRoute::auth_failure_redirect(), use_push);
            }
            GateDecision::RedirectToLanding => {
                let redirect = self.landing_route();
                console_log!("[Router] 已认证，登录页转 {redirect}");
                self.apply(redirect, use_push);
            }
            GateDecision::Allow => self.apply(target_route, use_push),
        }
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// 当前身份的默认落地页
    fn landing_route(&self) -> AppRoute {
        AppRoute::default_landing(self.user_kind.get_untracked().unwrap_or(UserKind::EndUser))
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑；重定向用 replace，
            // 不然历史栈里会堆出循环
            match target_route.gate(service.is_authenticated.get_untracked()) {
                GateDecision::RedirectToLogin { remember } => {
                    service.pending.set(Some(remember));
                    service.apply(AppRoute::auth_failure_redirect(), false);
                }
                GateDecision::RedirectToLanding => {
                    let redirect = service.landing_route();
                    service.apply(redirect, false);
                }
                GateDecision::Allow => service.set_route.set(target_route),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let service = *self;

        // 使用 Effect 监听认证状态变化
        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                // 恢复会话后仍停在登录页：送去默认落地页
                if route.should_redirect_when_authenticated() {
                    let redirect = service.landing_route();
                    console_log!("[Router] 认证状态变化：已登录，转 {redirect}");
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            } else if route.requires_auth() {
                // 用户登出，受保护页面踢回登录页
                let redirect = AppRoute::auth_failure_redirect();
                console_log!("[Router] 认证状态变化：已登出，转登录页");
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(
    is_authenticated: Signal<bool>,
    user_kind: Signal<Option<UserKind>>,
) -> RouterService {
    let router = RouterService::new(is_authenticated, user_kind);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 登录主体类别信号
    user_kind: Signal<Option<UserKind>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(is_authenticated, user_kind);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截默认跳转，走路由服务
///
/// 当前路由命中 `to` 时追加 `active` 类，导航菜单直接可用。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)] to: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let route = AppRoute::from_path(&to);

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a
            href=to
            class:active=move || router.current_route().get() == route
            on:click=on_click
        >
            {children()}
        </a>
    }
}
