//! 会话模块
//!
//! 管理登录会话，与路由系统解耦：路由服务只拿注入的认证信号做
//! 守卫，这里负责会话的建立、恢复、注销与失效清理。
//!
//! 恢复会话采取懒校验：启动时只看本地有没有 token，不向服务端
//! 确认。token 的真伪由第一个真实请求裁决，失效则走全局登出。

pub mod claims;
pub mod store;


use leptos::prelude::*;
use parkdesk_shared::{LoginRequest, UserKind, protocol::LogoutRequest};

use crate::client::transport::{FetchTransport, HttpTransport};
use crate::client::{ApiClient, SessionEvents};
use crate::error::ApiError;
use crate::logging::console_log;
use crate::web::route::{AppRoute, post_login_route};
use crate::web::router::RouterService;
use store::{BrowserTokenStore, TokenStore};

/// 浏览器环境的客户端具体类型，经 Context 注入各组件
pub type ConsoleApi = ApiClient<FetchTransport, BrowserTokenStore, SessionTeardown>;

/// 一次已建立的登录会话
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub kind: UserKind,
    pub display_name: String,
}

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前会话（未登录时为 None）
    pub session: Option<Session>,
    /// 是否正在加载
    pub is_loading: bool,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            is_loading: true,
            ..SessionState::default()
        });
        Self { state, set_state }
    }

    /// 认证信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_some())
    }

    /// 登录主体类别信号（用于落地页选择）
    pub fn user_kind_signal(&self) -> Signal<Option<UserKind>> {
        let state = self.state;
        Signal::derive(move || state.get().session.as_ref().map(|s| s.kind))
    }

    /// 展示名信号（导航栏用）
    pub fn display_name_signal(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state
                .get()
                .session
                .map(|s| s.display_name)
                .unwrap_or_default()
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ConsoleApi {
    use_context::<ConsoleApi>().expect("ConsoleApi should be provided")
}

/// 启动时从本地存储恢复会话
///
/// 只看 token 是否存在。类别缺失时先试 token 载荷里的 role
/// 声明，再退回终端用户（走错落地页不泄露任何数据，后端仍会
/// 对越权请求回 403）。
pub fn init_session(ctx: &SessionContext) {
    let store = BrowserTokenStore;
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if let Some(token) = store.token() {
            let kind = store
                .user_kind()
                .or_else(|| claims::kind_from_token(&token))
                .unwrap_or(UserKind::EndUser);
            let display_name = store.display_name().unwrap_or_else(|| "用户".to_string());
            state.session = Some(Session {
                token,
                kind,
                display_name,
            });
        }
    });
}

/// 登录结果：建立的会话与该去的页面
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub landing: AppRoute,
}

/// 执行统一登录
///
/// `identifier` 原样送出，不区分邮箱还是员工用户名。成功后
/// token 与身份快照写入会话存储；失败则存储保持原样，错误
/// 交给登录页就地展示。
pub async fn perform_login<T, S, E>(
    api: &ApiClient<T, S, E>,
    identifier: &str,
    password: &str,
    remembered: Option<AppRoute>,
) -> Result<LoginOutcome, ApiError>
where
    T: HttpTransport,
    S: TokenStore,
    E: SessionEvents,
{
    let request = LoginRequest {
        identifier: identifier.to_string(),
        password: password.to_string(),
    };
    let data = api.send(&request).await?;

    let kind = data
        .user_kind
        .or_else(|| claims::kind_from_token(&data.token))
        .unwrap_or(UserKind::EndUser);
    let display_name = data
        .display_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| identifier.to_string());

    api.store().set_token(&data.token);
    api.store().remember_identity(kind, &display_name);

    let landing = post_login_route(remembered, data.redirect_hint.as_deref(), kind);
    Ok(LoginOutcome {
        session: Session {
            token: data.token,
            kind,
            display_name,
        },
        landing,
    })
}

/// 把登录结果写进共享状态
pub fn apply_login(ctx: &SessionContext, session: Session) {
    ctx.set_state.update(|state| {
        state.session = Some(session);
        state.is_loading = false;
    });
}

/// 注销：先尽力通知服务端，无论结果如何本地一定清
pub async fn perform_logout<T, S, E>(api: &ApiClient<T, S, E>)
where
    T: HttpTransport,
    S: TokenStore,
    E: SessionEvents,
{
    if let Err(err) = api.send(&LogoutRequest).await {
        console_log!("[session] 服务端登出未确认: {err}");
    }
    api.store().clear();
}

/// 清除内存会话
///
/// 导航不在这里做：路由服务监听认证信号，falling edge 会自动
/// 把受保护页面踢回登录页。
pub fn apply_logout(ctx: &SessionContext) {
    ctx.set_state.update(|state| {
        state.session = None;
    });
}

/// 会话失效的浏览器端处理，注入给 API 客户端。
///
/// 约定：`session_expired` 返回即清理完成，存储已清空、路由已
/// 切到登录页。客户端据此保证调用方拿到 Err 时本地已无会话。
#[derive(Clone, Copy)]
pub struct SessionTeardown {
    store: BrowserTokenStore,
    ctx: SessionContext,
    router: RouterService,
}

impl SessionTeardown {
    pub fn new(ctx: SessionContext, router: RouterService) -> Self {
        Self {
            store: BrowserTokenStore,
            ctx,
            router,
        }
    }
}

impl SessionEvents for SessionTeardown {
    fn session_expired(&self) {
        self.store.clear();
        self.ctx.set_state.update(|state| {
            state.session = None;
        });
        self.router.force_login();
    }
}
