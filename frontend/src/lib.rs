//! ParkDesk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含认证守卫）
//! - `session`: 会话状态管理（登录、恢复、注销、失效清场）
//! - `client`: 统一 API 客户端（信封解析与错误归类）
//! - `components`: UI 组件层

mod client;
mod components {
    pub mod dashboard;
    pub mod home;
    mod icons;
    pub mod login;
    mod record_dialog;
    pub mod resource;
    mod session_status;
    mod shell;
}
mod config;
mod error;
mod logging;
mod mutation;
mod session;

use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::resource::schemas::{
    AccountsPage, ParkingLotsPage, ParkingModesPage, PricesPage, RolesPage, StaffPage, UsersPage,
    VehicleTypesPage, VehiclesPage,
};
use crate::session::{ConsoleApi, SessionContext, SessionTeardown, init_session, use_session};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 路由是手写的 History API 封装；存储与网络则直接包在
// gloo-storage / gloo-net 外面，只收窄成本应用需要的形状。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::client::transport::FetchTransport;
use crate::config::AppConfig;
use crate::session::store::BrowserTokenStore;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Staff => view! { <StaffPage /> }.into_any(),
        AppRoute::Vehicles => view! { <VehiclesPage /> }.into_any(),
        AppRoute::VehicleTypes => view! { <VehicleTypesPage /> }.into_any(),
        AppRoute::ParkingLots => view! { <ParkingLotsPage /> }.into_any(),
        AppRoute::ParkingModes => view! { <ParkingModesPage /> }.into_any(),
        AppRoute::Prices => view! { <PricesPage /> }.into_any(),
        AppRoute::Accounts => view! { <AccountsPage /> }.into_any(),
        AppRoute::Roles => view! { <RolesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 组装 API 客户端并注入 Context
///
/// 必须在 Router 内层：失效清场要拿路由服务做硬跳转。
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let ctx = use_session();
    let router = use_router();
    let config = AppConfig::load();

    let api = ConsoleApi::new(
        config.api_base,
        FetchTransport,
        BrowserTokenStore,
        SessionTeardown::new(ctx, router),
    );
    provide_context(api);

    children()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let ctx = SessionContext::new();
    provide_context(ctx);

    // 2. 从本地存储恢复会话（懒校验，不找服务端确认）
    init_session(&ctx);

    // 3. 取认证与身份信号，注入路由服务做守卫（解耦！）
    let is_authenticated = ctx.is_authenticated_signal();
    let user_kind = ctx.user_kind_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated user_kind=user_kind>
            <ApiProvider>
                <RouterOutlet matcher=route_matcher />
            </ApiProvider>
        </Router>
    }
}
