//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、每条路由的守卫属性，以及
//! 每次导航尝试的裁决逻辑。

use std::fmt::Display;

use parkdesk_shared::UserKind;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 运营控制台：员工登录后的落地页 (需要认证)
    Dashboard,
    /// 用户主页：终端用户登录后的落地页 (需要认证)
    Home,
    /// 用户管理
    Users,
    /// 员工管理
    Staff,
    /// 车辆管理
    Vehicles,
    /// 车型管理
    VehicleTypes,
    /// 停车场管理
    ParkingLots,
    /// 停放模式管理
    ParkingModes,
    /// 价格管理
    Prices,
    /// 账号管理
    Accounts,
    /// 角色管理
    Roles,
    /// 页面未找到
    NotFound,
}

/// 一次导航尝试的裁决结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// 放行
    Allow,
    /// 未认证访问受保护路由：记下目的地，转去登录页
    RedirectToLogin { remember: AppRoute },
    /// 已认证停留在登录页：转去默认落地页
    RedirectToLanding,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match if trimmed.is_empty() { "/" } else { trimmed } {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/home" => Self::Home,
            "/users" => Self::Users,
            "/staff" => Self::Staff,
            "/vehicles" => Self::Vehicles,
            "/vehicle-types" => Self::VehicleTypes,
            "/parking-lots" => Self::ParkingLots,
            "/parking-modes" => Self::ParkingModes,
            "/prices" => Self::Prices,
            "/accounts" => Self::Accounts,
            "/roles" => Self::Roles,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Home => "/home",
            Self::Users => "/users",
            Self::Staff => "/staff",
            Self::Vehicles => "/vehicles",
            Self::VehicleTypes => "/vehicle-types",
            Self::ParkingLots => "/parking-lots",
            Self::ParkingModes => "/parking-modes",
            Self::Prices => "/prices",
            Self::Accounts => "/accounts",
            Self::Roles => "/roles",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 除登录页与 404 外全部受保护。这里只看 token 有没有，
    /// 不看角色：越权访问由后端用 403 裁决。
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 按登录主体类别取默认落地页
    pub fn default_landing(kind: UserKind) -> Self {
        match kind {
            UserKind::Staff => Self::Dashboard,
            UserKind::EndUser => Self::Home,
        }
    }

    /// 对一次导航尝试做出裁决
    pub fn gate(&self, authenticated: bool) -> GateDecision {
        if self.requires_auth() && !authenticated {
            GateDecision::RedirectToLogin { remember: *self }
        } else if self.should_redirect_when_authenticated() && authenticated {
            GateDecision::RedirectToLanding
        } else {
            GateDecision::Allow
        }
    }
}

/// 登录成功后的去向
///
/// 优先级：守卫记下的原始目的地 > 后端 redirectHint（仅接受
/// 能解析成受保护路由的路径）> 按类别的默认落地页。
pub fn post_login_route(
    remembered: Option<AppRoute>,
    hint: Option<&str>,
    kind: UserKind,
) -> AppRoute {
    if let Some(route) = remembered {
        return route;
    }
    if let Some(route) = hint.map(AppRoute::from_path) {
        if route.requires_auth() {
            return route;
        }
    }
    AppRoute::default_landing(kind)
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Home,
            AppRoute::Users,
            AppRoute::Staff,
            AppRoute::Vehicles,
            AppRoute::VehicleTypes,
            AppRoute::ParkingLots,
            AppRoute::ParkingModes,
            AppRoute::Prices,
            AppRoute::Accounts,
            AppRoute::Roles,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
            assert!(route.requires_auth());
        }
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/vehicle-types/"), AppRoute::VehicleTypes);
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
    }

    #[test]
    fn test_gate_denies_protected_route_without_token() {
        assert_eq!(
            AppRoute::Vehicles.gate(false),
            GateDecision::RedirectToLogin {
                remember: AppRoute::Vehicles
            }
        );
        assert_eq!(
            AppRoute::Dashboard.gate(false),
            GateDecision::RedirectToLogin {
                remember: AppRoute::Dashboard
            }
        );
    }

    #[test]
    fn test_gate_allows_protected_route_with_token() {
        // 只检查存在性：token 的真伪交给后端
        assert_eq!(AppRoute::Vehicles.gate(true), GateDecision::Allow);
        assert_eq!(AppRoute::Roles.gate(true), GateDecision::Allow);
    }

    #[test]
    fn test_gate_open_routes() {
        assert_eq!(AppRoute::Login.gate(false), GateDecision::Allow);
        assert_eq!(AppRoute::NotFound.gate(false), GateDecision::Allow);
        assert_eq!(AppRoute::NotFound.gate(true), GateDecision::Allow);
        assert_eq!(AppRoute::Login.gate(true), GateDecision::RedirectToLanding);
    }

    #[test]
    fn test_post_login_prefers_remembered_destination() {
        let landing = post_login_route(Some(AppRoute::Prices), None, UserKind::Staff);
        assert_eq!(landing, AppRoute::Prices);

        // 记住的目的地比 redirectHint 优先
        let landing = post_login_route(
            Some(AppRoute::Prices),
            Some("/vehicles"),
            UserKind::Staff,
        );
        assert_eq!(landing, AppRoute::Prices);
    }

    #[test]
    fn test_post_login_accepts_protected_hint_only() {
        let landing = post_login_route(None, Some("/vehicles"), UserKind::Staff);
        assert_eq!(landing, AppRoute::Vehicles);

        // 指向登录页或无法识别的 hint 一律忽略
        let landing = post_login_route(None, Some("/login"), UserKind::Staff);
        assert_eq!(landing, AppRoute::Dashboard);
        let landing = post_login_route(None, Some("/etc/passwd"), UserKind::EndUser);
        assert_eq!(landing, AppRoute::Home);
    }

    #[test]
    fn test_post_login_default_landing_by_kind() {
        assert_eq!(
            post_login_route(None, None, UserKind::Staff),
            AppRoute::Dashboard
        );
        assert_eq!(
            post_login_route(None, None, UserKind::EndUser),
            AppRoute::Home
        );
    }
}
