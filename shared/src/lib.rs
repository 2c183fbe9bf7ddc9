use serde::{Deserialize, Serialize};

mod envelope;
pub mod models;
pub mod protocol;

pub use envelope::ApiEnvelope;
pub use models::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_SCHEME: &str = "Bearer";

/// 默认的 API 根路径（同源部署时使用）
pub const DEFAULT_API_BASE: &str = "/api/v1";

// =========================================================
// 用户类别 (User Kind)
// =========================================================

/// 登录主体的类别
///
/// 统一登录接口会在响应中携带该标记，前端据此决定登录后的
/// 默认落地页。只用于导航，不参与任何权限判断（权限由后端裁决）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserKind {
    /// 内部员工：落地到运营控制台
    Staff,
    /// 终端用户：落地到用户主页
    EndUser,
}

impl UserKind {
    pub fn is_staff(&self) -> bool {
        matches!(self, UserKind::Staff)
    }

    /// 线上枚举名，与 serde 序列化结果一致，供存储层落盘使用
    pub fn wire_name(&self) -> &'static str {
        match self {
            UserKind::Staff => "STAFF",
            UserKind::EndUser => "END_USER",
        }
    }

    /// 从线上枚举名还原，大小写不敏感
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "STAFF" => Some(UserKind::Staff),
            "END_USER" => Some(UserKind::EndUser),
            _ => None,
        }
    }
}

// =========================================================
// 认证载荷 (Auth Payloads)
// =========================================================

/// 统一登录请求
///
/// `identifier` 原样透传：终端用户填邮箱、员工填用户名，
/// 前端不做任何"像不像邮箱"的判别。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// 登录成功后信封 `data` 字段的内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// 不透明的 bearer token
    pub token: String,
    /// 登录主体类别；个别部署不回传该字段，前端会退回到
    /// 从 token 载荷里解出的 role 声明
    #[serde(default)]
    pub user_kind: Option<UserKind>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// 后端建议的跳转路径（可选）
    #[serde(default)]
    pub redirect_hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_kind_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&UserKind::Staff).unwrap(), "\"STAFF\"");
        assert_eq!(
            serde_json::to_string(&UserKind::EndUser).unwrap(),
            "\"END_USER\""
        );
        let parsed: UserKind = serde_json::from_str("\"END_USER\"").unwrap();
        assert_eq!(parsed, UserKind::EndUser);
    }

    #[test]
    fn wire_name_round_trips() {
        for kind in [UserKind::Staff, UserKind::EndUser] {
            assert_eq!(UserKind::from_wire_name(kind.wire_name()), Some(kind));
        }
        assert_eq!(UserKind::from_wire_name("staff"), Some(UserKind::Staff));
        assert_eq!(UserKind::from_wire_name("operator"), None);
    }

    #[test]
    fn login_data_tolerates_missing_optional_fields() {
        let data: LoginData = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert_eq!(data.token, "t1");
        assert_eq!(data.user_kind, None);
        assert_eq!(data.display_name, None);
        assert_eq!(data.redirect_hint, None);
    }

    #[test]
    fn login_data_reads_camel_case_fields() {
        let raw = r#"{"token":"t1","userKind":"STAFF","displayName":"王敏","redirectHint":"/dashboard"}"#;
        let data: LoginData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.user_kind, Some(UserKind::Staff));
        assert_eq!(data.display_name.as_deref(), Some("王敏"));
        assert_eq!(data.redirect_hint.as_deref(), Some("/dashboard"));
    }
}
