//! token 载荷解码
//!
//! 只做不验签的读取：token 对前端本是不透明的，这里仅在登录响应
//! 缺少 `userKind` 字段时，从 JWT 第二段里兜底解出 role 声明。
//! 任何一步失败都安静地返回 `None`，由调用方退回默认类别。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use parkdesk_shared::UserKind;
use serde::Deserialize;

/// 我们关心的声明子集，其余字段一律忽略
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// 解出 JWT 载荷段；不是三段式、不是 base64url、不是 JSON 都返回 `None`
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// 从 role 声明推断登录主体类别
///
/// 帐号体系里普通用户的 role 历史上写作 `USER`，一并接受。
pub fn kind_from_token(token: &str) -> Option<UserKind> {
    let role = decode_claims(token)?.role?;
    if role.eq_ignore_ascii_case("user") {
        return Some(UserKind::EndUser);
    }
    UserKind::from_wire_name(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_jwt(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_decodes_role_claim() {
        let token = fake_jwt(r#"{"sub":"42","role":"STAFF","exp":1924992000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert_eq!(kind_from_token(&token), Some(UserKind::Staff));
    }

    #[test]
    fn test_legacy_user_role_maps_to_end_user() {
        let token = fake_jwt(r#"{"role":"USER"}"#);
        assert_eq!(kind_from_token(&token), Some(UserKind::EndUser));
    }

    #[test]
    fn test_opaque_tokens_yield_none() {
        assert_eq!(decode_claims("not-a-jwt"), None);
        assert_eq!(decode_claims("a.b"), None);
        assert_eq!(decode_claims("a.b.c.d"), None);
        // 三段齐全但载荷不是 JSON
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert_eq!(decode_claims(&token), None);
        assert_eq!(kind_from_token(&token), None);
    }

    #[test]
    fn test_missing_role_claim_yields_none() {
        let token = fake_jwt(r#"{"sub":"42"}"#);
        assert!(decode_claims(&token).is_some());
        assert_eq!(kind_from_token(&token), None);
    }
}
