//! 统一响应信封
//!
//! 后端所有接口都返回 `{ statusCode, data, message }` 形状的 JSON。
//! 调用方 1) 看 HTTP 状态码，2) 再看信封里的 `statusCode`，
//! 两者都是 2xx 才算成功。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 信封携带的提示文案；没有则退回到通用文案
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_envelope() {
        let raw = r#"{"statusCode":200,"data":[1,2,3],"message":"ok"}"#;
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn decodes_error_envelope_without_data() {
        let raw = r#"{"statusCode":409,"message":"车牌号已存在"}"#;
        let env: ApiEnvelope<()> = serde_json::from_str(raw).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.message_or("失败"), "车牌号已存在");
    }

    #[test]
    fn message_or_falls_back_on_blank() {
        let env = ApiEnvelope::<()> {
            status_code: 500,
            data: None,
            message: Some("  ".into()),
        };
        assert_eq!(env.message_or("请稍后重试"), "请稍后重试");
    }
}
