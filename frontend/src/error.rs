//! 错误定义模块
//!
//! 前端只关心一件事：这个错误该全局处理还是交给调用方。
//! 401/403 归为 [`ApiError::AuthExpired`]，由客户端在返回前完成
//! 会话清理与跳转；其余变体原样交给发起请求的页面展示。

use std::fmt;

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401/403：会话已失效，全局清理在错误返回前已经执行
    AuthExpired,
    /// 400：请求不合法（表单校验类），展示后端原文
    Validation(String),
    /// 404：目标资源不存在
    NotFound(String),
    /// 409：状态冲突（如唯一键重复）
    Conflict(String),
    /// 其余非 2xx 状态
    Api { status: u16, message: String },
    /// 网络层失败（连不上、超时、跨域被拒……）
    Network(String),
    /// 响应体不是预期的信封结构
    Decode(String),
}

impl ApiError {
    /// 按状态码归类。401/403 的会话清理不在这里做，
    /// 调用方必须先触发清理再构造错误。
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthExpired,
            400 => Self::Validation(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Api { status, message },
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// 给页面展示的文案。后端给了 message 的变体原样透出，
    /// 网络/解码类错误统一为通用提示，不暴露内部细节。
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthExpired => "登录已过期，请重新登录".to_string(),
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Api { status, message } => {
                if message.is_empty() {
                    format!("请求失败（{status}）")
                } else {
                    message.clone()
                }
            }
            Self::Network(_) => "网络异常，请检查连接后重试".to_string(),
            Self::Decode(_) => "服务响应异常，请稍后重试".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthExpired => write!(f, "会话已失效"),
            Self::Validation(msg) => write!(f, "请求不合法: {msg}"),
            Self::NotFound(msg) => write!(f, "资源不存在: {msg}"),
            Self::Conflict(msg) => write!(f, "状态冲突: {msg}"),
            Self::Api { status, message } => write!(f, "请求失败({status}): {message}"),
            Self::Network(msg) => write!(f, "网络错误: {msg}"),
            Self::Decode(msg) => write!(f, "响应解析失败: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            ApiError::from_status(400, "车牌号格式不对".into()),
            ApiError::Validation("车牌号格式不对".into())
        );
        assert_eq!(
            ApiError::from_status(404, "记录不存在".into()),
            ApiError::NotFound("记录不存在".into())
        );
        assert_eq!(
            ApiError::from_status(409, "车牌号已存在".into()),
            ApiError::Conflict("车牌号已存在".into())
        );
        assert!(ApiError::from_status(401, String::new()).is_auth_expired());
        assert!(ApiError::from_status(403, String::new()).is_auth_expired());
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Api {
                status: 500,
                message: "boom".into()
            }
        );
    }

    #[test]
    fn test_user_message_passes_backend_text_through() {
        let err = ApiError::Validation("车牌号已存在".into());
        assert_eq!(err.user_message(), "车牌号已存在");

        let err = ApiError::Network("fetch failed".into());
        assert!(!err.user_message().contains("fetch failed"));
    }
}
