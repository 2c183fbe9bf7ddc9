//! API 客户端
//!
//! 所有请求的必经之路，集中两件横切事务：
//!
//! 1. **出站**：每次发送时从会话存储现读 token 挂到
//!    `Authorization: Bearer` 头上，绝不缓存。
//! 2. **入站**：遇到 401/403（无论 HTTP 状态还是信封里的
//!    statusCode），先同步完成会话清理与跳转，再把
//!    [`ApiError::AuthExpired`] 还给调用方。调用方拿到 Err 的
//!    时刻，本地会话已经不存在了。
//!
//! 其余错误（400/404/409/网络/解码）原样分类后交给调用方就地展示。

pub mod transport;

#[cfg(test)]
mod tests;

use parkdesk_shared::{ApiEnvelope, BEARER_SCHEME, HEADER_AUTHORIZATION, protocol::ApiRequest};

use crate::error::ApiError;
use crate::logging::console_error;
use crate::session::store::TokenStore;
use transport::{HttpRequest, HttpResponse, HttpTransport};

/// 会话级事件的注入点
///
/// 客户端本身不认识路由与信号，通过这个 trait 把"会话失效"
/// 通知出去。实现方必须同步完成清理，调用返回即生效。
pub trait SessionEvents {
    fn session_expired(&self);
}

/// API 客户端，泛型注入传输、存储与事件三个依赖
#[derive(Clone)]
pub struct ApiClient<T, S, E> {
    base_url: String,
    pub(crate) transport: T,
    store: S,
    events: E,
}

impl<T, S, E> ApiClient<T, S, E>
where
    T: HttpTransport,
    S: TokenStore,
    E: SessionEvents,
{
    pub fn new(base_url: impl Into<String>, transport: T, store: S, events: E) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            store,
            events,
        }
    }

    /// 会话存储的只读入口，登录/登出流程与客户端共用同一份
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 发送一个协议请求，返回信封里的 data
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        let mut http = HttpRequest::new(&url, R::METHOD);

        // 发出时刻现读：两次请求之间换了 token，头也跟着换
        if let Some(token) = self.store.token() {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("{BEARER_SCHEME} {token}"));
        }

        if let Some(body) = request.body() {
            let encoded =
                serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            http = http
                .with_header("Content-Type", "application/json")
                .with_body(encoded);
        }

        let response = match self.transport.send(http).await {
            Ok(response) => response,
            Err(err) => {
                console_error!("[api] {} {url} 网络错误: {err}", R::METHOD.as_str());
                return Err(ApiError::Network(err.0));
            }
        };

        self.accept::<R>(&url, response)
    }

    /// 统一入站处理。判定顺序：
    /// HTTP 401/403 → 信封解析 → 信封 401/403 → 信封业务失败 →
    /// 残余的 HTTP 失败 → 取 data。
    fn accept<R: ApiRequest>(
        &self,
        url: &str,
        response: HttpResponse,
    ) -> Result<R::Response, ApiError> {
        if matches!(response.status, 401 | 403) {
            return Err(self.expire(url, response.status));
        }

        let envelope: ApiEnvelope<R::Response> = match response.json() {
            Ok(envelope) => envelope,
            Err(err) => {
                // 网关可能直接回非信封的错误页（502 的 HTML 之类）
                if !(200..300).contains(&response.status) {
                    console_error!("[api] {url} 非信封错误响应: HTTP {}", response.status);
                    return Err(ApiError::from_status(
                        response.status,
                        format!("请求失败（{}）", response.status),
                    ));
                }
                console_error!("[api] {url} 响应解析失败: {err}");
                return Err(ApiError::Decode(err.to_string()));
            }
        };

        // 网关放行但业务层判定会话失效，同样走全局清理
        if matches!(envelope.status_code, 401 | 403) {
            return Err(self.expire(url, envelope.status_code));
        }

        if !envelope.is_success() {
            let message = envelope.message_or("请求失败");
            console_error!("[api] {url} 业务失败: {} {message}", envelope.status_code);
            return Err(ApiError::from_status(envelope.status_code, message));
        }

        // 信封说成功而 HTTP 说失败：传输层裁决优先
        if !(200..300).contains(&response.status) {
            console_error!("[api] {url} HTTP {} 携带成功信封，按失败处理", response.status);
            return Err(ApiError::from_status(
                response.status,
                envelope.message_or("请求失败"),
            ));
        }

        envelope.data.ok_or_else(|| {
            console_error!("[api] {url} 信封缺少 data 字段");
            ApiError::Decode("信封缺少 data 字段".to_string())
        })
    }

    /// 会话失效的唯一出口：先通知（清存储、跳登录），再造错误。
    fn expire(&self, url: &str, status: u16) -> ApiError {
        console_error!("[api] {url} 返回 {status}，执行全局登出");
        self.events.session_expired();
        ApiError::AuthExpired
    }
}
