//! API 客户端行为测试
//!
//! 纯原生测试：传输层与存储层都换成内存实现，
//! 逐条验证出站头、入站分类与 401/403 的清理时序。

use std::cell::RefCell;
use std::rc::Rc;

use parkdesk_shared::protocol::{CreateVehicle, ListUsers, ListVehicles, UpdateVehicle};
use parkdesk_shared::{LoginRequest, Vehicle};
use serde_json::json;

use super::transport::MockTransport;
use super::{ApiClient, SessionEvents};
use crate::error::ApiError;
use crate::session::store::TokenStore;
use crate::session::store::tests::MemoryTokenStore;

/// 模拟浏览器端的会话失效处理：清存储、记一次跳转
struct RecordingEvents {
    store: Rc<MemoryTokenStore>,
    expirations: RefCell<u32>,
}

impl RecordingEvents {
    fn new(store: Rc<MemoryTokenStore>) -> Self {
        Self {
            store,
            expirations: RefCell::new(0),
        }
    }

    fn count(&self) -> u32 {
        *self.expirations.borrow()
    }
}

impl SessionEvents for Rc<RecordingEvents> {
    fn session_expired(&self) {
        self.store.clear();
        *self.expirations.borrow_mut() += 1;
    }
}

type TestClient = ApiClient<MockTransport, Rc<MemoryTokenStore>, Rc<RecordingEvents>>;

fn test_client(store: Rc<MemoryTokenStore>) -> (TestClient, Rc<RecordingEvents>) {
    let events = Rc::new(RecordingEvents::new(Rc::clone(&store)));
    let client = ApiClient::new("/api/v1", MockTransport::new(), store, Rc::clone(&events));
    (client, events)
}

fn sample_vehicle() -> serde_json::Value {
    json!({
        "id": "v1",
        "plateNumber": "沪A-12345",
        "vehicleTypeId": "t1",
        "color": "白"
    })
}

#[tokio::test]
async fn test_bearer_header_reflects_token_at_send_time() {
    let store = Rc::new(MemoryTokenStore::with_token("tok-a"));
    let (client, _events) = test_client(Rc::clone(&store));
    client.transport.mock_response(
        "/api/v1/users",
        200,
        json!({ "statusCode": 200, "data": [] }),
    );

    client.send(&ListUsers).await.unwrap();
    // 中途换 token：下一个请求必须带新值
    store.set_token("tok-b");
    client.send(&ListUsers).await.unwrap();

    let requests = client.transport.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].2.get("Authorization").map(String::as_str),
        Some("Bearer tok-a")
    );
    assert_eq!(
        requests[1].2.get("Authorization").map(String::as_str),
        Some("Bearer tok-b")
    );
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let store = Rc::new(MemoryTokenStore::default());
    let (client, _events) = test_client(store);
    client.transport.mock_response(
        "/api/v1/auth/login",
        200,
        json!({ "statusCode": 200, "data": { "token": "fresh" } }),
    );

    let login = LoginRequest {
        identifier: "wang@example.com".into(),
        password: "secret".into(),
    };
    let data = client.send(&login).await.unwrap();

    assert_eq!(data.token, "fresh");
    let requests = client.transport.requests.borrow();
    assert!(!requests[0].2.contains_key("Authorization"));
}

#[tokio::test]
async fn test_unauthorized_clears_session_before_error_returns() {
    let store = Rc::new(MemoryTokenStore::with_token("abc.def.ghi"));
    let (client, events) = test_client(Rc::clone(&store));
    client.transport.mock_response(
        "/api/v1/vehicles",
        401,
        json!({ "statusCode": 401, "message": "凭证已过期" }),
    );

    let err = client.send(&ListVehicles).await.unwrap_err();

    // 调用方拿到 Err 的时刻，会话已经清掉、跳转已经触发
    assert_eq!(err, ApiError::AuthExpired);
    assert_eq!(store.token(), None);
    assert_eq!(events.count(), 1);
}

#[tokio::test]
async fn test_forbidden_clears_session_exactly_once() {
    let store = Rc::new(MemoryTokenStore::with_token("abc.def.ghi"));
    let (client, events) = test_client(Rc::clone(&store));
    client
        .transport
        .mock_raw_response("/api/v1/roles", 403, "Forbidden");

    let err = client.send(&parkdesk_shared::protocol::ListRoles).await.unwrap_err();

    assert!(err.is_auth_expired());
    assert_eq!(store.token(), None);
    assert_eq!(events.count(), 1);
}

#[tokio::test]
async fn test_envelope_unauthorized_inside_http_ok_triggers_logout() {
    // 网关放行（HTTP 200），业务层在信封里判了 401
    let store = Rc::new(MemoryTokenStore::with_token("stale"));
    let (client, events) = test_client(Rc::clone(&store));
    client.transport.mock_response(
        "/api/v1/vehicles",
        200,
        json!({ "statusCode": 401, "message": "凭证已过期" }),
    );

    let err = client.send(&ListVehicles).await.unwrap_err();

    assert_eq!(err, ApiError::AuthExpired);
    assert_eq!(store.token(), None);
    assert_eq!(events.count(), 1);
}

#[tokio::test]
async fn test_validation_error_keeps_session_and_backend_message() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, events) = test_client(Rc::clone(&store));
    client.transport.mock_response(
        "/api/v1/vehicles",
        200,
        json!({ "statusCode": 400, "message": "车牌号格式不正确" }),
    );

    let vehicle = Vehicle {
        plate_number: "bad".into(),
        vehicle_type_id: "t1".into(),
        ..Vehicle::default()
    };
    let err = client.send(&CreateVehicle(vehicle)).await.unwrap_err();

    // 局部错误：文案原样透出，会话纹丝不动
    assert_eq!(err, ApiError::Validation("车牌号格式不正确".into()));
    assert_eq!(store.token(), Some("tok".into()));
    assert_eq!(events.count(), 0);
}

#[tokio::test]
async fn test_not_found_and_conflict_classification() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client.transport.mock_response(
        "/api/v1/vehicles/v9",
        200,
        json!({ "statusCode": 404, "message": "记录不存在" }),
    );

    let update = UpdateVehicle {
        id: "v9".into(),
        record: Vehicle {
            plate_number: "沪B-00001".into(),
            vehicle_type_id: "t1".into(),
            ..Vehicle::default()
        },
    };
    let err = client.send(&update).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("记录不存在".into()));

    client.transport.mock_response(
        "/api/v1/vehicles",
        409,
        json!({ "statusCode": 409, "message": "车牌号已存在" }),
    );
    let vehicle = Vehicle {
        plate_number: "沪A-12345".into(),
        vehicle_type_id: "t1".into(),
        ..Vehicle::default()
    };
    let err = client.send(&CreateVehicle(vehicle)).await.unwrap_err();
    assert_eq!(err, ApiError::Conflict("车牌号已存在".into()));
}

#[tokio::test]
async fn test_transport_failure_maps_to_network_error() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, events) = test_client(Rc::clone(&store));
    client.transport.fail_next("connection refused");

    let err = client.send(&ListVehicles).await.unwrap_err();

    assert_eq!(err, ApiError::Network("connection refused".into()));
    assert_eq!(store.token(), Some("tok".into()));
    assert_eq!(events.count(), 0);
}

#[tokio::test]
async fn test_malformed_body_on_http_ok_is_decode_error() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client
        .transport
        .mock_raw_response("/api/v1/vehicles", 200, "<!DOCTYPE html>");

    let err = client.send(&ListVehicles).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_non_envelope_gateway_error_uses_http_status() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client
        .transport
        .mock_raw_response("/api/v1/vehicles", 502, "<html>Bad Gateway</html>");

    let err = client.send(&ListVehicles).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Api {
            status: 502,
            message: "请求失败（502）".into()
        }
    );
}

#[tokio::test]
async fn test_create_serializes_camel_case_body() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client.transport.mock_response(
        "/api/v1/vehicles",
        200,
        json!({ "statusCode": 200, "data": sample_vehicle() }),
    );

    let vehicle = Vehicle {
        plate_number: "沪A-12345".into(),
        vehicle_type_id: "t1".into(),
        color: Some("白".into()),
        ..Vehicle::default()
    };
    let created = client.send(&CreateVehicle(vehicle)).await.unwrap();
    assert_eq!(created.id, "v1");

    let requests = client.transport.requests.borrow();
    let (_, method, headers, body) = &requests[0];
    assert_eq!(method, "POST");
    assert_eq!(
        headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    let body = body.as_ref().unwrap();
    assert!(body.contains("\"plateNumber\":\"沪A-12345\""));
}

#[tokio::test]
async fn test_success_envelope_without_data_is_decode_error() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client
        .transport
        .mock_response("/api/v1/vehicles", 200, json!({ "statusCode": 200 }));

    let err = client.send(&ListVehicles).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_list_returns_envelope_data() {
    let store = Rc::new(MemoryTokenStore::with_token("tok"));
    let (client, _events) = test_client(store);
    client.transport.mock_response(
        "/api/v1/vehicles",
        200,
        json!({ "statusCode": 200, "data": [sample_vehicle()] }),
    );

    let vehicles = client.send(&ListVehicles).await.unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].plate_number, "沪A-12345");
    assert_eq!(vehicles[0].color.as_deref(), Some("白"));
}
