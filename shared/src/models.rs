//! 资源记录 (Domain Records)
//!
//! 每种记录都是后端拥有的扁平结构，前端只保存每屏一份的临时副本，
//! 任何一次变更成功后整表重取。字段随信封一样走 camelCase。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 终端用户（车主）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 员工（收费员/巡场员等，用用户名登录）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(default)]
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// 绑定的登录账号
    #[serde(default)]
    pub account_id: Option<String>,
    /// 所属停车场
    #[serde(default)]
    pub parking_lot_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub id: String,
    pub plate_number: String,
    pub vehicle_type_id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 车型（小型车/新能源/摩托车……），计价的维度之一
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub address: String,
    /// 总车位数
    #[serde(default)]
    pub capacity: u32,
    /// 是否对外开放
    #[serde(default)]
    pub open: bool,
}

/// 停放模式（临停/包月/夜间……），计价的另一个维度
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingMode {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 价格：车场 × 车型 × 模式 → 单价
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub id: String,
    pub parking_lot_id: String,
    pub vehicle_type_id: String,
    pub parking_mode_id: String,
    /// 单价（元）；按模式含义可能是每小时或每月
    pub amount: f64,
}

/// 登录账号（员工侧），与 StaffMember 分离便于停用账号而保留档案
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_round_trips_camel_case() {
        let raw = r#"{"id":"v1","plateNumber":"京A·12345","vehicleTypeId":"t1","ownerId":"u1","color":"白"}"#;
        let v: Vehicle = serde_json::from_str(raw).unwrap();
        assert_eq!(v.plate_number, "京A·12345");
        assert_eq!(v.vehicle_type_id, "t1");
        let back = serde_json::to_string(&v).unwrap();
        assert!(back.contains("\"plateNumber\""));
    }

    #[test]
    fn record_without_id_defaults_to_empty() {
        // 新建表单提交时还没有 id，后端负责分配
        let raw = r#"{"name":"东门停车场","address":"建国路 1 号","capacity":120,"open":true}"#;
        let lot: ParkingLot = serde_json::from_str(raw).unwrap();
        assert!(lot.id.is_empty());
        assert_eq!(lot.capacity, 120);
    }
}
