//! 九种资源的描述表，一个实体一个子模块
//!
//! 每个 Schema 说清四件事：表格怎么摆、表单有哪些字段、表单值
//! 怎么换回记录、四个接口各叫哪个端点。页面骨架由
//! [`super::resource_page`] 统一提供。
//!
//! 关联字段（车型、角色等）直接填对方的 id，不做级联下拉。

mod accounts;
mod parking_lots;
mod parking_modes;
mod prices;
mod roles;
mod staff;
mod users;
mod vehicle_types;
mod vehicles;

pub use accounts::AccountsPage;
pub use parking_lots::ParkingLotsPage;
pub use parking_modes::ParkingModesPage;
pub use prices::PricesPage;
pub use roles::RolesPage;
pub use staff::StaffPage;
pub use users::UsersPage;
pub use vehicle_types::VehicleTypesPage;
pub use vehicles::VehiclesPage;

#[cfg(test)]
use crate::components::record_dialog::FormValues;

fn flag_text(value: bool) -> String {
    if value { "是" } else { "否" }.to_string()
}

fn flag_value(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// 测试用：从字面量对构造一份表单值
#[cfg(test)]
fn form(pairs: &[(&'static str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_text_maps_to_chinese() {
        assert_eq!(flag_text(true), "是");
        assert_eq!(flag_text(false), "否");
        assert_eq!(flag_value(true), "true");
    }
}
