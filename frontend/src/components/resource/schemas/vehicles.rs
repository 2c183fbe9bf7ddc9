//! 登记车辆

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::Vehicle;
use parkdesk_shared::protocol::{CreateVehicle, DeleteVehicle, ListVehicles, UpdateVehicle};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct VehicleSchema;

#[async_trait(?Send)]
impl ResourceSchema for VehicleSchema {
    type Record = Vehicle;

    const TITLE: &'static str = "车辆";

    fn columns() -> &'static [&'static str] {
        &["车牌号", "车型", "车主", "颜色", "登记时间"]
    }

    fn cells(record: &Vehicle) -> Vec<String> {
        vec![
            record.plate_number.clone(),
            record.vehicle_type_id.clone(),
            record.owner_id.clone().unwrap_or_default(),
            record.color.clone().unwrap_or_default(),
            record
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]
    }

    fn id(record: &Vehicle) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("plate_number", "车牌号")
                .required()
                .placeholder("京A·12345"),
            FieldSpec::text("vehicle_type_id", "车型").required(),
            FieldSpec::text("owner_id", "车主"),
            FieldSpec::text("color", "颜色"),
        ];
        FIELDS
    }

    fn to_form(record: &Vehicle) -> FormValues {
        FormValues::from([
            ("plate_number", record.plate_number.clone()),
            ("vehicle_type_id", record.vehicle_type_id.clone()),
            ("owner_id", record.owner_id.clone().unwrap_or_default()),
            ("color", record.color.clone().unwrap_or_default()),
        ])
    }

    fn from_form(values: &FormValues) -> Result<Vehicle, String> {
        Ok(Vehicle {
            id: String::new(),
            plate_number: required_field(values, "plate_number", "车牌号")?,
            vehicle_type_id: required_field(values, "vehicle_type_id", "车型")?,
            owner_id: optional_field(values, "owner_id"),
            color: optional_field(values, "color"),
            created_at: None,
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<Vehicle>, ApiError> {
        api.send(&ListVehicles).await
    }

    async fn create(api: &ConsoleApi, record: Vehicle) -> Result<Vehicle, ApiError> {
        api.send(&CreateVehicle(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: Vehicle,
    ) -> Result<Vehicle, ApiError> {
        record.id = id.clone();
        api.send(&UpdateVehicle { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteVehicle { id }).await
    }
}

#[component]
pub fn VehiclesPage() -> impl IntoView {
    resource_page::<VehicleSchema>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::resource::schemas::form;

    #[test]
    fn test_form_requires_plate_number() {
        let values = form(&[("vehicle_type_id", "t1")]);
        assert_eq!(
            VehicleSchema::from_form(&values).unwrap_err(),
            "请填写车牌号"
        );

        let values = form(&[("plate_number", " 京A·12345 "), ("vehicle_type_id", "t1")]);
        let vehicle = VehicleSchema::from_form(&values).unwrap();
        assert_eq!(vehicle.plate_number, "京A·12345");
        assert!(vehicle.id.is_empty());
        assert_eq!(vehicle.owner_id, None);
    }
}
