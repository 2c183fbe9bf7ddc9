//! 车型目录

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::VehicleType;
use parkdesk_shared::protocol::{
    CreateVehicleType, DeleteVehicleType, ListVehicleTypes, UpdateVehicleType,
};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct VehicleTypeSchema;

#[async_trait(?Send)]
impl ResourceSchema for VehicleTypeSchema {
    type Record = VehicleType;

    const TITLE: &'static str = "车型";

    fn columns() -> &'static [&'static str] {
        &["名称", "说明"]
    }

    fn cells(record: &VehicleType) -> Vec<String> {
        vec![
            record.name.clone(),
            record.description.clone().unwrap_or_default(),
        ]
    }

    fn id(record: &VehicleType) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "名称").required().placeholder("小型车"),
            FieldSpec::text("description", "说明"),
        ];
        FIELDS
    }

    fn to_form(record: &VehicleType) -> FormValues {
        FormValues::from([
            ("name", record.name.clone()),
            (
                "description",
                record.description.clone().unwrap_or_default(),
            ),
        ])
    }

    fn from_form(values: &FormValues) -> Result<VehicleType, String> {
        Ok(VehicleType {
            id: String::new(),
            name: required_field(values, "name", "名称")?,
            description: optional_field(values, "description"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<VehicleType>, ApiError> {
        api.send(&ListVehicleTypes).await
    }

    async fn create(api: &ConsoleApi, record: VehicleType) -> Result<VehicleType, ApiError> {
        api.send(&CreateVehicleType(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: VehicleType,
    ) -> Result<VehicleType, ApiError> {
        record.id = id.clone();
        api.send(&UpdateVehicleType { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteVehicleType { id }).await
    }
}

#[component]
pub fn VehicleTypesPage() -> impl IntoView {
    resource_page::<VehicleTypeSchema>()
}
