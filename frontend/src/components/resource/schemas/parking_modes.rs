//! 停放模式（临停、包月等计费口径）

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::ParkingMode;
use parkdesk_shared::protocol::{
    CreateParkingMode, DeleteParkingMode, ListParkingModes, UpdateParkingMode,
};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct ParkingModeSchema;

#[async_trait(?Send)]
impl ResourceSchema for ParkingModeSchema {
    type Record = ParkingMode;

    const TITLE: &'static str = "停放模式";

    fn columns() -> &'static [&'static str] {
        &["名称", "说明"]
    }

    fn cells(record: &ParkingMode) -> Vec<String> {
        vec![
            record.name.clone(),
            record.description.clone().unwrap_or_default(),
        ]
    }

    fn id(record: &ParkingMode) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "名称").required().placeholder("临时停放"),
            FieldSpec::text("description", "说明"),
        ];
        FIELDS
    }

    fn to_form(record: &ParkingMode) -> FormValues {
        FormValues::from([
            ("name", record.name.clone()),
            (
                "description",
                record.description.clone().unwrap_or_default(),
            ),
        ])
    }

    fn from_form(values: &FormValues) -> Result<ParkingMode, String> {
        Ok(ParkingMode {
            id: String::new(),
            name: required_field(values, "name", "名称")?,
            description: optional_field(values, "description"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<ParkingMode>, ApiError> {
        api.send(&ListParkingModes).await
    }

    async fn create(api: &ConsoleApi, record: ParkingMode) -> Result<ParkingMode, ApiError> {
        api.send(&CreateParkingMode(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: ParkingMode,
    ) -> Result<ParkingMode, ApiError> {
        record.id = id.clone();
        api.send(&UpdateParkingMode { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteParkingMode { id }).await
    }
}

#[component]
pub fn ParkingModesPage() -> impl IntoView {
    resource_page::<ParkingModeSchema>()
}
