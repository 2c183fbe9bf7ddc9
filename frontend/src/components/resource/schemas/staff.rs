//! 运营员工

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::StaffMember;
use parkdesk_shared::protocol::{CreateStaff, DeleteStaff, ListStaff, UpdateStaff};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct StaffSchema;

#[async_trait(?Send)]
impl ResourceSchema for StaffSchema {
    type Record = StaffMember;

    const TITLE: &'static str = "员工";

    fn columns() -> &'static [&'static str] {
        &["用户名", "姓名", "电话", "登录账号", "所属停车场"]
    }

    fn cells(record: &StaffMember) -> Vec<String> {
        vec![
            record.username.clone(),
            record.full_name.clone(),
            record.phone.clone().unwrap_or_default(),
            record.account_id.clone().unwrap_or_default(),
            record.parking_lot_id.clone().unwrap_or_default(),
        ]
    }

    fn id(record: &StaffMember) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("username", "用户名").required(),
            FieldSpec::text("full_name", "姓名").required(),
            FieldSpec::text("phone", "电话"),
            FieldSpec::text("account_id", "登录账号"),
            FieldSpec::text("parking_lot_id", "所属停车场"),
        ];
        FIELDS
    }

    fn to_form(record: &StaffMember) -> FormValues {
        FormValues::from([
            ("username", record.username.clone()),
            ("full_name", record.full_name.clone()),
            ("phone", record.phone.clone().unwrap_or_default()),
            ("account_id", record.account_id.clone().unwrap_or_default()),
            (
                "parking_lot_id",
                record.parking_lot_id.clone().unwrap_or_default(),
            ),
        ])
    }

    fn from_form(values: &FormValues) -> Result<StaffMember, String> {
        Ok(StaffMember {
            id: String::new(),
            username: required_field(values, "username", "用户名")?,
            full_name: required_field(values, "full_name", "姓名")?,
            phone: optional_field(values, "phone"),
            account_id: optional_field(values, "account_id"),
            parking_lot_id: optional_field(values, "parking_lot_id"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<StaffMember>, ApiError> {
        api.send(&ListStaff).await
    }

    async fn create(api: &ConsoleApi, record: StaffMember) -> Result<StaffMember, ApiError> {
        api.send(&CreateStaff(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: StaffMember,
    ) -> Result<StaffMember, ApiError> {
        record.id = id.clone();
        api.send(&UpdateStaff { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteStaff { id }).await
    }
}

#[component]
pub fn StaffPage() -> impl IntoView {
    resource_page::<StaffSchema>()
}
