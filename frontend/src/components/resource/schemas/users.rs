//! 注册用户（终端车主）

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::User;
use parkdesk_shared::protocol::{CreateUser, DeleteUser, ListUsers, UpdateUser};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct UserSchema;

#[async_trait(?Send)]
impl ResourceSchema for UserSchema {
    type Record = User;

    const TITLE: &'static str = "用户";

    fn columns() -> &'static [&'static str] {
        &["邮箱", "姓名", "电话", "角色", "注册时间"]
    }

    fn cells(record: &User) -> Vec<String> {
        vec![
            record.email.clone(),
            record.full_name.clone(),
            record.phone.clone().unwrap_or_default(),
            record.role_id.clone().unwrap_or_default(),
            record
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]
    }

    fn id(record: &User) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("email", "邮箱")
                .required()
                .placeholder("user@example.com"),
            FieldSpec::text("full_name", "姓名").required(),
            FieldSpec::text("phone", "电话"),
            FieldSpec::text("role_id", "角色"),
        ];
        FIELDS
    }

    fn to_form(record: &User) -> FormValues {
        FormValues::from([
            ("email", record.email.clone()),
            ("full_name", record.full_name.clone()),
            ("phone", record.phone.clone().unwrap_or_default()),
            ("role_id", record.role_id.clone().unwrap_or_default()),
        ])
    }

    fn from_form(values: &FormValues) -> Result<User, String> {
        Ok(User {
            id: String::new(),
            email: required_field(values, "email", "邮箱")?,
            full_name: required_field(values, "full_name", "姓名")?,
            phone: optional_field(values, "phone"),
            role_id: optional_field(values, "role_id"),
            created_at: None,
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<User>, ApiError> {
        api.send(&ListUsers).await
    }

    async fn create(api: &ConsoleApi, record: User) -> Result<User, ApiError> {
        api.send(&CreateUser(record)).await
    }

    async fn update(api: &ConsoleApi, id: String, mut record: User) -> Result<User, ApiError> {
        // 路径与载荷里的 id 保持一致
        record.id = id.clone();
        api.send(&UpdateUser { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteUser { id }).await
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    resource_page::<UserSchema>()
}
