//! 权限角色

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::Role;
use parkdesk_shared::protocol::{CreateRole, DeleteRole, ListRoles, UpdateRole};

use crate::components::record_dialog::{
    FieldSpec, FormValues, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct RoleSchema;

#[async_trait(?Send)]
impl ResourceSchema for RoleSchema {
    type Record = Role;

    const TITLE: &'static str = "角色";

    fn columns() -> &'static [&'static str] {
        &["名称", "说明"]
    }

    fn cells(record: &Role) -> Vec<String> {
        vec![
            record.name.clone(),
            record.description.clone().unwrap_or_default(),
        ]
    }

    fn id(record: &Role) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "名称").required().placeholder("管理员"),
            FieldSpec::text("description", "说明"),
        ];
        FIELDS
    }

    fn to_form(record: &Role) -> FormValues {
        FormValues::from([
            ("name", record.name.clone()),
            (
                "description",
                record.description.clone().unwrap_or_default(),
            ),
        ])
    }

    fn from_form(values: &FormValues) -> Result<Role, String> {
        Ok(Role {
            id: String::new(),
            name: required_field(values, "name", "名称")?,
            description: optional_field(values, "description"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<Role>, ApiError> {
        api.send(&ListRoles).await
    }

    async fn create(api: &ConsoleApi, record: Role) -> Result<Role, ApiError> {
        api.send(&CreateRole(record)).await
    }

    async fn update(api: &ConsoleApi, id: String, mut record: Role) -> Result<Role, ApiError> {
        record.id = id.clone();
        api.send(&UpdateRole { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteRole { id }).await
    }
}

#[component]
pub fn RolesPage() -> impl IntoView {
    resource_page::<RoleSchema>()
}
