//! 登录账号

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::Account;
use parkdesk_shared::protocol::{CreateAccount, DeleteAccount, ListAccounts, UpdateAccount};

use super::{flag_text, flag_value};
use crate::components::record_dialog::{
    FieldSpec, FormValues, flag_field, optional_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct AccountSchema;

#[async_trait(?Send)]
impl ResourceSchema for AccountSchema {
    type Record = Account;

    const TITLE: &'static str = "账号";

    fn columns() -> &'static [&'static str] {
        &["用户名", "角色", "启用"]
    }

    fn cells(record: &Account) -> Vec<String> {
        vec![
            record.username.clone(),
            record.role_id.clone().unwrap_or_default(),
            flag_text(record.active),
        ]
    }

    fn id(record: &Account) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("username", "用户名").required(),
            FieldSpec::text("role_id", "角色"),
            FieldSpec::flag("active", "启用"),
        ];
        FIELDS
    }

    fn to_form(record: &Account) -> FormValues {
        FormValues::from([
            ("username", record.username.clone()),
            ("role_id", record.role_id.clone().unwrap_or_default()),
            ("active", flag_value(record.active)),
        ])
    }

    fn from_form(values: &FormValues) -> Result<Account, String> {
        Ok(Account {
            id: String::new(),
            username: required_field(values, "username", "用户名")?,
            role_id: optional_field(values, "role_id"),
            active: flag_field(values, "active"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<Account>, ApiError> {
        api.send(&ListAccounts).await
    }

    async fn create(api: &ConsoleApi, record: Account) -> Result<Account, ApiError> {
        api.send(&CreateAccount(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: Account,
    ) -> Result<Account, ApiError> {
        record.id = id.clone();
        api.send(&UpdateAccount { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteAccount { id }).await
    }
}

#[component]
pub fn AccountsPage() -> impl IntoView {
    resource_page::<AccountSchema>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trips_active_flag() {
        let account = Account {
            id: "a1".into(),
            username: "ops01".into(),
            role_id: Some("r1".into()),
            active: true,
        };
        let values = AccountSchema::to_form(&account);
        assert_eq!(values.get("active").map(String::as_str), Some("true"));

        let back = AccountSchema::from_form(&values).unwrap();
        assert!(back.active);
        assert_eq!(back.username, "ops01");
        // id 由调用方在更新时补，表单不带
        assert!(back.id.is_empty());
    }
}
