//! 价格规则：停车场 × 车型 × 停放模式 → 单价

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::Price;
use parkdesk_shared::protocol::{CreatePrice, DeletePrice, ListPrices, UpdatePrice};

use crate::components::record_dialog::{
    FieldSpec, FormValues, number_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct PriceSchema;

#[async_trait(?Send)]
impl ResourceSchema for PriceSchema {
    type Record = Price;

    const TITLE: &'static str = "价格";

    fn columns() -> &'static [&'static str] {
        &["停车场", "车型", "停放模式", "单价（元）"]
    }

    fn cells(record: &Price) -> Vec<String> {
        vec![
            record.parking_lot_id.clone(),
            record.vehicle_type_id.clone(),
            record.parking_mode_id.clone(),
            format!("{:.2}", record.amount),
        ]
    }

    fn id(record: &Price) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("parking_lot_id", "停车场").required(),
            FieldSpec::text("vehicle_type_id", "车型").required(),
            FieldSpec::text("parking_mode_id", "停放模式").required(),
            FieldSpec::number("amount", "单价").required().placeholder("5.00"),
        ];
        FIELDS
    }

    fn to_form(record: &Price) -> FormValues {
        FormValues::from([
            ("parking_lot_id", record.parking_lot_id.clone()),
            ("vehicle_type_id", record.vehicle_type_id.clone()),
            ("parking_mode_id", record.parking_mode_id.clone()),
            ("amount", record.amount.to_string()),
        ])
    }

    fn from_form(values: &FormValues) -> Result<Price, String> {
        Ok(Price {
            id: String::new(),
            parking_lot_id: required_field(values, "parking_lot_id", "停车场")?,
            vehicle_type_id: required_field(values, "vehicle_type_id", "车型")?,
            parking_mode_id: required_field(values, "parking_mode_id", "停放模式")?,
            amount: number_field(values, "amount", "单价")?,
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<Price>, ApiError> {
        api.send(&ListPrices).await
    }

    async fn create(api: &ConsoleApi, record: Price) -> Result<Price, ApiError> {
        api.send(&CreatePrice(record)).await
    }

    async fn update(api: &ConsoleApi, id: String, mut record: Price) -> Result<Price, ApiError> {
        record.id = id.clone();
        api.send(&UpdatePrice { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeletePrice { id }).await
    }
}

#[component]
pub fn PricesPage() -> impl IntoView {
    resource_page::<PriceSchema>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::resource::schemas::form;

    #[test]
    fn test_form_parses_amount() {
        let values = form(&[
            ("parking_lot_id", "p1"),
            ("vehicle_type_id", "t1"),
            ("parking_mode_id", "m1"),
            ("amount", "5.5"),
        ]);
        let price = PriceSchema::from_form(&values).unwrap();
        assert_eq!(price.amount, 5.5);

        let bad = form(&[
            ("parking_lot_id", "p1"),
            ("vehicle_type_id", "t1"),
            ("parking_mode_id", "m1"),
            ("amount", "五块"),
        ]);
        assert_eq!(PriceSchema::from_form(&bad).unwrap_err(), "单价必须是数字");
    }
}
