//! 停车场网点

use async_trait::async_trait;
use leptos::prelude::*;

use parkdesk_shared::models::ParkingLot;
use parkdesk_shared::protocol::{
    CreateParkingLot, DeleteParkingLot, ListParkingLots, UpdateParkingLot,
};

use super::{flag_text, flag_value};
use crate::components::record_dialog::{
    FieldSpec, FormValues, flag_field, int_field, required_field,
};
use crate::components::resource::{ResourceSchema, resource_page};
use crate::error::ApiError;
use crate::session::ConsoleApi;

pub struct ParkingLotSchema;

#[async_trait(?Send)]
impl ResourceSchema for ParkingLotSchema {
    type Record = ParkingLot;

    const TITLE: &'static str = "停车场";

    fn columns() -> &'static [&'static str] {
        &["名称", "地址", "车位数", "开放"]
    }

    fn cells(record: &ParkingLot) -> Vec<String> {
        vec![
            record.name.clone(),
            record.address.clone(),
            record.capacity.to_string(),
            flag_text(record.open),
        ]
    }

    fn id(record: &ParkingLot) -> String {
        record.id.clone()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "名称").required().placeholder("东门停车场"),
            FieldSpec::text("address", "地址").required(),
            FieldSpec::number("capacity", "车位数").required(),
            FieldSpec::flag("open", "对外开放"),
        ];
        FIELDS
    }

    fn to_form(record: &ParkingLot) -> FormValues {
        FormValues::from([
            ("name", record.name.clone()),
            ("address", record.address.clone()),
            ("capacity", record.capacity.to_string()),
            ("open", flag_value(record.open)),
        ])
    }

    fn from_form(values: &FormValues) -> Result<ParkingLot, String> {
        Ok(ParkingLot {
            id: String::new(),
            name: required_field(values, "name", "名称")?,
            address: required_field(values, "address", "地址")?,
            capacity: int_field(values, "capacity", "车位数")?,
            open: flag_field(values, "open"),
        })
    }

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<ParkingLot>, ApiError> {
        api.send(&ListParkingLots).await
    }

    async fn create(api: &ConsoleApi, record: ParkingLot) -> Result<ParkingLot, ApiError> {
        api.send(&CreateParkingLot(record)).await
    }

    async fn update(
        api: &ConsoleApi,
        id: String,
        mut record: ParkingLot,
    ) -> Result<ParkingLot, ApiError> {
        record.id = id.clone();
        api.send(&UpdateParkingLot { id, record }).await
    }

    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError> {
        api.send(&DeleteParkingLot { id }).await
    }
}

#[component]
pub fn ParkingLotsPage() -> impl IntoView {
    resource_page::<ParkingLotSchema>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::resource::schemas::form;

    #[test]
    fn test_form_parses_capacity_and_flag() {
        let values = form(&[
            ("name", "东门停车场"),
            ("address", "建国路 1 号"),
            ("capacity", "120"),
            ("open", "true"),
        ]);
        let lot = ParkingLotSchema::from_form(&values).unwrap();
        assert_eq!(lot.capacity, 120);
        assert!(lot.open);

        let bad = form(&[
            ("name", "东门停车场"),
            ("address", "建国路 1 号"),
            ("capacity", "abc"),
        ]);
        assert_eq!(
            ParkingLotSchema::from_form(&bad).unwrap_err(),
            "车位数必须是非负整数"
        );
    }

    #[test]
    fn test_cells_align_with_columns() {
        let lot = ParkingLot {
            id: "p1".into(),
            name: "东门停车场".into(),
            address: "建国路 1 号".into(),
            capacity: 120,
            open: false,
        };
        assert_eq!(
            ParkingLotSchema::cells(&lot).len(),
            ParkingLotSchema::columns().len()
        );
        assert_eq!(ParkingLotSchema::cells(&lot)[3], "否");
    }
}
