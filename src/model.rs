//! # Work Order Model
//!
//! The read-only record a form is rendered from. It arrives as JSON from the
//! work-orders API (`GET /work-orders/{reference_id}`) and is never mutated by
//! layout code: every drawing function takes `&WorkOrderDetail`.
//!
//! Only `reference_id` and `deposit` are guaranteed; every other field may be
//! null or missing and is normalised to `None` / empty collections here so the
//! formatters can apply their fallbacks.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Customer block of a work order. Every field is independently nullable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub customer_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub extension_text: Option<String>,
}

/// One billable row of a work order.
///
/// `quantity_text` and `line_total_text` are formatted upstream and printed
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub line_item_id: i64,
    pub item_name: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity_text: Option<String>,
    pub line_total_text: Option<String>,
}

/// Full work order as returned by the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderDetail {
    pub reference_id: i64,
    #[serde(default)]
    pub original_job_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status_key: Option<String>,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub job_type_key: Option<String>,
    #[serde(default)]
    pub job_type_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: Customer,

    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand_names: Vec<String>,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub remote_control_qty: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cable_qty: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cord_qty: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album_cd_cassette_qty: i32,

    #[serde(default)]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub work_done: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub worker_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method_names: Vec<String>,

    #[serde(default)]
    pub parts_total: Option<f64>,
    #[serde(default)]
    pub delivery_total: Option<f64>,
    #[serde(default)]
    pub labour_total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: Vec<LineItem>,
}

impl WorkOrderDetail {
    /// Decode a work order from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a work order from a reader (file, stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FormError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let item = WorkOrderDetail::from_json(r#"{"reference_id": 42}"#).unwrap();
        assert_eq!(item.reference_id, 42);
        assert_eq!(item.deposit, 0.0);
        assert!(item.line_items.is_empty());
        assert_eq!(item.customer, Customer::default());
    }

    #[test]
    fn test_nulls_become_defaults() {
        let json = r#"{
            "reference_id": 7,
            "customer": null,
            "brand_names": null,
            "cable_qty": null,
            "deposit": null,
            "line_items": null,
            "parts_total": null
        }"#;
        let item = WorkOrderDetail::from_json(json).unwrap();
        assert!(item.brand_names.is_empty());
        assert_eq!(item.cable_qty, 0);
        assert_eq!(item.deposit, 0.0);
        assert_eq!(item.parts_total, None);
    }

    #[test]
    fn test_full_record() {
        let json = r#"{
            "reference_id": 10452,
            "original_job_id": "J-88",
            "created_at": "2024-03-05T14:20:00Z",
            "customer": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "city": "Newmarket",
                "extension_text": "204"
            },
            "item_name": "Turntable",
            "brand_names": ["Technics"],
            "remote_control_qty": 1,
            "deposit": 25.5,
            "line_items": [
                {"line_item_id": 1, "item_name": "Belt", "unit_price": 12.0,
                 "quantity_text": "1", "line_total_text": "$12.00"}
            ]
        }"#;
        let item = WorkOrderDetail::from_json(json).unwrap();
        assert_eq!(item.customer.first_name.as_deref(), Some("Ada"));
        assert_eq!(item.customer.extension_text.as_deref(), Some("204"));
        assert_eq!(item.brand_names, vec!["Technics".to_string()]);
        assert_eq!(item.remote_control_qty, 1);
        assert_eq!(item.line_items.len(), 1);
        assert_eq!(item.line_items[0].unit_price, Some(12.0));
    }

    #[test]
    fn test_missing_reference_id_is_an_error() {
        let result = WorkOrderDetail::from_json(r#"{"deposit": 1.0}"#);
        assert!(matches!(result, Err(FormError::Json(_))));
    }
}
