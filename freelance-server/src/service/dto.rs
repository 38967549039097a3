//! API-facing data transfer objects
//!
//! "Simple" DTOs carry scalar fields only and are used for lists and nested
//! references; full DTOs add the entity's relations. JSON field names are
//! camelCase (`freelancerName`, `orderTerm`, ...).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub freelancer_name: String,
    #[serde(default)]
    pub freelancer_second_name: String,
    pub freelancer_email: String,
    #[serde(default)]
    pub qualifications: Vec<QualificationSimpleDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerSimpleDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub freelancer_name: String,
    #[serde(default)]
    pub freelancer_second_name: String,
    pub freelancer_email: String,
}

/// Order with its qualification reference.
///
/// `orderPrice` is written as a decimal string keeping its full scale
/// (`"1600.00"`); both strings and JSON numbers are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_title: String,
    #[serde(default)]
    pub order_description: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub order_price: Decimal,
    pub order_term: NaiveDate,
    #[serde(default)]
    pub qualification: Option<QualificationSimpleDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSimpleDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_title: String,
    #[serde(default)]
    pub order_description: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub order_price: Decimal,
    pub order_term: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub qualification_name: String,
    #[serde(default)]
    pub orders: Vec<OrderSimpleDto>,
    #[serde(default)]
    pub freelancers: Vec<FreelancerSimpleDto>,
}

/// Qualification reference; inside other DTOs usually only `id` is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationSimpleDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub qualification_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn order_json_uses_camel_case_date_and_full_scale_price() {
        let dto = OrderDto {
            id: Some(3),
            order_title: "Разработка Rest API".into(),
            order_description: String::new(),
            order_price: dec("1600.00"),
            order_term: NaiveDate::from_ymd_opt(2024, 4, 17).unwrap(),
            qualification: Some(QualificationSimpleDto {
                id: Some(1),
                qualification_name: String::new(),
            }),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["orderTitle"], "Разработка Rest API");
        assert_eq!(json["orderPrice"], "1600.00");
        assert_eq!(json["orderTerm"], "2024-04-17");
        assert_eq!(json["qualification"]["id"], 1);
    }

    #[test]
    fn order_price_accepts_number_or_string() {
        let from_number: OrderSimpleDto = serde_json::from_str(
            r#"{"orderTitle":"t","orderPrice":1600.5,"orderTerm":"2024-04-17"}"#,
        )
        .unwrap();
        let from_string: OrderSimpleDto = serde_json::from_str(
            r#"{"orderTitle":"t","orderPrice":"1600.50","orderTerm":"2024-04-17"}"#,
        )
        .unwrap();

        assert_eq!(from_number.order_price, from_string.order_price);
        assert_eq!(from_string.order_price.to_string(), "1600.50");
        assert_eq!(from_string.id, None);
    }

    #[test]
    fn numeric_price_keeps_every_digit_and_scale() {
        let big: OrderSimpleDto = serde_json::from_str(
            r#"{"orderTitle":"t","orderPrice":12345678901234567.89,"orderTerm":"2024-04-17"}"#,
        )
        .unwrap();
        assert_eq!(big.order_price.to_string(), "12345678901234567.89");

        let scaled: OrderSimpleDto = serde_json::from_str(
            r#"{"orderTitle":"t","orderPrice":1600.00,"orderTerm":"2024-04-17"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&scaled).unwrap();
        assert_eq!(json["orderPrice"], "1600.00");
    }

    #[test]
    fn freelancer_relations_default_to_empty() {
        let dto: FreelancerDto = serde_json::from_str(
            r#"{"freelancerName":"Марк","freelancerEmail":"kushin@test.com"}"#,
        )
        .unwrap();

        assert!(dto.qualifications.is_empty());
        assert_eq!(dto.freelancer_second_name, "");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<FreelancerDto, _> =
            serde_json::from_str(r#"{"freelancerName":"Марк"}"#);
        assert!(result.is_err());
    }
}
