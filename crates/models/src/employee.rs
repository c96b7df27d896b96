//! The `employees` entity, its typed views, and the request validator.
//!
//! Request bodies arrive as an untyped JSON object and only become an
//! [`EmployeeFields`] once [`validate`] accepts them.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Required string fields, in the order they are checked and bound.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "firstName",
    "lastName",
    "patronymic",
    "telephone",
    "email",
    "country",
    "city",
];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "firstName")]
    pub first_name: String,
    #[sea_orm(column_name = "lastName")]
    pub last_name: String,
    pub patronymic: String,
    pub telephone: String,
    pub email: String,
    pub country: String,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The seven caller-supplied fields, without id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub telephone: String,
    pub email: String,
    pub country: String,
    pub city: String,
}

/// A persisted employee: generated id plus the seven fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

/// Output of [`validate`]. An integer `id` on the candidate is carried through as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidEmployee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

impl EmployeeFields {
    /// Active model with every field set and `id` left to the database.
    pub fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
            patronymic: Set(self.patronymic.clone()),
            telephone: Set(self.telephone.clone()),
            email: Set(self.email.clone()),
            country: Set(self.country.clone()),
            city: Set(self.city.clone()),
        }
    }

    pub fn with_id(self, id: i64) -> Employee {
        Employee { id, fields: self }
    }
}

impl From<Model> for EmployeeFields {
    fn from(m: Model) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
            patronymic: m.patronymic,
            telephone: m.telephone,
            email: m.email,
            country: m.country,
            city: m.city,
        }
    }
}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        let id = m.id;
        EmployeeFields::from(m).with_id(id)
    }
}

/// Check a candidate record against the required-field rules.
///
/// Rules run in a fixed order and stop at the first failure: the body must be
/// present, then each of [`REQUIRED_FIELDS`] must be a non-empty JSON string.
/// Whitespace-only strings are accepted; nothing is trimmed.
pub fn validate(candidate: Option<&Map<String, Value>>) -> Result<ValidEmployee, ValidationError> {
    let item = candidate.ok_or(ValidationError::MissingBody)?;
    let field = |name: &'static str| -> Result<String, ValidationError> {
        match item.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(ValidationError::MissingField(name)),
        }
    };

    let fields = EmployeeFields {
        first_name: field("firstName")?,
        last_name: field("lastName")?,
        patronymic: field("patronymic")?,
        telephone: field("telephone")?,
        email: field("email")?,
        country: field("country")?,
        city: field("city")?,
    };

    Ok(ValidEmployee {
        id: item.get("id").and_then(Value::as_i64),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ann() -> Map<String, Value> {
        match json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "patronymic": "-",
            "telephone": "+1",
            "email": "a@b.com",
            "country": "US",
            "city": "NY"
        }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn absent_body_is_missing_body() {
        assert_eq!(validate(None), Err(ValidationError::MissingBody));
    }

    #[test]
    fn each_missing_field_is_reported_by_name() {
        for name in REQUIRED_FIELDS {
            let mut item = ann();
            item.remove(name);
            assert_eq!(validate(Some(&item)), Err(ValidationError::MissingField(name)), "{name}");
        }
    }

    #[test]
    fn first_missing_field_in_declaration_order_wins() {
        let mut item = ann();
        item.remove("city");
        item.remove("telephone");
        item.remove("lastName");
        assert_eq!(validate(Some(&item)), Err(ValidationError::MissingField("lastName")));
    }

    #[test]
    fn empty_string_fails_but_whitespace_passes() {
        let mut item = ann();
        item.insert("email".into(), json!(""));
        assert_eq!(validate(Some(&item)), Err(ValidationError::MissingField("email")));

        let mut item = ann();
        item.insert("email".into(), json!("   "));
        assert_eq!(validate(Some(&item)).unwrap().fields.email, "   ");
    }

    #[test]
    fn non_string_values_are_missing() {
        for bad in [json!(null), json!(5), json!(true), json!(["Ann"]), json!({"v": "Ann"})] {
            let mut item = ann();
            item.insert("firstName".into(), bad.clone());
            assert_eq!(
                validate(Some(&item)),
                Err(ValidationError::MissingField("firstName")),
                "{bad}"
            );
        }
    }

    #[test]
    fn valid_record_is_returned_unchanged() {
        let item = ann();
        let valid = validate(Some(&item)).unwrap();
        assert_eq!(valid.id, None);
        assert_eq!(valid.fields.first_name, "Ann");
        assert_eq!(valid.fields.city, "NY");
        assert_eq!(serde_json::to_value(&valid).unwrap(), Value::Object(item));
    }

    #[test]
    fn client_id_is_carried_through() {
        let mut item = ann();
        item.insert("id".into(), json!(42));
        let valid = validate(Some(&item)).unwrap();
        assert_eq!(valid.id, Some(42));
        assert_eq!(serde_json::to_value(&valid).unwrap(), Value::Object(item));
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(ValidationError::MissingField("city").to_string(), "the city is required");
        assert_eq!(ValidationError::MissingBody.to_string(), "the item must not be null");
    }

    #[test]
    fn list_view_drops_id_and_full_view_keeps_it() {
        let model = Model {
            id: 9,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            patronymic: "-".into(),
            telephone: "+1".into(),
            email: "a@b.com".into(),
            country: "US".into(),
            city: "NY".into(),
        };

        let full = serde_json::to_value(Employee::from(model.clone())).unwrap();
        assert_eq!(full["id"], 9);
        assert_eq!(full["firstName"], "Ann");

        let listed = serde_json::to_value(EmployeeFields::from(model)).unwrap();
        assert!(listed.get("id").is_none());
        assert_eq!(listed.as_object().unwrap().len(), 7);
        for name in REQUIRED_FIELDS {
            assert!(listed.get(name).is_some(), "{name}");
        }
    }

    #[test]
    fn active_model_leaves_id_unset() {
        let fields = validate(Some(&ann())).unwrap().fields;
        let am = fields.to_active_model();
        assert!(am.id.is_not_set());
        assert_eq!(am.first_name, Set("Ann".to_string()));
    }
}
