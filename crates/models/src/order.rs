use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::Patch;
use crate::validation::{require_any, require_text};

/// A restaurant order. Serialized as-is on the wire.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_code: String,
    pub food_name: String,
    pub customer_name: String,
    pub customer_surname: String,
    #[sea_orm(unique)]
    pub customer_id: String,
    pub delivery_address: String,
    pub payment_method: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Order = Model;

impl Model {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("order_code", &self.order_code)?;
        require_text("food_name", &self.food_name)?;
        require_text("customer_name", &self.customer_name)?;
        require_text("customer_surname", &self.customer_surname)?;
        require_text("customer_id", &self.customer_id)?;
        require_text("delivery_address", &self.delivery_address)?;
        require_text("payment_method", &self.payment_method)
    }

    /// Active model with every column `Set`, ready for `insert`.
    pub fn into_insert_model(self) -> ActiveModel {
        ActiveModel {
            order_code: Set(self.order_code),
            food_name: Set(self.food_name),
            customer_name: Set(self.customer_name),
            customer_surname: Set(self.customer_surname),
            customer_id: Set(self.customer_id),
            delivery_address: Set(self.delivery_address),
            payment_method: Set(self.payment_method),
        }
    }
}

/// Partial update body. `order_code` is the address of the record and is
/// not accepted here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub food_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub customer_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub customer_surname: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub customer_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub delivery_address: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub payment_method: Patch<String>,
}

impl OrderPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_any(&[
            ("food_name", &self.food_name),
            ("customer_name", &self.customer_name),
            ("customer_surname", &self.customer_surname),
            ("customer_id", &self.customer_id),
            ("delivery_address", &self.delivery_address),
            ("payment_method", &self.payment_method),
        ])
    }

    /// Names of the supplied fields, for logging.
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        [
            ("food_name", &self.food_name),
            ("customer_name", &self.customer_name),
            ("customer_surname", &self.customer_surname),
            ("customer_id", &self.customer_id),
            ("delivery_address", &self.delivery_address),
            ("payment_method", &self.payment_method),
        ]
        .into_iter()
        .filter(|(_, p)| !p.is_missing())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn apply(&self, order: &mut Model) {
        if let Some(v) = self.food_name.as_value() {
            order.food_name = v.clone();
        }
        if let Some(v) = self.customer_name.as_value() {
            order.customer_name = v.clone();
        }
        if let Some(v) = self.customer_surname.as_value() {
            order.customer_surname = v.clone();
        }
        if let Some(v) = self.customer_id.as_value() {
            order.customer_id = v.clone();
        }
        if let Some(v) = self.delivery_address.as_value() {
            order.delivery_address = v.clone();
        }
        if let Some(v) = self.payment_method.as_value() {
            order.payment_method = v.clone();
        }
    }

    pub fn apply_active(&self, am: &mut ActiveModel) {
        if let Some(v) = self.food_name.as_value() {
            am.food_name = Set(v.clone());
        }
        if let Some(v) = self.customer_name.as_value() {
            am.customer_name = Set(v.clone());
        }
        if let Some(v) = self.customer_surname.as_value() {
            am.customer_surname = Set(v.clone());
        }
        if let Some(v) = self.customer_id.as_value() {
            am.customer_id = Set(v.clone());
        }
        if let Some(v) = self.delivery_address.as_value() {
            am.delivery_address = Set(v.clone());
        }
        if let Some(v) = self.payment_method.as_value() {
            am.payment_method = Set(v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Model {
        Model {
            order_code: "A1".into(),
            food_name: "Pizza".into(),
            customer_name: "Jane".into(),
            customer_surname: "Doe".into(),
            customer_id: "C1".into(),
            delivery_address: "1 Main St".into(),
            payment_method: "Cash".into(),
        }
    }

    #[test]
    fn order_json_is_flat() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["order_code"], "A1");
        assert_eq!(v["customer_id"], "C1");
        assert_eq!(v.as_object().unwrap().len(), 7);
    }

    #[test]
    fn blank_field_fails_validation() {
        let mut o = sample();
        o.customer_id = " ".into();
        assert!(matches!(o.validate(), Err(ModelError::Validation(_))));
    }

    #[test]
    fn patch_rejects_order_code() {
        let res: Result<OrderPatch, _> = serde_json::from_str(r#"{"order_code": "B2"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn patch_changes_only_supplied_fields() {
        let patch: OrderPatch = serde_json::from_str(r#"{"payment_method": "Online Transfer"}"#).unwrap();
        patch.validate().unwrap();
        assert_eq!(patch.supplied_fields(), vec!["payment_method"]);
        let mut o = sample();
        patch.apply(&mut o);
        assert_eq!(o.payment_method, "Online Transfer");
        assert_eq!(Model { payment_method: "Cash".into(), ..o }, sample());
    }
}
