use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::Patch;
use crate::validation::{require_any, require_text};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub age: String,
    pub sex: String,
    pub nationality: String,
    pub field_of_studying: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Student = Model;

/// Registration body; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub sex: String,
    pub nationality: String,
    pub field_of_studying: String,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("name", &self.name)?;
        require_text("surname", &self.surname)?;
        require_text("age", &self.age)?;
        require_text("sex", &self.sex)?;
        require_text("nationality", &self.nationality)?;
        require_text("field_of_studying", &self.field_of_studying)
    }

    pub fn into_model(self, id: i32) -> Model {
        Model {
            id,
            name: self.name,
            surname: self.surname,
            age: self.age,
            sex: self.sex,
            nationality: self.nationality,
            field_of_studying: self.field_of_studying,
        }
    }

    pub fn into_insert_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            surname: Set(self.surname),
            age: Set(self.age),
            sex: Set(self.sex),
            nationality: Set(self.nationality),
            field_of_studying: Set(self.field_of_studying),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub surname: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub age: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub sex: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub nationality: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub field_of_studying: Patch<String>,
}

impl StudentPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_any(&[
            ("name", &self.name),
            ("surname", &self.surname),
            ("age", &self.age),
            ("sex", &self.sex),
            ("nationality", &self.nationality),
            ("field_of_studying", &self.field_of_studying),
        ])
    }

    pub fn apply(&self, s: &mut Model) {
        if let Some(v) = self.name.as_value() {
            s.name = v.clone();
        }
        if let Some(v) = self.surname.as_value() {
            s.surname = v.clone();
        }
        if let Some(v) = self.age.as_value() {
            s.age = v.clone();
        }
        if let Some(v) = self.sex.as_value() {
            s.sex = v.clone();
        }
        if let Some(v) = self.nationality.as_value() {
            s.nationality = v.clone();
        }
        if let Some(v) = self.field_of_studying.as_value() {
            s.field_of_studying = v.clone();
        }
    }

    pub fn apply_active(&self, am: &mut ActiveModel) {
        if let Some(v) = self.name.as_value() {
            am.name = Set(v.clone());
        }
        if let Some(v) = self.surname.as_value() {
            am.surname = Set(v.clone());
        }
        if let Some(v) = self.age.as_value() {
            am.age = Set(v.clone());
        }
        if let Some(v) = self.sex.as_value() {
            am.sex = Set(v.clone());
        }
        if let Some(v) = self.nationality.as_value() {
            am.nationality = Set(v.clone());
        }
        if let Some(v) = self.field_of_studying.as_value() {
            am.field_of_studying = Set(v.clone());
        }
    }
}
