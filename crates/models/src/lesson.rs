use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::Patch;
use crate::validation::{require_any, require_text};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub field_of_studying: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Lesson = Model;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLesson {
    pub name: String,
    pub field_of_studying: String,
}

impl NewLesson {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("name", &self.name)?;
        require_text("field_of_studying", &self.field_of_studying)
    }

    pub fn into_model(self, id: i32) -> Model {
        Model { id, name: self.name, field_of_studying: self.field_of_studying }
    }

    pub fn into_insert_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            field_of_studying: Set(self.field_of_studying),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LessonPatch {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub field_of_studying: Patch<String>,
}

impl LessonPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_any(&[("name", &self.name), ("field_of_studying", &self.field_of_studying)])
    }

    pub fn apply(&self, l: &mut Model) {
        if let Some(v) = self.name.as_value() {
            l.name = v.clone();
        }
        if let Some(v) = self.field_of_studying.as_value() {
            l.field_of_studying = v.clone();
        }
    }

    pub fn apply_active(&self, am: &mut ActiveModel) {
        if let Some(v) = self.name.as_value() {
            am.name = Set(v.clone());
        }
        if let Some(v) = self.field_of_studying.as_value() {
            am.field_of_studying = Set(v.clone());
        }
    }
}
