use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Deserializer, Serialize};

/// Category stored when the client does not supply one.
pub const DEFAULT_CATEGORY: &str = "Condiment";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredient")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(indexed)]
    pub category: String,
    pub quantity: i32,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_category() -> String { DEFAULT_CATEGORY.to_string() }

/// Create-input shape. Has no `id`; an `id` sent by the client is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngredientCreate {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl IngredientCreate {
    /// Only `name` supplied; everything else takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), category: default_category(), quantity: 0, description: None }
    }

    /// Active model with `id` left for the store to generate.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            category: Set(self.category),
            quantity: Set(self.quantity),
            description: Set(self.description),
        }
    }
}

/// Read-output shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngredientRead {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub description: Option<String>,
}

impl From<Model> for IngredientRead {
    fn from(m: Model) -> Self {
        Self { id: m.id, name: m.name, category: m.category, quantity: m.quantity, description: m.description }
    }
}

/// Marks a field as present whenever its key appears in the payload.
/// Paired with `#[serde(default)]`, a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Partial-update shape.
///
/// `None` means the client left the field out. For `description`,
/// `Some(None)` is an explicit `null` and clears the stored value. The other
/// fields are non-nullable, so a `null` for them fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngredientUpdate {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl IngredientUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.quantity.is_none() && self.description.is_none()
    }

    /// Overwrite the fields present in `self`; absent fields keep their value.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(name) = self.name { am.name = Set(name); }
        if let Some(category) = self.category { am.category = Set(category); }
        if let Some(quantity) = self.quantity { am.quantity = Set(quantity); }
        if let Some(description) = self.description { am.description = Set(description); }
    }
}
