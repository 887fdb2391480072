use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct IngredientCreateDoc {
    pub name: String,
    /// Defaults to "Condiment"
    pub category: Option<String>,
    /// Defaults to 0
    pub quantity: Option<i32>,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct IngredientReadDoc {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub description: Option<String>,
}

/// Only the fields sent are changed; `description: null` clears it.
#[derive(ToSchema)]
pub struct IngredientUpdateDoc {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct DeleteAckDoc { pub ok: bool }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::ingredients::create,
        crate::routes::ingredients::list,
        crate::routes::ingredients::get,
        crate::routes::ingredients::update,
        crate::routes::ingredients::delete,
    ),
    components(
        schemas(
            HealthResponse,
            IngredientCreateDoc,
            IngredientReadDoc,
            IngredientUpdateDoc,
            DeleteAckDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "ingredients")
    )
)]
pub struct ApiDoc;
