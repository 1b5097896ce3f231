use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PuppyDoc {
    pub id: i32,
    pub name: String,
    pub breed: Option<String>,
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreatePuppyDoc {
    /// Required, 1-50 characters.
    pub name: String,
    /// Up to 20 characters.
    pub breed: Option<String>,
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

/// Omitted keys are left unchanged; `null` clears an optional field.
#[derive(ToSchema)]
pub struct UpdatePuppyDoc {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::puppies::list,
        crate::routes::puppies::get,
        crate::routes::puppies::create,
        crate::routes::puppies::update,
        crate::routes::puppies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PuppyDoc,
            CreatePuppyDoc,
            UpdatePuppyDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "puppies")
    )
)]
pub struct ApiDoc;
