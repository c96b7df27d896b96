use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Request body of create/update, and one element of the list response.
#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFieldsDoc {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub telephone: String,
    pub email: String,
    pub country: String,
    pub city: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub telephone: String,
    pub email: String,
    pub country: String,
    pub city: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::create,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeFieldsDoc,
            EmployeeDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
