use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct DogDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub age: i32,
    pub breed: String,
}

/// All four fields are required; no other keys are accepted.
#[derive(ToSchema)]
pub struct NewDogDoc {
    pub name: String,
    pub description: String,
    pub age: f64,
    pub breed: String,
}

/// Any subset of the four fields.
#[derive(ToSchema)]
pub struct DogPatchDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub age: Option<f64>,
    pub breed: Option<String>,
}

#[derive(ToSchema)]
pub struct ValidationErrorsDoc { pub errors: Vec<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello,
        crate::routes::health,
        crate::routes::dogs::list,
        crate::routes::dogs::get,
        crate::routes::dogs::create,
        crate::routes::dogs::update,
        crate::routes::dogs::delete,
    ),
    components(
        schemas(
            MessageDoc,
            DogDoc,
            NewDogDoc,
            DogPatchDoc,
            ValidationErrorsDoc,
        )
    ),
    tags(
        (name = "root"),
        (name = "dogs")
    )
)]
pub struct ApiDoc;
