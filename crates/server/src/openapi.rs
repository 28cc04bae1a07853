use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    /// `validation`, `conflict`, `not_found` or `database`
    pub error: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    pub message: String,
}

#[derive(ToSchema)]
pub struct CreatedDoc {
    pub message: String,
    pub id: i32,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub order_code: String,
    pub food_name: String,
    pub customer_name: String,
    pub customer_surname: String,
    pub customer_id: String,
    pub delivery_address: String,
    pub payment_method: String,
}

/// Supply at least one field; `null` is rejected.
#[derive(ToSchema)]
pub struct OrderPatchDoc {
    pub food_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_surname: Option<String>,
    pub customer_id: Option<String>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
}

#[derive(ToSchema)]
pub struct NewStudentDoc {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub sex: String,
    pub nationality: String,
    pub field_of_studying: String,
}

#[derive(ToSchema)]
pub struct StudentDoc {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub age: String,
    pub sex: String,
    pub nationality: String,
    pub field_of_studying: String,
}

#[derive(ToSchema)]
pub struct StudentPatchDoc {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub nationality: Option<String>,
    pub field_of_studying: Option<String>,
}

#[derive(ToSchema)]
pub struct NewLessonDoc {
    pub name: String,
    pub field_of_studying: String,
}

#[derive(ToSchema)]
pub struct LessonDoc {
    pub id: i32,
    pub name: String,
    pub field_of_studying: String,
}

#[derive(ToSchema)]
pub struct LessonPatchDoc {
    pub name: Option<String>,
    pub field_of_studying: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get_one,
        crate::routes::orders::update,
        crate::routes::orders::delete,
    ),
    components(schemas(HealthResponse, ErrorDoc, MessageDoc, OrderDoc, OrderPatchDoc)),
    tags((name = "health"), (name = "orders"))
)]
pub struct RestaurantApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::university::register_student,
        crate::routes::university::list_students,
        crate::routes::university::get_student,
        crate::routes::university::update_student,
        crate::routes::university::delete_student,
        crate::routes::university::add_lesson,
        crate::routes::university::list_lessons,
        crate::routes::university::get_lesson,
        crate::routes::university::update_lesson,
        crate::routes::university::delete_lesson,
    ),
    components(schemas(
        HealthResponse,
        ErrorDoc,
        MessageDoc,
        CreatedDoc,
        NewStudentDoc,
        StudentDoc,
        StudentPatchDoc,
        NewLessonDoc,
        LessonDoc,
        LessonPatchDoc,
    )),
    tags((name = "health"), (name = "students"), (name = "lessons"))
)]
pub struct UniversityApiDoc;
