use axum::{extract::Path, routing::get, Json, Router};

use common::types::Message;

pub async fn root() -> Json<Message> {
    Json(Message::new("Hello World"))
}

pub async fn greet(Path(name): Path<String>) -> Json<Message> {
    Json(Message::new(format!("Hello {name}")))
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello/:name", get(greet))
}
