use std::path::Path as FsPath;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::services::ServeFile;
use tracing::info;

use common::types::Message;
use models::order::{Order, OrderPatch};

use crate::errors::JsonApiError;
use crate::state::RestaurantState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Restaurant Orders</title>
<link rel="icon" href="/favicon.ico">
</head>
<body>
<h1>Welcome to the restaurant order service</h1>
<img src="/image" alt="Restaurant">
<p>The order API lives under <a href="/orders/">/orders/</a>; interactive docs at <a href="/swagger-ui">/swagger-ui</a>.</p>
</body>
</html>
"#;

pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// 列出全部订单
#[utoipa::path(get, path = "/orders/", tag = "orders",
    responses((status = 200, description = "All orders, possibly empty", body = [crate::openapi::OrderDoc])))]
pub async fn list(State(state): State<RestaurantState>) -> Result<Json<Vec<Order>>, JsonApiError> {
    Ok(Json(state.orders.list().await?))
}

#[utoipa::path(post, path = "/orders/", tag = "orders",
    request_body = crate::openapi::OrderDoc,
    responses(
        (status = 200, description = "Created order", body = crate::openapi::OrderDoc),
        (status = 400, description = "Duplicate code or customer, or invalid body", body = crate::openapi::ErrorDoc)
    ))]
pub async fn create(
    State(state): State<RestaurantState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<Json<Order>, JsonApiError> {
    let Json(order) = payload?;
    let created = state.orders.create(order).await?;
    Ok(Json(created))
}

#[utoipa::path(get, path = "/orders/{order_code}", tag = "orders",
    params(("order_code" = String, Path, description = "Order code")),
    responses(
        (status = 200, description = "The order", body = crate::openapi::OrderDoc),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn get_one(
    State(state): State<RestaurantState>,
    Path(order_code): Path<String>,
) -> Result<Json<Order>, JsonApiError> {
    Ok(Json(state.orders.get(&order_code).await?))
}

#[utoipa::path(put, path = "/orders/{order_code}", tag = "orders",
    params(("order_code" = String, Path, description = "Order code")),
    request_body = crate::openapi::OrderPatchDoc,
    responses(
        (status = 200, description = "Merged order", body = crate::openapi::OrderDoc),
        (status = 400, description = "Empty, null or conflicting patch", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn update(
    State(state): State<RestaurantState>,
    Path(order_code): Path<String>,
    payload: Result<Json<OrderPatch>, JsonRejection>,
) -> Result<Json<Order>, JsonApiError> {
    let Json(patch) = payload?;
    Ok(Json(state.orders.update(&order_code, patch).await?))
}

#[utoipa::path(delete, path = "/orders/{order_code}", tag = "orders",
    params(("order_code" = String, Path, description = "Order code")),
    responses(
        (status = 200, description = "Order deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn delete(
    State(state): State<RestaurantState>,
    Path(order_code): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state.orders.delete(&order_code).await?;
    info!(%order_code, "DELETE /orders");
    Ok(Json(Message::new("Order deleted successfully")))
}

/// Landing page, static images and the order CRUD routes.
/// `/orders` without the trailing slash is accepted as well.
pub fn router(assets_dir: &FsPath) -> Router<RestaurantState> {
    Router::new()
        .route("/", get(landing))
        .route_service("/image", ServeFile::new(assets_dir.join("get.jpg")))
        .route_service("/favicon.ico", ServeFile::new(assets_dir.join("icon.ico")))
        .route("/orders/", get(list).post(create))
        .route("/orders", get(list).post(create))
        .route("/orders/:order_code", get(get_one).put(update).delete(delete))
}
