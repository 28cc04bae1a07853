use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use common::client::OrderClient;
use common::CoreError;
use models::order::{Order, OrderPatch};
use models::patch::Patch;
use server::routes;
use server::state::RestaurantState;

struct TestApp {
    base_url: String,
}

/// Restaurant router over a migrated in-memory SQLite database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    let app = routes::build_restaurant_router(RestaurantState::seaorm(db), Path::new("images"), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

fn order(code: &str, customer_id: &str) -> Order {
    Order {
        order_code: code.into(),
        food_name: "Pizza".into(),
        customer_name: "Jane".into(),
        customer_surname: "Doe".into(),
        customer_id: customer_id.into(),
        delivery_address: "1 Main St".into(),
        payment_method: "Cash".into(),
    }
}

#[tokio::test]
async fn e2e_order_client_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = OrderClient::new(&app.base_url)?;

    assert!(client.list().await?.is_empty());
    assert_eq!(client.create(&order("A1", "C1")).await?, order("A1", "C1"));
    assert_eq!(client.get("A1").await?, order("A1", "C1"));

    let patch = OrderPatch { food_name: Patch::Value("Burger".into()), ..Default::default() };
    let updated = client.update("A1", &patch).await?;
    assert_eq!(updated, Order { food_name: "Burger".into(), ..order("A1", "C1") });

    match client.create(&order("A2", "C1")).await {
        Err(CoreError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Order code or customer ID already exists");
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    assert_eq!(client.delete("A1").await?, "Order deleted successfully");
    assert!(matches!(client.get("A1").await, Err(CoreError::Api { status: 404, .. })));
    Ok(())
}

#[tokio::test]
async fn e2e_codes_with_spaces_are_escaped() -> anyhow::Result<()> {
    let app = start_server().await?;
    let cfg = configs::ClientConfig { base_url: app.base_url.clone() };
    let client = OrderClient::from_config(&cfg)?;
    client.create(&order("table 7/b", "C9")).await?;
    assert_eq!(client.get("table 7/b").await?.order_code, "table 7/b");
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["status"], "ok");
    Ok(())
}
