use crate::db::{connect_in_memory, migrate};
use crate::order;
use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, ActiveModelTrait, SqlErr, Statement};

fn order(code: &str, customer_id: &str) -> order::Model {
    order::Model {
        order_code: code.into(),
        food_name: "Pizza".into(),
        customer_name: "Jane".into(),
        customer_surname: "Doe".into(),
        customer_id: customer_id.into(),
        delivery_address: "1 Main St".into(),
        payment_method: "Cash".into(),
    }
}

/// Test that all tables exist after migration
#[tokio::test]
async fn test_tables_created() -> Result<()> {
    let db = connect_in_memory().await?;
    let rows = db
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        ))
        .await?;
    let names: Vec<String> = rows
        .iter()
        .filter_map(|r| r.try_get::<String>("", "name").ok())
        .collect();
    for t in ["lessons", "orders", "students"] {
        assert!(names.iter().any(|n| n == t), "missing table {t}: {names:?}");
    }
    Ok(())
}

/// Test that running migrations twice is harmless
#[tokio::test]
async fn test_migrate_is_idempotent() -> Result<()> {
    let db = connect_in_memory().await?;
    migrate(&db).await?;
    assert!(order::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

/// Test the primary key and customer_id uniqueness constraints
#[tokio::test]
async fn test_order_unique_constraints() -> Result<()> {
    let db = connect_in_memory().await?;
    order("A1", "C1").into_insert_model().insert(&db).await?;

    let dup_code = order("A1", "C2").into_insert_model().insert(&db).await.unwrap_err();
    assert!(matches!(dup_code.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))), "{dup_code}");

    let dup_customer = order("A2", "C1").into_insert_model().insert(&db).await.unwrap_err();
    assert!(matches!(dup_customer.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))), "{dup_customer}");

    assert_eq!(order::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}
