use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::order::{Order, OrderPatch};

use super::repository::{mock::MemoryOrderRepository, OrderRepository, SeaOrmOrderRepository};
use crate::errors::ServiceError;
use crate::observe::record;

/// Order business service independent of web framework.
///
/// Validates input, then delegates to the injected repository.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmOrderRepository { db }))
    }

    /// Service over a fresh in-memory store.
    ///
    /// # Examples
    /// ```
    /// use service::order::OrderService;
    /// use models::order::Order;
    /// let svc = OrderService::in_memory();
    /// let order = Order {
    ///     order_code: "A1".into(), food_name: "Pizza".into(), customer_name: "Jane".into(),
    ///     customer_surname: "Doe".into(), customer_id: "C1".into(),
    ///     delivery_address: "1 Main St".into(), payment_method: "Cash".into(),
    /// };
    /// let created = tokio_test::block_on(svc.create(order.clone())).unwrap();
    /// assert_eq!(created, order);
    /// assert!(tokio_test::block_on(svc.create(order)).is_err());
    /// ```
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryOrderRepository::default()))
    }

    #[instrument(skip(self, order), fields(order_code = %order.order_code))]
    pub async fn create(&self, order: Order) -> Result<Order, ServiceError> {
        let res: Result<Order, ServiceError> = async {
            order.validate()?;
            let created = self.repo.insert(order).await?;
            info!(order_code = %created.order_code, customer_id = %created.customer_id, "order created");
            Ok(created)
        }
        .await;
        record("order", "create", res)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, order_code: &str) -> Result<Order, ServiceError> {
        let res = match self.repo.find(order_code).await {
            Ok(Some(o)) => Ok(o),
            Ok(None) => Err(ServiceError::not_found("Order")),
            Err(e) => Err(e),
        };
        record("order", "get", res)
    }

    /// All orders by `order_code`; empty when none exist.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        record("order", "list", self.repo.list().await)
    }

    /// Apply a partial update. The payload is checked before the lookup, so
    /// an empty patch is a validation error even for unknown codes.
    #[instrument(skip(self, patch), fields(supplied = ?patch.supplied_fields()))]
    pub async fn update(&self, order_code: &str, patch: OrderPatch) -> Result<Order, ServiceError> {
        let res: Result<Order, ServiceError> = async {
            patch.validate()?;
            let updated = self.repo.update(order_code, &patch).await?;
            info!(%order_code, "order updated");
            Ok(updated)
        }
        .await;
        record("order", "update", res)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, order_code: &str) -> Result<(), ServiceError> {
        let res = match self.repo.delete(order_code).await {
            Ok(true) => {
                info!(%order_code, "order deleted");
                Ok(())
            }
            Ok(false) => Err(ServiceError::not_found("Order")),
            Err(e) => Err(e),
        };
        record("order", "delete", res)
    }
}
