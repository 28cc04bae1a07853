use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use models::order::{self, Order, OrderPatch};

use super::{CREATE_CONFLICT, UPDATE_CONFLICT};
use crate::db::{map_db_err, map_write_err};
use crate::errors::ServiceError;

/// Persistence for orders keyed by `order_code`.
///
/// Implementations enforce uniqueness of `order_code` and `customer_id` and
/// report violations as `ServiceError::Conflict`.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: Order) -> Result<Order, ServiceError>;
    async fn find(&self, order_code: &str) -> Result<Option<Order>, ServiceError>;
    async fn list(&self) -> Result<Vec<Order>, ServiceError>;
    /// Apply the supplied fields; `NotFound` if the code is absent.
    async fn update(&self, order_code: &str, patch: &OrderPatch) -> Result<Order, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, order_code: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn insert(&self, order: Order) -> Result<Order, ServiceError> {
        order
            .into_insert_model()
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, CREATE_CONFLICT))
    }

    async fn find(&self, order_code: &str) -> Result<Option<Order>, ServiceError> {
        order::Entity::find_by_id(order_code.to_string())
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        order::Entity::find()
            .order_by_asc(order::Column::OrderCode)
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update(&self, order_code: &str, patch: &OrderPatch) -> Result<Order, ServiceError> {
        let Some(existing) = self.find(order_code).await? else {
            return Err(ServiceError::not_found("Order"));
        };
        let mut am: order::ActiveModel = existing.into();
        patch.apply_active(&mut am);
        am.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::not_found("Order"),
            e => map_write_err(e, UPDATE_CONFLICT),
        })
    }

    async fn delete(&self, order_code: &str) -> Result<bool, ServiceError> {
        let res = order::Entity::delete_by_id(order_code.to_string())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory repository for tests and embedding without a database file.
pub mod mock {
    use super::*;
    use crate::storage::memory_table::MemoryTable;

    #[derive(Default)]
    pub struct MemoryOrderRepository {
        orders: MemoryTable<String, Order>,
    }

    #[async_trait]
    impl OrderRepository for MemoryOrderRepository {
        async fn insert(&self, order: Order) -> Result<Order, ServiceError> {
            self.orders.update_map(|m| {
                let taken = m.contains_key(&order.order_code)
                    || m.values().any(|o| o.customer_id == order.customer_id);
                if taken {
                    return Err(ServiceError::Conflict(CREATE_CONFLICT.into()));
                }
                m.insert(order.order_code.clone(), order.clone());
                Ok(order)
            })
        }

        async fn find(&self, order_code: &str) -> Result<Option<Order>, ServiceError> {
            Ok(self.orders.get(&order_code.to_string()))
        }

        async fn list(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(self.orders.list())
        }

        async fn update(&self, order_code: &str, patch: &OrderPatch) -> Result<Order, ServiceError> {
            self.orders.update_map(|m| {
                let mut next = m.get(order_code).cloned().ok_or_else(|| ServiceError::not_found("Order"))?;
                patch.apply(&mut next);
                if m.values().any(|o| o.order_code != order_code && o.customer_id == next.customer_id) {
                    return Err(ServiceError::Conflict(UPDATE_CONFLICT.into()));
                }
                m.insert(order_code.to_string(), next.clone());
                Ok(next)
            })
        }

        async fn delete(&self, order_code: &str) -> Result<bool, ServiceError> {
            Ok(self.orders.remove(&order_code.to_string()))
        }
    }
}
