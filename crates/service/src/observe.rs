//! Per-operation bookkeeping: metrics counter plus a log line on failure.

use tracing::{error, warn};

use crate::errors::ServiceError;

pub(crate) fn record<T>(entity: &str, operation: &str, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match &res {
        Ok(_) => common::metrics::record_operation(entity, operation, "ok"),
        Err(e) => {
            common::metrics::record_operation(entity, operation, e.kind());
            match e {
                ServiceError::Db(_) => error!(entity, operation, error = %e, "store operation failed"),
                _ => warn!(entity, operation, error = %e, "store operation rejected"),
            }
        }
    }
    res
}
