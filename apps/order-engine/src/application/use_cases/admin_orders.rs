//! Admin Orders Use Case

use std::sync::Arc;

use crate::application::dto::{AdminOrderDto, AdminOrdersQuery, OrderPatchDto};
use crate::domain::ordering::Order;
use crate::domain::ordering::repository::{OrderPatch, OrderRepository, OrderStoreError};
use crate::domain::shared::OrderId;
use crate::error::{ApiError, ErrorCode};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 500;

/// Use case for the back-office order screens.
pub struct AdminOrdersUseCase<O>
where
    O: OrderRepository,
{
    orders: Arc<O>,
}

impl<O> AdminOrdersUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new AdminOrdersUseCase.
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// List recent orders, or fetch one order with its items when the query
    /// names an id.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` for an unknown id and `StoreError` on store
    /// failures.
    pub async fn list(&self, query: AdminOrdersQuery) -> Result<Vec<AdminOrderDto>, ApiError> {
        if let Some(id) = &query.id {
            let order = self.load(id).await?;
            return Ok(vec![AdminOrderDto::from_order(&order, true)]);
        }

        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let orders = self
            .orders
            .list_recent(limit)
            .await
            .map_err(store_error)?;

        let filtered = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                orders
                    .into_iter()
                    .filter(|o| matches_search(o, &needle))
                    .collect()
            }
            None => orders,
        };

        Ok(filtered
            .iter()
            .map(|o| AdminOrderDto::from_order(o, false))
            .collect())
    }

    /// Apply a partial update and return the refreshed order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty patch, `OrderFinalized` when
    /// changing the status of a delivered or cancelled order, `OrderNotFound`
    /// for an unknown id and `StoreError` on store failures.
    pub async fn patch(&self, dto: OrderPatchDto) -> Result<AdminOrderDto, ApiError> {
        let patch = OrderPatch {
            status: dto.status,
            delivery_status: dto.delivery_status,
            delivery_address_bn: dto
                .delivery_address_bn
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            notes_bn: dto.notes_bn,
            delivery_partner_name: dto.delivery_partner_name,
            delivery_partner_phone: dto.delivery_partner_phone,
        };
        if patch.is_empty() {
            return Err(ApiError::invalid_request("Patch contains no changes"));
        }

        let order = self.load(&dto.id).await?;
        if let Some(status) = patch.status
            && order.status().is_terminal()
            && status != order.status()
        {
            return Err(ApiError::new(
                ErrorCode::OrderFinalized,
                format!("Order is already {} and cannot change status", order.status()),
            ));
        }

        let id = order.id().clone();
        let updated = self
            .orders
            .update(&id, patch)
            .await
            .map_err(store_error)?;
        if !updated {
            return Err(ApiError::new(
                ErrorCode::OrderNotFound,
                format!("Order not found: {id}"),
            ));
        }

        let order = self.load(id.as_str()).await?;
        tracing::info!(order_id = %id, "Order patched");
        Ok(AdminOrderDto::from_order(&order, true))
    }

    /// Delete an order and its items.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` for an unknown id and `StoreError` on store
    /// failures.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let id = OrderId::new(id.trim());
        match self.orders.delete(&id).await {
            Ok(()) => {
                tracing::info!(order_id = %id, "Order deleted");
                Ok(())
            }
            Err(OrderStoreError::NotFound { order_id }) => Err(ApiError::new(
                ErrorCode::OrderNotFound,
                format!("Order not found: {order_id}"),
            )),
            Err(e) => Err(store_error(e)),
        }
    }

    async fn load(&self, id: &str) -> Result<Order, ApiError> {
        let id = OrderId::new(id.trim());
        self.orders
            .find_by_id(&id)
            .await
            .map_err(store_error)?
            .ok_or_else(|| {
                ApiError::new(ErrorCode::OrderNotFound, format!("Order not found: {id}"))
            })
    }
}

fn store_error(e: OrderStoreError) -> ApiError {
    ApiError::new(ErrorCode::StoreError, e.to_string())
}

fn matches_search(order: &Order, needle: &str) -> bool {
    order
        .tracking_code()
        .as_str()
        .to_lowercase()
        .contains(needle)
        || order.customer_name().to_lowercase().contains(needle)
        || order.customer_phone().as_str().contains(needle)
}
