//! Admin Customers Use Case
//!
//! The customer screen merges two sources: explicitly edited profiles and
//! phones that only exist as order history. Aggregates come from the order
//! store so a never-edited phone still shows its spend.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{AdminCustomerDto, AdminOrderDto, CustomerPatchDto};
use crate::domain::customers::{Customer, CustomerPatch, CustomerRepository};
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::{Money, Phone};
use crate::error::{ApiError, ErrorCode};

/// Orders scanned when building the merged customer list.
const RECENT_ORDERS_SCAN: usize = 500;

/// Use case for the back-office customer screens.
pub struct AdminCustomersUseCase<Cus, O>
where
    Cus: CustomerRepository,
    O: OrderRepository,
{
    customers: Arc<Cus>,
    orders: Arc<O>,
}

impl<Cus, O> AdminCustomersUseCase<Cus, O>
where
    Cus: CustomerRepository,
    O: OrderRepository,
{
    /// Create a new AdminCustomersUseCase.
    pub fn new(customers: Arc<Cus>, orders: Arc<O>) -> Self {
        Self { customers, orders }
    }

    /// List customers merged with recent order phones, sorted by total spend.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on store failures.
    pub async fn list(&self) -> Result<Vec<AdminCustomerDto>, ApiError> {
        let profiles = self
            .customers
            .list()
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;
        let recent = self
            .orders
            .list_recent(RECENT_ORDERS_SCAN)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        let mut merged: HashMap<String, (Customer, u32, Money)> = profiles
            .into_iter()
            .map(|c| (c.phone.as_str().to_string(), (c, 0, Money::ZERO)))
            .collect();

        for order in &recent {
            let key = order.customer_phone().as_str().to_string();
            let entry = merged.entry(key).or_insert_with(|| {
                let mut profile = Customer::bare(order.customer_phone().clone());
                profile.name = Some(order.customer_name().to_string());
                (profile, 0, Money::ZERO)
            });
            entry.1 += 1;
            entry.2 = entry.2 + order.total();
        }

        let mut rows: Vec<AdminCustomerDto> = merged
            .into_values()
            .map(|(profile, total_orders, total_spent)| AdminCustomerDto {
                phone: profile.phone.as_str().to_string(),
                name: profile.name,
                notes: profile.notes,
                is_blocked: profile.is_blocked,
                total_orders,
                total_spent: total_spent.amount(),
            })
            .collect();
        rows.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        Ok(rows)
    }

    /// Single customer profile with their order summaries, newest first.
    ///
    /// A phone that only exists as order history still resolves to a bare
    /// profile, mirroring the merged list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a missing phone and `StoreError` on store
    /// failures.
    pub async fn detail(
        &self,
        phone: &str,
    ) -> Result<(AdminCustomerDto, Vec<AdminOrderDto>), ApiError> {
        let phone = Phone::new(phone);
        if phone.is_empty() {
            return Err(ApiError::invalid_request("Phone number is required"));
        }

        let profile = self
            .customers
            .find_by_phone(&phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?
            .unwrap_or_else(|| Customer::bare(phone.clone()));
        let recent = self
            .orders
            .list_recent(RECENT_ORDERS_SCAN)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        let orders: Vec<AdminOrderDto> = recent
            .iter()
            .filter(|o| o.customer_phone() == &phone)
            .map(|o| AdminOrderDto::from_order(o, false))
            .collect();

        let total_spent = orders
            .iter()
            .fold(Money::ZERO, |acc, o| acc + Money::new(o.total));
        #[allow(clippy::cast_possible_truncation)]
        let total_orders = orders.len() as u32;

        let customer = AdminCustomerDto {
            phone: profile.phone.as_str().to_string(),
            name: profile.name,
            notes: profile.notes,
            is_blocked: profile.is_blocked,
            total_orders,
            total_spent: total_spent.amount(),
        };
        Ok((customer, orders))
    }

    /// Upsert a customer profile and return it with fresh aggregates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a missing phone and `StoreError` on store
    /// failures.
    pub async fn patch(&self, dto: CustomerPatchDto) -> Result<AdminCustomerDto, ApiError> {
        let phone = Phone::new(dto.phone);
        if phone.is_empty() {
            return Err(ApiError::invalid_request("Phone number is required"));
        }

        let patch = CustomerPatch {
            name: dto.name,
            notes: dto.notes,
            is_blocked: dto.is_blocked,
        };
        self.customers
            .upsert(&phone, patch)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        let profile = self
            .customers
            .find_by_phone(&phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?
            .unwrap_or_else(|| Customer::bare(phone.clone()));
        let history = self
            .orders
            .history_for_phone(&phone)
            .await
            .map_err(|e| ApiError::new(ErrorCode::StoreError, e.to_string()))?;

        let total_spent = history
            .iter()
            .fold(Money::ZERO, |acc, entry| acc + entry.total);
        #[allow(clippy::cast_possible_truncation)]
        let total_orders = history.len() as u32;

        tracing::info!(phone = %phone, blocked = profile.is_blocked, "Customer profile upserted");
        Ok(AdminCustomerDto {
            phone: profile.phone.as_str().to_string(),
            name: profile.name,
            notes: profile.notes,
            is_blocked: profile.is_blocked,
            total_orders,
            total_spent: total_spent.amount(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    use crate::domain::catalog::Product;
    use crate::domain::customers::CustomerStoreError;
    use crate::domain::fraud::FraudAssessment;
    use crate::domain::ordering::repository::{OrderHistoryEntry, OrderPatch, OrderStoreError};
    use crate::domain::ordering::{Order, OrderItem, PlaceOrderCommand, TrackingCode};
    use crate::domain::shared::{OrderId, ProductId};

    #[derive(Default)]
    struct FakeCustomers {
        rows: Mutex<HashMap<String, Customer>>,
    }

    #[async_trait]
    impl CustomerRepository for FakeCustomers {
        async fn find_by_phone(
            &self,
            phone: &Phone,
        ) -> Result<Option<Customer>, CustomerStoreError> {
            Ok(self.rows.lock().unwrap().get(phone.as_str()).cloned())
        }

        async fn upsert(
            &self,
            phone: &Phone,
            patch: CustomerPatch,
        ) -> Result<(), CustomerStoreError> {
            let mut rows = self.rows.lock().unwrap();
            let customer = rows
                .entry(phone.as_str().to_string())
                .or_insert_with(|| Customer::bare(phone.clone()));
            if let Some(name) = patch.name {
                customer.name = name;
            }
            if let Some(notes) = patch.notes {
                customer.notes = notes;
            }
            if let Some(is_blocked) = patch.is_blocked {
                customer.is_blocked = is_blocked;
            }
            Ok(())
        }

        async fn list(&self) -> Result<Vec<Customer>, CustomerStoreError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct FakeOrders {
        orders: Vec<Order>,
    }

    #[async_trait]
    impl OrderRepository for FakeOrders {
        async fn insert_order(&self, _order: &Order) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn insert_items(
            &self,
            _order_id: &OrderId,
            _items: &[OrderItem],
        ) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn delete(&self, _id: &OrderId) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
            Ok(None)
        }

        async fn find_by_tracking_and_phone(
            &self,
            _code: &TrackingCode,
            _phone: &Phone,
        ) -> Result<Option<Order>, OrderStoreError> {
            Ok(None)
        }

        async fn history_for_phone(
            &self,
            phone: &Phone,
        ) -> Result<Vec<OrderHistoryEntry>, OrderStoreError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| o.customer_phone() == phone)
                .map(|o| OrderHistoryEntry {
                    status: o.status(),
                    total: o.total(),
                })
                .collect())
        }

        async fn record_fraud(
            &self,
            _id: &OrderId,
            _assessment: &FraudAssessment,
        ) -> Result<(), OrderStoreError> {
            Ok(())
        }

        async fn list_recent(&self, limit: usize) -> Result<Vec<Order>, OrderStoreError> {
            Ok(self.orders.iter().take(limit).cloned().collect())
        }

        async fn update(&self, _id: &OrderId, _patch: OrderPatch) -> Result<bool, OrderStoreError> {
            Ok(false)
        }
    }

    fn order(name: &str, phone: &str, qty: u32) -> Order {
        let product = Product {
            id: ProductId::new("prod-1"),
            title_bn: "শাড়ি".to_string(),
            price: Money::bdt(500),
            is_active: true,
        };
        Order::place(
            PlaceOrderCommand {
                customer_name: name.to_string(),
                customer_phone: Phone::new(phone),
                delivery_address_bn: "ঢাকা".to_string(),
                notes_bn: None,
                coupon_code: None,
                delivery_fee: Money::ZERO,
                discount: Money::ZERO,
                items: vec![OrderItem::snapshot(&product, None, qty)],
            },
            TrackingCode::generate(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn list_merges_profiles_with_order_phones_sorted_by_spend() {
        let customers = FakeCustomers::default();
        customers
            .upsert(
                &Phone::new("01700000001"),
                CustomerPatch {
                    name: Some(Some("Edited".to_string())),
                    ..CustomerPatch::default()
                },
            )
            .await
            .unwrap();
        let orders = FakeOrders {
            orders: vec![
                order("Rahim", "01712345678", 4),
                order("Rahim", "01712345678", 1),
                order("Karim", "01898765432", 2),
            ],
        };
        let uc = AdminCustomersUseCase::new(Arc::new(customers), Arc::new(orders));

        let rows = uc.list().await.unwrap();

        assert_eq!(rows.len(), 3);
        // Biggest spender first: Rahim 2500, Karim 1000, Edited 0.
        assert_eq!(rows[0].phone, "01712345678");
        assert_eq!(rows[0].total_orders, 2);
        assert_eq!(rows[0].total_spent, Decimal::from(2500));
        assert_eq!(rows[2].name.as_deref(), Some("Edited"));
        assert_eq!(rows[2].total_orders, 0);
    }

    #[tokio::test]
    async fn detail_resolves_bare_profile_with_order_summaries() {
        let orders = FakeOrders {
            orders: vec![
                order("Rahim", "01712345678", 4),
                order("Karim", "01898765432", 2),
                order("Rahim", "01712345678", 1),
            ],
        };
        let uc = AdminCustomersUseCase::new(Arc::new(FakeCustomers::default()), Arc::new(orders));

        let (customer, summaries) = uc.detail("01712345678").await.unwrap();

        assert_eq!(customer.phone, "01712345678");
        assert!(!customer.is_blocked);
        assert_eq!(customer.total_orders, 2);
        assert_eq!(customer.total_spent, Decimal::from(2500));
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|o| o.items.is_none()));
    }

    #[tokio::test]
    async fn patch_upserts_and_reports_aggregates() {
        let orders = FakeOrders {
            orders: vec![order("Rahim", "01712345678", 2)],
        };
        let uc = AdminCustomersUseCase::new(Arc::new(FakeCustomers::default()), Arc::new(orders));

        let row = uc
            .patch(CustomerPatchDto {
                phone: "01712345678".to_string(),
                is_blocked: Some(true),
                ..CustomerPatchDto::default()
            })
            .await
            .unwrap();

        assert!(row.is_blocked);
        assert_eq!(row.total_orders, 1);
        assert_eq!(row.total_spent, Decimal::from(1000));
    }

    #[tokio::test]
    async fn patch_requires_phone() {
        let uc = AdminCustomersUseCase::new(
            Arc::new(FakeCustomers::default()),
            Arc::new(FakeOrders::default()),
        );

        let err = uc
            .patch(CustomerPatchDto {
                phone: "  ".to_string(),
                ..CustomerPatchDto::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
