//! In-memory repositories for testing and development.
//!
//! These hold the same contracts a relational store would: the coupon
//! increment is a conditional update under one lock, order deletion cascades
//! to items, and tracking-code uniqueness is enforced at insert time.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, CatalogRepository, Product, Variant};
use crate::domain::customers::{Customer, CustomerPatch, CustomerRepository, CustomerStoreError};
use crate::domain::fraud::FraudAssessment;
use crate::domain::ordering::repository::{
    OrderHistoryEntry, OrderPatch, OrderRepository, OrderStoreError,
};
use crate::domain::ordering::{Order, OrderItem, TrackingCode};
use crate::domain::pricing::coupon::Coupon;
use crate::domain::pricing::repository::{CouponRepository, CouponStoreError};
use crate::domain::shared::{OrderId, Phone, ProductId, VariantId};

/// In-memory implementation of `CatalogRepository`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<String, Product>>,
    variants: RwLock<HashMap<String, Variant>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a product (for seeding).
    pub fn put_product(&self, product: Product) {
        self.products
            .write()
            .unwrap()
            .insert(product.id.to_string(), product);
    }

    /// Add or replace a variant (for seeding).
    pub fn put_variant(&self, variant: Variant) {
        self.variants
            .write()
            .unwrap()
            .insert(variant.id.to_string(), variant);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.read().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| products.get(id.as_str()).cloned())
            .collect())
    }

    async fn variants_by_ids(&self, ids: &[VariantId]) -> Result<Vec<Variant>, CatalogError> {
        let variants = self.variants.read().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| variants.get(id.as_str()).cloned())
            .collect())
    }
}

/// In-memory implementation of `CustomerRepository`.
#[derive(Debug, Default)]
pub struct InMemoryCustomers {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomers {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a profile (for seeding).
    pub fn put(&self, customer: Customer) {
        self.customers
            .write()
            .unwrap()
            .insert(customer.phone.as_str().to_string(), customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<Customer>, CustomerStoreError> {
        Ok(self.customers.read().unwrap().get(phone.as_str()).cloned())
    }

    async fn upsert(&self, phone: &Phone, patch: CustomerPatch) -> Result<(), CustomerStoreError> {
        let mut customers = self.customers.write().unwrap();
        let customer = customers
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
        Ok(self.customers.read().unwrap().values().cloned().collect())
    }
}

/// In-memory implementation of `CouponRepository`.
///
/// A single mutex serializes reads and the conditional increment, matching
/// the atomic guarded update a relational store would run.
#[derive(Debug, Default)]
pub struct InMemoryCoupons {
    coupons: Mutex<HashMap<String, Coupon>>,
}

impl InMemoryCoupons {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a coupon (for seeding).
    pub fn put(&self, coupon: Coupon) {
        self.coupons
            .lock()
            .unwrap()
            .insert(coupon.code.clone(), coupon);
    }

    /// Current usage count of a code (for test assertions).
    #[must_use]
    pub fn used_count(&self, code: &str) -> Option<u32> {
        self.coupons.lock().unwrap().get(code).map(|c| c.used_count)
    }
}

#[async_trait]
impl CouponRepository for InMemoryCoupons {
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError> {
        Ok(self.coupons.lock().unwrap().get(code).cloned())
    }

    async fn increment_usage(&self, code: &str) -> Result<bool, CouponStoreError> {
        let mut coupons = self.coupons.lock().unwrap();
        let Some(coupon) = coupons.get_mut(code) else {
            return Err(CouponStoreError::QueryFailed {
                message: format!("No coupon row for code {code}"),
            });
        };
        if let Some(limit) = coupon.usage_limit
            && coupon.used_count >= limit
        {
            return Ok(false);
        }
        coupon.used_count += 1;
        Ok(true)
    }
}

#[derive(Debug, Default)]
struct OrderRows {
    /// Insertion-ordered ids, newest last.
    sequence: Vec<OrderId>,
    orders: HashMap<String, Order>,
    items: HashMap<String, Vec<OrderItem>>,
    tracking_codes: HashSet<String>,
}

/// In-memory implementation of `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    rows: RwLock<OrderRows>,
}

impl InMemoryOrders {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().unwrap().orders.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().unwrap().orders.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert_order(&self, order: &Order) -> Result<(), OrderStoreError> {
        let mut rows = self.rows.write().unwrap();
        let code = order.tracking_code().to_string();
        if !rows.tracking_codes.insert(code.clone()) {
            return Err(OrderStoreError::DuplicateTrackingCode { code });
        }
        rows.sequence.push(order.id().clone());
        rows.orders.insert(order.id().to_string(), order.clone());
        Ok(())
    }

    async fn insert_items(
        &self,
        order_id: &OrderId,
        items: &[OrderItem],
    ) -> Result<(), OrderStoreError> {
        let mut rows = self.rows.write().unwrap();
        if !rows.orders.contains_key(order_id.as_str()) {
            return Err(OrderStoreError::NotFound {
                order_id: order_id.to_string(),
            });
        }
        rows.items.insert(order_id.to_string(), items.to_vec());
        Ok(())
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderStoreError> {
        let mut rows = self.rows.write().unwrap();
        let Some(order) = rows.orders.remove(id.as_str()) else {
            return Err(OrderStoreError::NotFound {
                order_id: id.to_string(),
            });
        };
        rows.items.remove(id.as_str());
        rows.tracking_codes.remove(order.tracking_code().as_str());
        rows.sequence.retain(|seq_id| seq_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        Ok(self.rows.read().unwrap().orders.get(id.as_str()).cloned())
    }

    async fn find_by_tracking_and_phone(
        &self,
        code: &TrackingCode,
        phone: &Phone,
    ) -> Result<Option<Order>, OrderStoreError> {
        let rows = self.rows.read().unwrap();
        Ok(rows
            .orders
            .values()
            .find(|o| o.tracking_code() == code && o.customer_phone() == phone)
            .cloned())
    }

    async fn history_for_phone(
        &self,
        phone: &Phone,
    ) -> Result<Vec<OrderHistoryEntry>, OrderStoreError> {
        let rows = self.rows.read().unwrap();
        Ok(rows
            .orders
            .values()
            .filter(|o| o.customer_phone() == phone)
            .map(|o| OrderHistoryEntry {
                status: o.status(),
                total: o.total(),
            })
            .collect())
    }

    async fn record_fraud(
        &self,
        id: &OrderId,
        assessment: &FraudAssessment,
    ) -> Result<(), OrderStoreError> {
        let mut rows = self.rows.write().unwrap();
        let Some(order) = rows.orders.get_mut(id.as_str()) else {
            return Err(OrderStoreError::NotFound {
                order_id: id.to_string(),
            });
        };
        order.record_fraud(assessment.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Order>, OrderStoreError> {
        let rows = self.rows.read().unwrap();
        Ok(rows
            .sequence
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| rows.orders.get(id.as_str()).cloned())
            .collect())
    }

    async fn update(&self, id: &OrderId, patch: OrderPatch) -> Result<bool, OrderStoreError> {
        let mut rows = self.rows.write().unwrap();
        let Some(order) = rows.orders.get_mut(id.as_str()) else {
            return Ok(false);
        };
        if let Some(status) = patch.status {
            order
                .set_status(status)
                .map_err(|e| OrderStoreError::QueryFailed {
                    message: e.to_string(),
                })?;
        }
        if let Some(delivery_status) = patch.delivery_status {
            order.set_delivery_status(delivery_status);
        }
        if let Some(address) = patch.delivery_address_bn {
            order.set_delivery_address(address);
        }
        if let Some(notes) = patch.notes_bn {
            order.set_notes(notes);
        }
        match (patch.delivery_partner_name, patch.delivery_partner_phone) {
            (None, None) => {}
            (name, phone) => {
                let resolved_name = name
                    .unwrap_or_else(|| order.delivery_partner_name().map(ToString::to_string));
                let resolved_phone = phone
                    .unwrap_or_else(|| order.delivery_partner_phone().map(ToString::to_string));
                order.set_delivery_partner(resolved_name, resolved_phone);
            }
        }
        Ok(true)
    }
}
