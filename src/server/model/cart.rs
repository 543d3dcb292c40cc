//! Cart aggregates, owner identity, and cart tunables.

use sea_orm::ActiveEnum;

use crate::{
    model::cart::{CartDto, CartItemDto},
    server::{model::product, service::pricing},
};

/// Identity a cart is looked up by.
///
/// Resolution is deterministic: an authenticated user always resolves to
/// `User(id)` regardless of any session header the request also carries;
/// anonymous callers resolve to the session token they supplied (or, failing
/// that, their network address). The HTTP layer resolves identity once and
/// passes the result down; no ambient request state below the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerKey {
    User(i32),
    Session(String),
}

impl OwnerKey {
    /// The value stored in the cart's `owner_key` column while active.
    pub fn key(&self) -> String {
        match self {
            Self::User(id) => format!("user:{}", id),
            Self::Session(sid) => format!("session:{}", sid),
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::User(id) => Some(*id),
            Self::Session(_) => None,
        }
    }

    pub fn session_id(&self) -> Option<String> {
        match self {
            Self::User(_) => None,
            Self::Session(sid) => Some(sid.clone()),
        }
    }
}

/// Cart tunables loaded from configuration at startup.
#[derive(Debug, Clone, Copy)]
pub struct CartConfig {
    /// Sales tax in basis points (1500 = 15%).
    pub tax_rate_basis_points: u16,
    /// Upper bound for a single line's quantity.
    pub max_item_quantity: i32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            tax_rate_basis_points: pricing::DEFAULT_TAX_RATE_BASIS_POINTS,
            max_item_quantity: 99,
        }
    }
}

/// Derived cart totals, recomputed on every read and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// One cart line joined with its product, as materialized by the repository.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item: entity::cart_item::Model,
    pub product: Option<entity::product::Model>,
}

impl CartLine {
    pub fn into_dto(self) -> CartItemDto {
        let line_total = pricing::line_total_cents(&self.item);

        CartItemDto {
            id: self.item.id,
            cart_id: self.item.cart_id,
            product_id: self.item.product_id,
            product: self.product.map(product::to_summary_dto),
            quantity: self.item.quantity,
            unit_price_cents: self.item.unit_price_cents,
            line_total_cents: line_total,
        }
    }
}

/// Fully materialized cart aggregate: the row, its lines, and derived totals.
#[derive(Debug, Clone)]
pub struct CartView {
    pub cart: entity::cart::Model,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartView {
    /// Assembles the aggregate, computing totals from the snapshotted line prices.
    pub fn new(
        cart: entity::cart::Model,
        lines: Vec<CartLine>,
        tax_rate_basis_points: u16,
    ) -> Self {
        let totals = pricing::compute_totals(
            lines.iter().map(|line| &line.item),
            tax_rate_basis_points,
        );

        Self {
            cart,
            lines,
            totals,
        }
    }

    pub fn into_dto(self) -> CartDto {
        CartDto {
            id: self.cart.id,
            user_id: self.cart.user_id,
            session_id: self.cart.session_id,
            status: self.cart.status.to_value(),
            items: self.lines.into_iter().map(CartLine::into_dto).collect(),
            total_items: self.totals.total_items,
            subtotal_cents: self.totals.subtotal_cents,
            tax_cents: self.totals.tax_cents,
            total_cents: self.totals.total_cents,
            created_at: self.cart.created_at,
            updated_at: self.cart.updated_at,
        }
    }
}
