use crate::server::{
    error::{config::ConfigError, AppError},
    model::cart::CartConfig,
    service::pricing::DEFAULT_TAX_RATE_BASIS_POINTS,
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_ITEM_QUANTITY: i32 = 99;
const DEFAULT_CART_ABANDON_AFTER_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    /// Sales tax applied to cart subtotals, in basis points (1500 = 15%).
    pub tax_rate_basis_points: u16,
    /// Upper bound for a single cart line's quantity.
    pub max_item_quantity: i32,
    /// Age in days after which the sweeper marks an untouched active cart abandoned.
    pub cart_abandon_after_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            tax_rate_basis_points: parse_or(
                "TAX_RATE_BASIS_POINTS",
                DEFAULT_TAX_RATE_BASIS_POINTS,
            )?,
            max_item_quantity: parse_or("MAX_ITEM_QUANTITY", DEFAULT_MAX_ITEM_QUANTITY)?,
            cart_abandon_after_days: parse_or(
                "CART_ABANDON_AFTER_DAYS",
                DEFAULT_CART_ABANDON_AFTER_DAYS,
            )?,
        })
    }

    /// Cart tunables handed to the cart and order services.
    pub fn cart_config(&self) -> CartConfig {
        CartConfig {
            tax_rate_basis_points: self.tax_rate_basis_points,
            max_item_quantity: self.max_item_quantity,
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into()),
        Err(_) => Ok(default),
    }
}
