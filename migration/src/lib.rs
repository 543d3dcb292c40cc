pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_products_table;
mod m20250901_000003_create_product_images_table;
mod m20250901_000004_create_collections_table;
mod m20250901_000005_create_collection_product_table;
mod m20250901_000006_create_orders_table;
mod m20250901_000007_create_banners_table;
mod m20250901_000008_create_about_table;
mod m20250901_000009_create_messages_table;
mod m20250911_000010_create_carts_table;
mod m20250911_000011_create_cart_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_products_table::Migration),
            Box::new(m20250901_000003_create_product_images_table::Migration),
            Box::new(m20250901_000004_create_collections_table::Migration),
            Box::new(m20250901_000005_create_collection_product_table::Migration),
            Box::new(m20250901_000006_create_orders_table::Migration),
            Box::new(m20250901_000007_create_banners_table::Migration),
            Box::new(m20250901_000008_create_about_table::Migration),
            Box::new(m20250901_000009_create_messages_table::Migration),
            Box::new(m20250911_000010_create_carts_table::Migration),
            Box::new(m20250911_000011_create_cart_items_table::Migration),
        ]
    }
}
