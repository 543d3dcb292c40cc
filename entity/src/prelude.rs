pub use super::about::Entity as About;
pub use super::banner::Entity as Banner;
pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::collection::Entity as Collection;
pub use super::collection_product::Entity as CollectionProduct;
pub use super::message::Entity as Message;
pub use super::order::Entity as Order;
pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
pub use super::user::Entity as User;
