use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{about, auth, banner, cart, collection, dashboard, message, order, product},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "E-commerce back-office API: catalog, cart, orders, and content"
    ),
    tags(
        (name = "auth", description = "Accounts and sessions"),
        (name = "product", description = "Catalog products"),
        (name = "collection", description = "Curated product collections"),
        (name = "cart", description = "Shopping cart"),
        (name = "order", description = "Checkout and order management"),
        (name = "banner", description = "Homepage banners"),
        (name = "about", description = "About page content"),
        (name = "message", description = "Contact messages"),
        (name = "dashboard", description = "Back-office aggregates")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::update_profile))
        .routes(routes!(product::list_products, product::create_product))
        .routes(routes!(
            product::get_product,
            product::update_product,
            product::deactivate_product
        ))
        .routes(routes!(product::restore_product))
        .routes(routes!(product::add_product_image))
        .routes(routes!(product::delete_product_image))
        .routes(routes!(
            collection::list_collections,
            collection::create_collection
        ))
        .routes(routes!(
            collection::get_collection,
            collection::update_collection,
            collection::deactivate_collection
        ))
        .routes(routes!(collection::restore_collection))
        .routes(routes!(collection::assign_products))
        .routes(routes!(collection::remove_product))
        .routes(routes!(cart::get_cart, cart::clear_cart))
        .routes(routes!(cart::add_item))
        .routes(routes!(cart::update_item, cart::remove_item))
        .routes(routes!(order::place_order, order::list_orders))
        .routes(routes!(order::my_orders))
        .routes(routes!(order::get_order, order::update_order))
        .routes(routes!(order::cancel_order))
        .routes(routes!(banner::list_banners, banner::create_banner))
        .routes(routes!(
            banner::get_banner,
            banner::update_banner,
            banner::delete_banner
        ))
        .routes(routes!(about::get_about, about::update_about))
        .routes(routes!(message::submit_message, message::list_messages))
        .routes(routes!(
            message::get_message,
            message::update_message,
            message::delete_message
        ))
        .routes(routes!(dashboard::summary))
        .routes(routes!(dashboard::top_products))
        .routes(routes!(dashboard::pending_orders))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
