// commerce/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
// Registration and login are the only open routes; everything else under
// /api requires a bearer token (enforced by the AuthenticatedUser extractor
// on the handlers).
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api")
        // Authentication Routes
        .route("/login", web::post().to(crate::web::handlers::user_handlers::login_handler))
        // User Routes
        .service(
          web::scope("/user")
            .route(
              "/create",
              web::post().to(crate::web::handlers::user_handlers::create_user_handler),
            )
            .route(
              "/id/{id}",
              web::get().to(crate::web::handlers::user_handlers::get_user_by_id_handler),
            )
            .route(
              "/{username}",
              web::get().to(crate::web::handlers::user_handlers::get_user_by_username_handler),
            ),
        )
        // Item Routes
        .service(
          web::scope("/item")
            .route("", web::get().to(crate::web::handlers::item_handlers::list_items_handler))
            .route(
              "/name/{name}",
              web::get().to(crate::web::handlers::item_handlers::get_items_by_name_handler),
            )
            .route(
              "/{id}",
              web::get().to(crate::web::handlers::item_handlers::get_item_handler),
            ),
        )
        // Cart Routes
        .service(
          web::scope("/cart")
            .route(
              "/add",
              web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
            )
            .route(
              "/remove",
              web::post().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
            ),
        )
        // Order Routes
        .service(
          web::scope("/order")
            .route(
              "/submit/{username}",
              web::post().to(crate::web::handlers::order_handlers::submit_order_handler),
            )
            .route(
              "/history/{username}",
              web::get().to(crate::web::handlers::order_handlers::order_history_handler),
            ),
        ),
    );
}
