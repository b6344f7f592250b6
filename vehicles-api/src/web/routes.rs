// vehicles-api/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Vehicle CRUD Routes
    .service(
      web::scope("/cars")
        .route("", web::get().to(crate::web::handlers::car_handlers::list_cars_handler))
        .route("", web::post().to(crate::web::handlers::car_handlers::create_car_handler))
        .route("/{id}", web::get().to(crate::web::handlers::car_handlers::get_car_handler))
        .route("/{id}", web::put().to(crate::web::handlers::car_handlers::update_car_handler))
        .route(
          "/{id}",
          web::delete().to(crate::web::handlers::car_handlers::delete_car_handler),
        ),
    );
}
