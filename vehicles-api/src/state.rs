// vehicles-api/src/state.rs

use crate::config::AppConfig;
use crate::services::CarService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub car_service: CarService,
  pub config: Arc<AppConfig>, // Share loaded config
}
