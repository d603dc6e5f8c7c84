use std::sync::Arc;
use actix_web::web::ServiceConfig;
use actix_web::Route;
use crate::http::enums::shutdown_signal::ShutdownSignal;

/// Builds the route serving a probe endpoint, called once per worker.
pub type RouteFactory = Arc<dyn Fn() -> Route + Send + Sync>;
/// Registers additional routes on every worker's application.
pub type RoutesInit = Arc<dyn Fn(&mut ServiceConfig) + Send + Sync>;
pub type SignalHandler = Box<dyn FnOnce(ShutdownSignal) + Send>;
