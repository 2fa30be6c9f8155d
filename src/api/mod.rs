//! HTTP surface over [`crate::calc`].
//!
//! Each calculation has exactly one route. Handlers only parse input and
//! serialize the result; all validation lives in the calc layer.

pub mod dto;
pub mod error;
mod handlers;

use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use error::ApiError;

/// Register the calculation routes and their extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Body(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Query(err.to_string()).into()),
    )
    .route("/health", web::get().to(handlers::health_check))
    .service(
        web::scope("/bets")
            .route("/validate/odds", web::get().to(handlers::validate_odds))
            .route(
                "/calculate/potential-win",
                web::get().to(handlers::potential_win),
            )
            .route("/calculate/profit", web::get().to(handlers::profit))
            .route(
                "/calculate/implied-probability",
                web::get().to(handlers::implied_probability),
            )
            .route(
                "/calculate/accumulator-odds",
                web::post().to(handlers::accumulator_odds),
            )
            .route("/calculate/roi", web::get().to(handlers::roi)),
    );
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = config.server.bind_addr();
    info!(%addr, "starting betcalc API server");

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&addr)?
    .run()
    .await?;

    info!("betcalc API server stopped");
    Ok(())
}
