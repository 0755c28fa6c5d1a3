use crate::config::AppConfig;
use crate::residents::HttpResidentsApi;
use crate::review::{FlashSink, ReviewController};
use crate::router::{handle, AppState};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod residents;
mod responses;
mod review;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Environment + logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resident_review=info")),
        )
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Backend client
    let api = match HttpResidentsApi::new(
        cfg.api_base_url.clone(),
        cfg.api_token.clone(),
        cfg.request_timeout,
    ) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "failed to build residents client");
            std::process::exit(1);
        }
    };

    let flash = FlashSink::new();
    let app = Arc::new(AppState::new(ReviewController::new(api, flash.clone()), flash));

    // 3️⃣ Start the server
    tracing::info!(addr = %cfg.bind_addr, backend = %cfg.api_base_url, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &*app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
