use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, TripBudgetConfig};
use crate::{Result, TripBudgetError, api};

/// Assemble the application router with its middleware
pub fn app(config: &TripBudgetConfig) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;

    Ok(Router::new()
        .route("/", get(api::health))
        .nest("/api", api::router())
        .fallback(api::not_found)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = if config.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    TripBudgetError::config(format!("Invalid CORS origin '{origin}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]))
}

/// Bind and serve until Ctrl-C or SIGTERM
pub async fn run(config: TripBudgetConfig) -> Result<()> {
    let app = app(&config)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|_| {
            TripBudgetError::config(format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            ))
        })?;

    if config.tls.enabled() {
        return serve_tls(app, addr, &config).await;
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", config.server.port);
    tracing::info!("Health check: http://localhost:{}/", config.server.port);
    tracing::info!(
        "Budget API: http://localhost:{}/api/estimate-budget",
        config.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "tls")]
async fn serve_tls(app: Router, addr: SocketAddr, config: &TripBudgetConfig) -> Result<()> {
    use axum_server::tls_rustls::RustlsConfig;
    use std::time::Duration;

    let (Some(cert), Some(key)) = (&config.tls.cert_path, &config.tls.key_path) else {
        return Err(TripBudgetError::config("TLS needs both cert_path and key_path"));
    };

    // A second install attempt only fails when a provider is already set.
    let _ = rustls::crypto::ring::default_provider().install_default();
    let tls = RustlsConfig::from_pem_file(cert, key).await?;

    let handle = axum_server::Handle::new();
    tokio::spawn({
        let handle = handle.clone();
        async move {
            shutdown_signal().await;
            handle.graceful_shutdown(Some(Duration::from_secs(10)));
        }
    });

    tracing::info!("Server running on https://{}", addr);
    axum_server::bind_rustls(addr, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(not(feature = "tls"))]
async fn serve_tls(_app: Router, _addr: SocketAddr, _config: &TripBudgetConfig) -> Result<()> {
    Err(TripBudgetError::config(
        "TLS is configured but this build was compiled without the `tls` feature",
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_builds_with_defaults() {
        assert!(app(&TripBudgetConfig::default()).is_ok());
    }

    #[test]
    fn test_wildcard_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_unparseable_origin_is_config_error() {
        let config = CorsConfig {
            allowed_origins: vec!["https://bad\norigin".to_string()],
        };
        let err = cors_layer(&config).unwrap_err();
        assert!(matches!(err, TripBudgetError::Config { .. }));
    }
}
