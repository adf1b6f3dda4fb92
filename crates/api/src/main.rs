use std::sync::Arc;

use tinypay_api::app::{self, AppService, RedirectTargets};
use tinypay_api::config::Config;
use tinypay_ledger::{Ledger, PgLedger};
use tinypay_wallet::WalletService;

// Fatal startup failures (bad config, unreachable storage with waiting
// disabled) exit with code 2 so orchestrators can tell them from crashes.
const EXIT_STARTUP_FAILURE: i32 = 2;

#[tokio::main]
async fn main() {
    tinypay_observability::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_STARTUP_FAILURE);
        }
    };

    // The connection-wait loop can spin forever; racing it against the
    // shutdown signal keeps ^C working while the database is still down.
    let dsn = config.database.dsn();
    let ledger = tokio::select! {
        res = PgLedger::connect(
            &dsn,
            config.database.conn_pool,
            config.database.conn_wait,
        ) => match res {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::error!(error = %e, "database connection failed");
                std::process::exit(EXIT_STARTUP_FAILURE);
            }
        },
        _ = shutdown_signal() => return,
    };

    if let Err(e) = ledger.migrate().await {
        tracing::error!(error = %e, "schema migration failed");
        std::process::exit(EXIT_STARTUP_FAILURE);
    }

    let ledger: Arc<dyn Ledger> = Arc::new(ledger);
    let service: Arc<AppService> = Arc::new(WalletService::new(ledger));
    let router = app::build_router(
        service,
        RedirectTargets {
            main: config.redirect_main.clone(),
        },
    );

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %address, "failed to bind");
            std::process::exit(EXIT_STARTUP_FAILURE);
        }
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {addr}"),
        Err(e) => tracing::warn!(error = %e, "listener has no local address"),
    }

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
