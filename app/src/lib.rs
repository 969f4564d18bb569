mod config;
mod database;
mod modules;
mod server;

use config::app_config;
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[allow(clippy::never_loop)]
pub async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cfg = app_config();

    // the connection is shared behind a Arc because `DatabaseConnection`
    // is not Clone when sea-orm is compiled with its mock feature, which
    // the test builds of this workspace enable
    let db = Arc::new(database::db::connect(&cfg.db_url).await);

    database::db::run_migrations(&db).await;

    let mut signals = Signals::new([SIGINT, SIGTERM]).expect("failed to setup signals hook");

    let db_conn_shutdown_ref = db.clone();

    tokio::spawn(async move {
        for sig in signals.forever() {
            if !cfg.is_development {
                println!("[APP] received signal: {}, shutting down", sig);

                println!("[APP] closing postgres connections");
                db_conn_shutdown_ref
                    .get_postgres_connection_pool()
                    .close()
                    .await;
            }

            std::process::exit(sig)
        }
    });

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), cfg.http_port);
    println!("[WEB] soon listening on {}", addr);

    let server = server::controller::new(db).into_make_service();

    axum::Server::bind(&addr).serve(server).await.unwrap();
}
