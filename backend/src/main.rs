//! Backend entry-point: wires the HTTP API, demo data, and OpenAPI docs.

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::models::NewUser;
use backend::server::config::AppConfig;
use backend::storage::UserStore;
#[cfg(debug_assertions)]
use backend::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let store = if config.database_url.is_some() {
        UserStore::connected()
    } else {
        warn!("DATABASE_URL is not set; user routes will report 503");
        UserStore::disconnected()
    };
    if config.seed_demo_data {
        seed_demo_users(&store);
    }
    let store = web::Data::new(store);

    info!(addr = %config.bind_addr, env = ?config.env, "starting server");
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(store.clone())
            .configure(backend::server::configure);
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind(config.bind_addr)?;
    server.run().await
}

/// Insert a couple of example users so fresh checkouts have data to list.
fn seed_demo_users(store: &UserStore) {
    let demo = [
        NewUser {
            email: "ada@example.com".to_owned(),
            name: "Ada Lovelace".to_owned(),
            avatar_url: None,
        },
        NewUser {
            email: "grace@example.com".to_owned(),
            name: "Grace Hopper".to_owned(),
            avatar_url: None,
        },
    ];
    for user in demo {
        if let Err(e) = store.insert(user) {
            warn!(error = %e, "failed to seed demo user");
        }
    }
}
