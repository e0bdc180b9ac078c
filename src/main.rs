use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod handlers;
mod models;
mod services;
mod validation;
mod web;

use config::Config;
use handlers::{activity, todo};
use services::{ActivityService, TodoService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting tasklist API on {}:{}",
        config.server.host,
        config.server.port
    );

    let db_pool = db::create_pool(&config.database).await?;
    db::migrate(&db_pool).await?;

    let activity_service = ActivityService::new(db_pool.clone());
    let todo_service = TodoService::new(db_pool);

    let app = create_app(activity_service, todo_service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn create_app(activity_service: ActivityService, todo_service: TodoService) -> Router {
    Router::new()
        .route(
            "/activity-groups",
            get(activity::list).post(activity::create),
        )
        .route(
            "/activity-groups/:id",
            get(activity::get)
                .patch(activity::update)
                .delete(activity::remove),
        )
        .route("/todo-items", get(todo::list).post(todo::create))
        .route(
            "/todo-items/:id",
            get(todo::get).patch(todo::update).delete(todo::remove),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(web::AppState {
            activity_service,
            todo_service,
        })
}
