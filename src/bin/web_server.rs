use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use safeschool::api::{self, SchoolState, StudentApiDoc, TeacherApiDoc};
use safeschool::app::App;
use safeschool::config::Config;
use safeschool::utils::init_log;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Parser)]
#[command(author, version, about = "SafeSchool dashboard server", long_about = None)]
struct Args {
    /// Path to a TOML config file; replaces the flags below when set
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,
    #[arg(short, long, default_value = "8080")]
    port: u16,
    /// Directory holding the lesson posters and videos
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,
    /// Log directory; logs go to stdout when omitted
    #[arg(short, long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_log(args.log.clone());

    let config = match &args.config {
        Some(path) => Config::load(path).context("load config file")?,
        None => Config {
            host: args.host,
            port: args.port,
            asset_dir: args.assets,
        },
    };

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(SchoolState::new(App::default(), config));

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/student/openapi.json", StudentApiDoc::openapi())
                .url("/api-docs/teacher/openapi.json", TeacherApiDoc::openapi()),
        )
        .merge(api::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    tracing::info!("Starting SafeSchool at http://{addr}");
    tracing::info!("Swagger UI available at http://{addr}/swagger-ui/");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("bind server address")?;
    axum::serve(listener, router).await?;

    Ok(())
}
