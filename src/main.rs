//! Deck Parser binary - configuration, wiring, and the axum server loop.

use std::path::PathBuf;
use std::sync::Arc;

use http::HeaderValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deck_parser::adapters::http::{app, DeckHandlers};
use deck_parser::adapters::{
    FsProfileStore, GeminiConfig, GeminiModel, GeminiStartupAnalyzer, PdfTextExtractor,
};
use deck_parser::application::ParsePitchDeck;
use deck_parser::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().unwrap_or_else(|err| {
        eprintln!("Configuration error: {err}");
        std::process::exit(1)
    });

    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cors_origin: HeaderValue = config
        .server
        .cors_origin
        .parse()
        .unwrap_or_else(|_| {
            // validate() has already checked this; unreachable in practice
            eprintln!("Invalid CORS origin: {}", config.server.cors_origin);
            std::process::exit(1)
        });

    let gemini = GeminiModel::new(
        GeminiConfig::new(config.ai.gemini_api_key.clone().unwrap_or_default())
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout()),
    );
    let analyzer = Arc::new(GeminiStartupAnalyzer::new(Arc::new(gemini)));
    let extractor = Arc::new(PdfTextExtractor::new());
    let use_case = Arc::new(ParsePitchDeck::new(extractor, analyzer));
    let store = Arc::new(FsProfileStore::new(&config.storage.output_dir));

    let handlers = DeckHandlers::new(
        use_case,
        store,
        PathBuf::from(&config.storage.temp_dir),
    );
    let router = app(handlers, cors_origin);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, model = %config.ai.model, "deck parser listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap_or_else(|err| {
        eprintln!("Failed to bind {addr}: {err}");
        std::process::exit(1)
    });

    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }
}
