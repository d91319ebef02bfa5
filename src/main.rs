use std::sync::Arc;

use campsite::db::MongoStore;
use campsite::middleware::{MethodOverrideMiddleware, RequestLogMiddleware, SessionMiddleware};
use campsite::server::HttpServer;
use campsite::settings::Settings;
use campsite::state::AppState;
use campsite::urls;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let settings = Settings::from_env();

	// Connection failures are logged, not retried.
	let store = match MongoStore::connect(&settings.database_url, &settings.database_name).await {
		Ok(store) => store,
		Err(err) => {
			tracing::error!(error = %err, "database connection failed");
			std::process::exit(1);
		}
	};
	if let Err(err) = store.ping().await {
		tracing::error!(error = %err, "database unreachable");
		std::process::exit(1);
	}
	tracing::info!(database = %settings.database_name, "database connected");

	let state = AppState::new(Arc::new(store));
	let router = urls::routes(state);

	let server = HttpServer::new(Arc::new(router))
		.with_middleware(Arc::new(RequestLogMiddleware::new()))
		.with_middleware(Arc::new(SessionMiddleware::new()))
		.with_middleware(Arc::new(MethodOverrideMiddleware::new()));

	if let Err(err) = server.run(settings.bind_addr).await {
		tracing::error!(error = %err, "server error");
		std::process::exit(1);
	}
}
