use astra::Server;
use salento_case::router::handle;
use salento_case::{logging, templates, App, Catalog, SiteConfig, StartupError};

fn main() {
    logging::init_logger(std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json"));

    if let Err(e) = run() {
        tracing::error!("❌ {e}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}

fn run() -> Result<(), StartupError> {
    // 1️⃣ Configuration
    let cfg = SiteConfig::from_env()?;

    // 2️⃣ Listing cards, read once from the host document
    let catalog = Catalog::load(&cfg.listings_path)?;
    if catalog.is_empty() {
        tracing::warn!("⚠️ no .property-card elements found, filters are disabled");
    }

    let app = App::new(catalog, &cfg);

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", cfg.bind_addr);
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing the shared app state into the closure
    server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    })?;

    Ok(())
}
