use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use anyhow::Context;

mod config;

use config::ServerConfig;

/// Static routes for the built bundle.
///
/// `/assets` is served as-is; everything else resolves against the bundle
/// directory and falls back to `index.html` so client-side routes such as
/// `/about` or `/#products` survive a reload.
fn static_routes(cfg: ServerConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |svc| {
        let index = cfg.index_file();

        svc.service(Files::new("/assets", &cfg.assets_dir))
            .service(
                Files::new("/", &cfg.dist_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let res = match NamedFile::open_async(&index).await {
                                Ok(file) => file.into_response(&req),
                                Err(e) => {
                                    log::error!("spa index {} unavailable: {e}", index.display());
                                    HttpResponse::NotFound().finish()
                                }
                            };
                            Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                        }
                    })),
            );
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ServerConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.assets_dir.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(static_routes(cfg.clone()))
    })
    .bind(bind.clone())
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("http server stopped")
}
