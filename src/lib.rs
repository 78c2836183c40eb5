pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::estimate_service::EstimateService;
use infrastructure::rule_store::DieselRuleStore;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(handlers::estimate::get_shipping_estimate),
    components(schemas(
        handlers::estimate::ShippingEstimateResponse,
        handlers::estimate::SellerEstimateResponse,
    )),
    tags((name = "shipping", description = "Shipping estimates for the buyer's cart"))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// One estimate engine is built here and shared by all workers; it holds
/// only the rule store handle, so concurrent requests never interact.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(EstimateService::new(DieselRuleStore::new(pool.clone())));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(service.clone())
            .wrap(Logger::default())
            .service(web::scope("/shipping").route(
                "/estimate/{buyer_id}",
                web::get().to(handlers::estimate::get_shipping_estimate),
            ))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
