use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use staffroom::config::Config;
use staffroom::db::{self, PgStore, RecordStore};
use staffroom::handlers::{self, file::UploadSettings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::other(err)
    })?;

    // Initialize the database pool and schema
    let pool = db::create_pool(&config.database_url, config.max_connections)
        .await
        .map_err(|err| {
            error!("Failed to connect to the database: {}", err);
            io::Error::other(err)
        })?;
    let store = PgStore::new(pool);
    store.migrate().await.map_err(|err| {
        error!("Failed to migrate the database: {}", err);
        io::Error::other(err)
    })?;

    let store: web::Data<dyn RecordStore> = web::Data::from(Arc::new(store) as Arc<dyn RecordStore>);
    let uploads = web::Data::new(UploadSettings {
        photos_dir: config.photos_dir.clone(),
        strict: config.strict_uploads,
    });

    info!(
        "Starting server at {} (photos in {}, strict uploads: {})",
        config.bind_address,
        config.photos_dir.display(),
        config.strict_uploads
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(handlers::cors_headers())
            .app_data(store.clone())
            .app_data(uploads.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
