use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use taskapi::{db, routes, AppState, Config};

fn to_io_error(err: taskapi::AppError) -> io::Error {
    error!("{}", err);
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(to_io_error)?;

    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .map_err(to_io_error)?;
    db::run_migrations(&pool).await.map_err(to_io_error)?;

    let state = web::Data::new(AppState::new(pool, &config));

    info!("Starting taskapi server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
