//! HTTP surface of the game server.

pub mod handlers;
pub mod request;
pub mod response;

use crate::arcade::Arcade;
use crate::oracle;
use crate::store;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    #[rustfmt::skip]
    pub async fn run() -> Result<(), std::io::Error> {
        let arcade = web::Data::new(Arcade::new(store::db().await));
        let source = web::Data::new(oracle::source());
        log::info!("starting HTTP server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arcade.clone())
                .app_data(source.clone())
                .route("/health", web::get().to(handlers::health))
                .route("/choices", web::get().to(handlers::choices))
                .route("/choice", web::get().to(handlers::choice))
                .route("/play", web::post().to(handlers::play))
                .route("/scoreboard", web::get().to(handlers::scoreboard))
                .route("/scoreboard", web::delete().to(handlers::restart))
                .route("/game", web::post().to(handlers::pair))
                .route("/game/{player_uuid}", web::get().to(handlers::game))
                .route("/game/{player_uuid}", web::post().to(handlers::submit))
        })
        .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
        .run()
        .await
    }
}
