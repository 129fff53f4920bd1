//! Game Server Binary
//!
//! Runs the HTTP server for solo and multiplayer play.
//! Requires `DB_URL` and `BIND_ADDR`; `ORACLE_URL` is optional.

use rpssl::*;

#[tokio::main]
async fn main() {
    util::log();
    util::kys();
    api::Server::run().await.unwrap();
}
