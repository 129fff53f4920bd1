//! Transactional game engines over the store.
//!
//! One struct, one concern per file:
//!
//! - [`pairing`] — match two anonymous callers into one session
//! - [`lookup`] — resolve a player token back to its session
//! - [`resolution`] — accept moves and resolve rounds
//! - [`scoreboard`] — recent-outcome listing and reset
//!
//! The arcade owns a single `tokio_postgres::Client` behind a
//! `tokio::sync::Mutex`: interactive transactions need `&mut` access to
//! the connection, and the guard keeps concurrent transactions from
//! interleaving on it. Cross-process correctness comes from the
//! `FOR UPDATE` row locks inside the transactions, not from the mutex.

mod lookup;
mod pairing;
mod resolution;
mod scoreboard;

pub use lookup::SessionView;

use crate::store::PgErr;
use tokio::sync::Mutex;
use tokio_postgres::Client;

pub struct Arcade {
    client: Mutex<Client>,
}

impl Arcade {
    pub fn new(client: Client) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// Liveness probe for the HTTP health route.
    pub async fn ping(&self) -> Result<(), PgErr> {
        self.client
            .lock()
            .await
            .execute("SELECT 1", &[])
            .await
            .map(|_| ())
    }
}
