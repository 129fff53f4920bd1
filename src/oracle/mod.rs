//! Move supply for the computer side of a round.
//!
//! [`ChoiceSource`] is infallible from the caller's perspective: gameplay
//! must never stall because a randomness provider is unavailable, so the
//! remote oracle swallows its own failures and falls back to local
//! randomness.

mod local;
mod remote;

pub use local::Local;
pub use remote::Oracle;

use crate::game::Choice;
use async_trait::async_trait;

/// Supplies a move for the computer/opponent side.
#[async_trait]
pub trait ChoiceSource: Send + Sync {
    async fn next(&self) -> Choice;
}

/// Pick the move source from the environment: a remote oracle when
/// `ORACLE_URL` is set, local randomness otherwise.
pub fn source() -> Box<dyn ChoiceSource> {
    match std::env::var("ORACLE_URL") {
        Ok(url) => {
            log::info!("drawing moves from remote oracle at {}", url);
            Box::new(Oracle::new(url))
        }
        Err(_) => {
            log::info!("drawing moves from local randomness");
            Box::new(Local)
        }
    }
}
