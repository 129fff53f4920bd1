use super::ChoiceSource;
use super::Local;
use crate::game::Choice;
use async_trait::async_trait;
use std::time::Duration;

/// How long we wait on the oracle before giving up on a draw.
const ORACLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Remote random-number oracle.
///
/// Expects a GET endpoint answering with a plaintext integer in 1..=5,
/// e.g. a random.org `integers` URL with `num=1&min=1&max=5&format=plain`.
/// Any failure — connect, non-2xx status, unparseable or out-of-range
/// payload — falls back to [`Local`].
pub struct Oracle {
    url: String,
    http: reqwest::Client,
}

impl Oracle {
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: reqwest::Client::builder()
                .timeout(ORACLE_TIMEOUT)
                .build()
                .expect("http client"),
        }
    }

    async fn draw(&self) -> anyhow::Result<Choice> {
        let text = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let id = text.trim().parse::<u8>()?;
        Choice::try_from(id)
    }
}

#[async_trait]
impl ChoiceSource for Oracle {
    async fn next(&self) -> Choice {
        match self.draw().await {
            Ok(choice) => choice,
            Err(e) => {
                log::debug!("oracle unavailable, falling back to local randomness: {}", e);
                Local.next().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn unreachable_oracle_falls_back_to_local() {
        let oracle = Oracle::new("http://127.0.0.1:1/integers".to_string());
        for _ in 0..3 {
            assert!(Choice::all().contains(&oracle.next().await));
        }
    }
}
