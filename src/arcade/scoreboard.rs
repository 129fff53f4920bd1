use super::Arcade;
use crate::game::Outcome;
use crate::store::PgErr;

impl Arcade {
    /// The `limit` most recent outcomes by creation order, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Outcome>, PgErr> {
        const RECENT: &'static str = r#"
            SELECT id, session_id, move_1, move_2, verdict
            FROM outcomes
            ORDER BY created_at DESC
            LIMIT $1
        "#;
        let client = self.client.lock().await;
        Ok(client
            .query(RECENT, &[&limit])
            .await?
            .into_iter()
            .map(Outcome::from)
            .collect())
    }

    /// Reset the scoreboard by deleting ALL outcomes.
    ///
    /// This also deletes session-linked outcomes, truncating live
    /// sessions' histories.
    // TODO: age out outcomes that fell off the scoreboard with a periodic job
    pub async fn clear(&self) -> Result<u64, PgErr> {
        const CLEAR: &'static str = "DELETE FROM outcomes";
        let client = self.client.lock().await;
        let deleted = client.execute(CLEAR, &[]).await?;
        log::info!("cleared {} outcomes", deleted);
        Ok(deleted)
    }
}
