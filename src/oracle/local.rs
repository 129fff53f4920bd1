use super::ChoiceSource;
use crate::game::Choice;
use crate::util::Arbitrary;
use async_trait::async_trait;

/// Uniform selection over the five moves using process-local randomness.
pub struct Local;

#[async_trait]
impl ChoiceSource for Local {
    async fn next(&self) -> Choice {
        Choice::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn local_source_yields_valid_moves() {
        for _ in 0..50 {
            assert!(Choice::all().contains(&Local.next().await));
        }
    }
}
