use crate::card::{render_cards, Card};
use crate::error::LoadError;
use crate::models::EntityRecord;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// The records currently on screen plus where the last load ended up.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    records: Vec<EntityRecord>,
    status: LoadStatus,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn cards(&self) -> Vec<Card> {
        render_cards(&self.records)
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Apply a finished load. Success replaces the whole list; failure is
    /// logged and leaves the current records alone.
    pub fn apply(&mut self, outcome: Result<Vec<EntityRecord>, LoadError>) {
        match outcome {
            Ok(records) => {
                debug!(count = records.len(), "replacing deck");
                self.records = records;
                self.status = LoadStatus::Loaded;
            }
            Err(LoadError::Cancelled) => {
                debug!("load cancelled, deck untouched");
                self.status = if self.records.is_empty() {
                    LoadStatus::Idle
                } else {
                    LoadStatus::Loaded
                };
            }
            Err(e) => {
                error!(error = %e, "failed to load creatures");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{record, FakeSource};
    use crate::loader::{load_entities, LIST_LIMIT};
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_successful_load_renders_one_card_per_name() {
        let records: Vec<_> = (1..=LIST_LIMIT)
            .map(|id| record(id, &format!("creature-{}", id), &["normal"]))
            .collect();
        let source = FakeSource::with(records);

        let mut deck = Deck::new();
        deck.begin_load();
        deck.apply(load_entities(&source, &CancellationToken::new()).await);

        assert_eq!(deck.status(), &LoadStatus::Loaded);
        assert_eq!(deck.cards().len(), source.names.len());
        assert_eq!(deck.cards().len(), 10);
    }

    #[tokio::test]
    async fn test_failed_first_load_leaves_deck_empty() {
        let mut source = FakeSource::with(vec![record(1, "bulbasaur", &["grass"])]);
        source.names.push("missingno".to_string());

        let mut deck = Deck::new();
        deck.begin_load();
        deck.apply(load_entities(&source, &CancellationToken::new()).await);

        assert!(deck.records().is_empty());
        assert!(deck.cards().is_empty());
        assert!(matches!(deck.status(), LoadStatus::Failed(_)));
    }

    #[test]
    fn test_failed_reload_keeps_stale_records() {
        let mut deck = Deck::new();
        deck.apply(Ok(vec![record(1, "bulbasaur", &["grass"])]));

        deck.begin_load();
        deck.apply(Err(LoadError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://pokeapi.co/api/v2/pokemon/ivysaur".to_string(),
        }));

        assert_eq!(deck.records(), &[record(1, "bulbasaur", &["grass"])]);
        assert!(!deck.is_loading());
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut deck = Deck::new();
        deck.apply(Ok(vec![
            record(1, "bulbasaur", &["grass"]),
            record(2, "ivysaur", &["grass"]),
        ]));
        deck.apply(Ok(vec![record(4, "charmander", &["fire"])]));

        assert_eq!(deck.records(), &[record(4, "charmander", &["fire"])]);
    }

    #[test]
    fn test_cancelled_load_is_not_a_failure() {
        let mut deck = Deck::new();
        deck.begin_load();
        deck.apply(Err(LoadError::Cancelled));

        assert_eq!(deck.status(), &LoadStatus::Idle);
        assert!(deck.records().is_empty());
    }
}
