//! Item Loader
//!
//! Source of the item list. The fixture loader stands in for an API call;
//! any other source only has to implement [`ItemLoader`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SyncConfig;
use crate::domain::{course_fixture, DomainResult, Item};

/// Asynchronous item source
///
/// Futures are not required to be `Send` so loaders can await browser timers.
#[async_trait(?Send)]
pub trait ItemLoader: Send + Sync {
    /// Fetch the current item list
    async fn load(&self) -> DomainResult<Vec<Item>>;
}

/// Serves a fixed item list after a fixed delay
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    items: Vec<Item>,
    delay: Duration,
}

impl FixtureLoader {
    /// The three-course fixture with the configured latency
    pub fn new(config: &SyncConfig) -> Self {
        Self::with_items(course_fixture(), config.load_delay())
    }

    pub fn with_items(items: Vec<Item>, delay: Duration) -> Self {
        Self { items, delay }
    }
}

#[async_trait(?Send)]
impl ItemLoader for FixtureLoader {
    async fn load(&self) -> DomainResult<Vec<Item>> {
        sleep(self.delay).await;
        log::debug!("fixture loader served {} items", self.items.len());
        Ok(self.items.clone())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_fixture_loader_waits_then_serves_courses() {
        let loader = FixtureLoader::with_items(course_fixture(), Duration::from_millis(20));

        let started = Instant::now();
        let items = loader.load().await.expect("fixture load");

        assert!(started.elapsed() >= Duration::from_millis(20));
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Calc I", "Calc II", "Calc III"]);
    }

    #[tokio::test]
    async fn test_default_config_uses_course_fixture() {
        let config = SyncConfig {
            load_delay_ms: 0,
            ..SyncConfig::default()
        };
        let items = FixtureLoader::new(&config).load().await.unwrap();
        assert_eq!(items, course_fixture());
    }
}
