//! Synchronization Protocol Tests
//!
//! End-to-end runs of coordinator, store, reset key and bindings against the
//! course fixture.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::{
        course_fixture, DomainError, DomainResult, FixtureLoader, Item, ItemBinding,
        ItemCoordinator, ItemFormState, ItemLoader, LoadState, SyncConfig, QTY,
    };

    fn quick_config() -> SyncConfig {
        SyncConfig {
            load_delay_ms: 0,
            ..SyncConfig::default()
        }
    }

    async fn setup_coordinator() -> ItemCoordinator {
        let coordinator = ItemCoordinator::with_fixture(quick_config());
        coordinator.start().await.expect("Failed to load fixture");
        coordinator
    }

    struct BrokenLoader;

    #[async_trait(?Send)]
    impl ItemLoader for BrokenLoader {
        async fn load(&self) -> DomainResult<Vec<Item>> {
            Err(DomainError::LoadFailed("service unavailable".to_string()))
        }
    }

    /// Serves a different list on every call
    struct PagedLoader {
        calls: AtomicUsize,
    }

    #[async_trait(?Send)]
    impl ItemLoader for PagedLoader {
        async fn load(&self) -> DomainResult<Vec<Item>> {
            let page = self.calls.fetch_add(1, Ordering::SeqCst) as u32;
            Ok(vec![
                Item::new(1000 + page * 10, format!("Page {} A", page)),
                Item::new(1001 + page * 10, format!("Page {} B", page)),
            ])
        }
    }

    #[tokio::test]
    async fn test_change_then_read_scenario() {
        let coordinator = setup_coordinator().await;

        coordinator.report_change(101, &ItemFormState::qty("5")).unwrap();

        assert_eq!(coordinator.initial_state(101), Some(ItemFormState::qty("5")));
        assert_eq!(coordinator.initial_state(201), Some(ItemFormState::qty("")));
    }

    #[tokio::test]
    async fn test_reset_reverts_mounted_view_scenario() {
        let coordinator = setup_coordinator().await;
        let mut view = ItemBinding::mount(&coordinator, 101).unwrap();
        view.edit(QTY, "5").unwrap();
        assert_eq!(view.value(QTY), "5");

        let key = coordinator.reset_all();

        assert_eq!(coordinator.initial_state(101), Some(ItemFormState::qty("")));
        assert!(view.observe(key));
        assert_eq!(view.value(QTY), "");
        assert_eq!(view.seen_key(), key);
    }

    #[tokio::test]
    async fn test_missing_item_is_absent_not_fatal() {
        let coordinator = setup_coordinator().await;

        assert_eq!(coordinator.initial_state(999), None);
        assert_eq!(
            coordinator.report_change(999, &ItemFormState::qty("1")),
            Err(DomainError::NotFound(999))
        );

        // still fully usable afterwards
        coordinator.report_change(301, &ItemFormState::qty("2")).unwrap();
        assert_eq!(coordinator.dump_state().len(), 3);
    }

    #[tokio::test]
    async fn test_last_write_wins_per_id() {
        let coordinator = setup_coordinator().await;

        coordinator.report_change(101, &ItemFormState::qty("1")).unwrap();
        coordinator.report_change(201, &ItemFormState::qty("20")).unwrap();
        coordinator.report_change(101, &ItemFormState::qty("12")).unwrap();
        coordinator.report_change(301, &ItemFormState::empty().with("note", "x")).unwrap();

        let dump = coordinator.dump_state();
        assert_eq!(dump[&101], ItemFormState::qty("12"));
        assert_eq!(dump[&201], ItemFormState::qty("20"));
        assert_eq!(dump[&301], ItemFormState::qty("").with("note", "x"));
    }

    #[tokio::test]
    async fn test_reset_all_is_idempotent() {
        let coordinator = setup_coordinator().await;
        coordinator.report_change(201, &ItemFormState::qty("8")).unwrap();

        coordinator.reset_all();
        let once = coordinator.dump_state();
        coordinator.reset_all();
        let twice = coordinator.dump_state();

        assert_eq!(once, twice);
        let ids: Vec<u32> = twice.keys().copied().collect();
        assert_eq!(ids, vec![101, 201, 301]);
        assert!(twice.values().all(|state| *state == ItemFormState::default()));
    }

    #[tokio::test]
    async fn test_every_mounted_view_reverts() {
        let coordinator = setup_coordinator().await;
        let mut views: Vec<ItemBinding> = course_fixture()
            .iter()
            .map(|item| ItemBinding::mount(&coordinator, item.id).unwrap())
            .collect();
        for (n, view) in views.iter_mut().enumerate() {
            view.edit(QTY, (n + 1).to_string()).unwrap();
        }

        coordinator.reset_all();

        for view in views.iter_mut() {
            assert!(view.refresh());
            assert_eq!(view.state(), &coordinator.initial_state(view.id()).unwrap());
            assert_eq!(view.value(QTY), "");
        }
    }

    #[tokio::test]
    async fn test_edit_after_unobserved_reset_drops_old_fields() {
        let coordinator = setup_coordinator().await;
        let mut view = ItemBinding::mount(&coordinator, 101).unwrap();
        view.edit("note", "rush").unwrap();
        view.edit(QTY, "5").unwrap();

        // the view types again before it has reacted to the new key
        let key = coordinator.reset_all();
        view.edit(QTY, "6").unwrap();

        let stored = coordinator.initial_state(101).unwrap();
        assert_eq!(stored.get("note"), None);
        assert_eq!(stored, ItemFormState::qty("6"));
        assert_eq!(view.seen_key(), key);
        assert_eq!(view.state(), &stored);
    }

    #[tokio::test]
    async fn test_view_mounted_after_reset_reads_store() {
        let coordinator = setup_coordinator().await;
        let mut early = ItemBinding::mount(&coordinator, 201).unwrap();
        early.edit(QTY, "6").unwrap();
        drop(early); // hidden before the reset

        coordinator.reset_all();
        coordinator.report_change(201, &ItemFormState::qty("2")).unwrap();

        let mut late = ItemBinding::mount(&coordinator, 201).unwrap();
        assert_eq!(late.value(QTY), "2");
        assert!(!late.refresh());
        assert_eq!(late.value(QTY), "2");
    }

    #[tokio::test]
    async fn test_dump_before_reset_sees_edits() {
        let coordinator = setup_coordinator().await;
        coordinator.report_change(101, &ItemFormState::qty("5")).unwrap();

        let before = coordinator.dump_state();
        coordinator.reset_all();
        let after = coordinator.dump_state();

        assert_eq!(before[&101], ItemFormState::qty("5"));
        assert_eq!(after[&101], ItemFormState::default());
        let json = serde_json::to_string(&before).unwrap();
        assert_eq!(json, r#"{"101":{"qty":"5"},"201":{"qty":""},"301":{"qty":""}}"#);
    }

    #[tokio::test]
    async fn test_load_failure_surfaces_state() {
        let coordinator = ItemCoordinator::new(Arc::new(BrokenLoader), quick_config());

        let err = coordinator.start().await.unwrap_err();

        assert_eq!(err, DomainError::LoadFailed("service unavailable".to_string()));
        assert_eq!(
            coordinator.load_state(),
            LoadState::Failed(DomainError::LoadFailed("service unavailable".to_string()))
        );
        assert!(coordinator.items().is_empty());

        // no retry: a second start reports the same failure
        assert_eq!(coordinator.start().await, Err(err));
    }

    #[tokio::test]
    async fn test_reload_rebuilds_for_new_items() {
        let loader = Arc::new(PagedLoader {
            calls: AtomicUsize::new(0),
        });
        let coordinator = ItemCoordinator::new(loader, quick_config());
        coordinator.start().await.unwrap();
        coordinator.report_change(1000, &ItemFormState::qty("3")).unwrap();

        coordinator.reload().await.unwrap();

        let ids: Vec<u32> = coordinator.dump_state().keys().copied().collect();
        assert_eq!(ids, vec![1010, 1011]);
        assert_eq!(coordinator.initial_state(1000), None);
        assert_eq!(coordinator.items()[0].title, "Page 1 A");
    }

    #[tokio::test]
    async fn test_superseded_load_is_discarded() {
        let slow = Arc::new(FixtureLoader::with_items(
            vec![Item::new(7, "Slow")],
            Duration::from_millis(40),
        ));
        let coordinator = ItemCoordinator::new(slow, quick_config());

        let first = coordinator.start();
        let second = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            coordinator.reload().await
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(coordinator.load_state().is_ready());
        assert_eq!(coordinator.items(), vec![Item::new(7, "Slow")]);
    }
}
