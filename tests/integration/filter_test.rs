//! Integration tests for filtering, sorting, and the flat view.

mod helpers;

use std::time::Duration;

use dashhub_core::types::SortKey;
use dashhub_service::{Command, ContentView};

#[tokio::test]
async fn test_query_switches_to_flat_subtree_listing() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetQuery("latency".to_string()))
        .await
        .expect("set query");

    // Latency is two levels down; the flat view spans the whole subtree.
    assert!(coordinator.in_flat_view().await);
    assert!(matches!(sink.last_view(), ContentView::Flat(_)));
    assert_eq!(sink.last_names(), ["Latency"]);
}

#[tokio::test]
async fn test_folder_match_does_not_surface_its_contents() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetQuery("network".to_string()))
        .await
        .expect("set query");

    // The folder matches by name; its dashboard does not.
    assert_eq!(sink.last_names(), ["Network"]);
}

#[tokio::test]
async fn test_clear_filters_restores_tree() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, location) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetQuery("cpu".to_string()))
        .await
        .expect("set query");
    coordinator
        .dispatch(Command::ClearFilters)
        .await
        .expect("clear");

    assert!(!coordinator.in_flat_view().await);
    assert!(matches!(sink.last_view(), ContentView::Tree(_)));
    assert!(location.last_query().is_empty());
}

#[tokio::test]
async fn test_alphabetical_sort_directions_are_reversals() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetSort(Some(SortKey::AlphaAsc)))
        .await
        .expect("sort asc");
    let ascending = sink.last_names();
    assert_eq!(
        ascending,
        [
            "Archive",
            "CPU Usage",
            "Infrastructure",
            "Latency",
            "Network",
            "Provisioned",
            "Service Health",
            "Uptime",
        ]
    );

    coordinator
        .dispatch(Command::SetSort(Some(SortKey::AlphaDesc)))
        .await
        .expect("sort desc");
    let descending = sink.last_names();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);

    // Dropping the sort deactivates the filters and restores the tree.
    coordinator
        .dispatch(Command::SetSort(None))
        .await
        .expect("clear sort");
    assert!(matches!(sink.last_view(), ContentView::Tree(_)));
}

#[tokio::test]
async fn test_created_sort_follows_creation_order() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetSort(Some(SortKey::CreatedAsc)))
        .await
        .expect("sort oldest first");
    let oldest_first = sink.last_names();
    assert_eq!(oldest_first.first().map(String::as_str), Some("Infrastructure"));
    assert_eq!(oldest_first.last().map(String::as_str), Some("Service Health"));

    coordinator
        .dispatch(Command::SetSort(Some(SortKey::CreatedDesc)))
        .await
        .expect("sort newest first");
    let newest_first = sink.last_names();
    let mut reversed = oldest_first.clone();
    reversed.reverse();
    assert_eq!(newest_first, reversed);
}

#[tokio::test]
async fn test_starred_only_lists_starred_dashboards() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::SetStarred(true))
        .await
        .expect("starred filter");
    assert_eq!(sink.last_names(), ["CPU Usage"]);
}

#[tokio::test]
async fn test_starred_filter_with_no_matches_is_empty_flat_view() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());

    coordinator
        .dispatch(Command::Navigate(fx.archive.clone()))
        .await
        .expect("navigate");
    coordinator
        .dispatch(Command::SetStarred(true))
        .await
        .expect("starred filter");

    // An empty result is an empty listing, never an error state.
    assert_eq!(sink.last_view(), ContentView::Flat(Vec::new()));
    assert_eq!(sink.error_count(), 0);
}

#[tokio::test]
async fn test_location_carries_folder_and_filters() {
    let fx = helpers::fixture().await;
    let (coordinator, _, location) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::Navigate(fx.infra.clone()))
        .await
        .expect("navigate");
    coordinator
        .dispatch(Command::SetQuery("cpu".to_string()))
        .await
        .expect("query");
    coordinator
        .dispatch(Command::SetSort(Some(SortKey::AlphaAsc)))
        .await
        .expect("sort");
    coordinator
        .dispatch(Command::SetStarred(true))
        .await
        .expect("starred");

    assert_eq!(
        location.last_query(),
        vec![
            ("id".to_string(), fx.infra.to_string()),
            ("query".to_string(), "cpu".to_string()),
            ("sort".to_string(), "alpha-asc".to_string()),
            ("starred".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_coalesces_keystroke_bursts() {
    let fx = helpers::fixture().await;
    let instrumented = helpers::InstrumentedRepository::new(fx.repo.clone());
    let (coordinator, sink, _) =
        helpers::coordinator_with_debounce(instrumented.clone(), Duration::from_millis(300));
    coordinator.load().await;
    let fetches_after_load = instrumented.fetch_count();

    for keystroke in ["u", "up", "upt"] {
        coordinator
            .dispatch(Command::SetQuery(keystroke.to_string()))
            .await
            .expect("keystroke");
    }
    tokio::time::sleep(Duration::from_millis(400)).await;

    // One fetch for the settled input, none for the superseded keystrokes.
    assert_eq!(instrumented.fetch_count(), fetches_after_load + 1);
    assert_eq!(coordinator.current_filters().await.query, "upt");
    assert_eq!(sink.last_names(), ["Uptime"]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_fetch_result_is_dropped() {
    let fx = helpers::fixture().await;
    let instrumented = helpers::InstrumentedRepository::new(fx.repo.clone());
    let (coordinator, sink, _) = helpers::coordinator(instrumented.clone());
    coordinator.load().await;
    let rendered_after_load = sink.view_count();

    // First search is slow; the follow-up completes immediately.
    instrumented.push_delay(Duration::from_millis(200));
    let slow = tokio::spawn({
        let coordinator = coordinator.clone();
        async move {
            coordinator
                .dispatch(Command::SetQuery("up".to_string()))
                .await
        }
    });
    // Let the slow fetch get in flight before the second keystroke.
    tokio::task::yield_now().await;

    coordinator
        .dispatch(Command::SetQuery("latency".to_string()))
        .await
        .expect("fast keystroke");
    assert_eq!(sink.last_names(), ["Latency"]);

    slow.await.expect("join").expect("slow keystroke");

    // The slow result resolved after being superseded and was discarded.
    assert_eq!(sink.view_count(), rendered_after_load + 1);
    assert_eq!(sink.last_names(), ["Latency"]);
}
