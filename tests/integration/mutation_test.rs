//! Integration tests for structural mutations.

mod helpers;

use dashhub_client::ContentRepository;
use dashhub_core::error::ErrorKind;
use dashhub_core::types::ItemId;
use dashhub_service::{Command, CommandOutcome, ContentView, DELETE_CONFIRMATION};

#[tokio::test]
async fn test_create_folder_opens_the_new_folder() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, location) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    let outcome = coordinator
        .dispatch(Command::CreateFolder {
            name: "Kubernetes".to_string(),
            parent_id: fx.infra.clone(),
        })
        .await
        .expect("create folder");

    let CommandOutcome::Created(id) = outcome else {
        panic!("expected created outcome, got {outcome:?}");
    };
    assert_eq!(coordinator.current_folder().await, id);
    match sink.last_view() {
        ContentView::Tree(contents) => {
            assert_eq!(contents.folder.name, "Kubernetes");
            assert!(contents.items.is_empty());
        }
        other => panic!("expected tree view, got {other:?}"),
    }
    assert_eq!(
        location.last_query(),
        vec![("id".to_string(), id.to_string())]
    );
}

#[tokio::test]
async fn test_create_dashboard_refreshes_the_listing() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::CreateDashboard {
            name: "SLO Overview".to_string(),
            description: Some("burn rates".to_string()),
            parent_id: ItemId::root(),
        })
        .await
        .expect("create dashboard");

    assert!(sink.last_names().contains(&"SLO Overview".to_string()));
}

#[tokio::test]
async fn test_blank_names_are_rejected_without_rendering() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;
    let rendered = sink.view_count();

    let err = coordinator
        .dispatch(Command::CreateDashboard {
            name: "   ".to_string(),
            description: None,
            parent_id: ItemId::root(),
        })
        .await
        .expect_err("blank name");
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = coordinator
        .dispatch(Command::CreateFolder {
            name: "".to_string(),
            parent_id: ItemId::root(),
        })
        .await
        .expect_err("empty name");
    assert_eq!(err.kind, ErrorKind::Validation);

    assert_eq!(sink.view_count(), rendered);
}

#[tokio::test]
async fn test_duplicate_sibling_name_is_a_conflict() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let err = coordinator
        .dispatch(Command::CreateFolder {
            name: "Archive".to_string(),
            parent_id: ItemId::root(),
        })
        .await
        .expect_err("duplicate sibling");
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_move_into_own_subtree_is_rejected() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let err = coordinator
        .dispatch(Command::MoveFolder {
            folder_id: fx.infra.clone(),
            new_parent_id: fx.infra.clone(),
        })
        .await
        .expect_err("move into itself");
    assert_eq!(err.kind, ErrorKind::InvalidOperation);

    let err = coordinator
        .dispatch(Command::MoveFolder {
            folder_id: fx.infra.clone(),
            new_parent_id: fx.network.clone(),
        })
        .await
        .expect_err("move into descendant");
    assert_eq!(err.kind, ErrorKind::InvalidOperation);
}

#[tokio::test]
async fn test_move_folder_reparents_subtree() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::MoveFolder {
            folder_id: fx.archive.clone(),
            new_parent_id: fx.infra.clone(),
        })
        .await
        .expect("move");

    // Still viewing root; Archive has left the root listing.
    assert!(!sink.last_names().contains(&"Archive".to_string()));
    coordinator
        .dispatch(Command::Navigate(fx.infra.clone()))
        .await
        .expect("navigate");
    assert!(sink.last_names().contains(&"Archive".to_string()));
}

#[tokio::test]
async fn test_move_targets_exclude_subtree_and_defaults() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let candidates = coordinator
        .move_target_candidates(&fx.infra, "")
        .await
        .expect("candidates");
    let names: Vec<_> = candidates.iter().map(|f| f.name.as_str()).collect();

    // Not the folder itself, not Network inside it, not the default folder.
    assert_eq!(names, ["Archive"]);

    let narrowed = coordinator
        .move_target_candidates(&fx.infra, "zzz")
        .await
        .expect("candidates");
    assert!(narrowed.is_empty());
}

#[tokio::test]
async fn test_delete_requires_the_exact_literal() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    for wrong in ["", "delete", "DELETE", "Delete "] {
        let err = coordinator
            .dispatch(Command::DeleteFolder {
                folder_id: fx.archive.clone(),
                confirmation: wrong.to_string(),
            })
            .await
            .expect_err("wrong confirmation");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    // Nothing was deleted along the way.
    fx.repo
        .get_folder_contents(&fx.archive, false)
        .await
        .expect("archive still present");
}

#[tokio::test]
async fn test_delete_preview_counts_whole_subtree() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let counts = coordinator
        .delete_preview(&fx.infra)
        .await
        .expect("preview");
    assert_eq!(counts.folders, 1);
    assert_eq!(counts.dashboards, 2);
    assert_eq!(counts.to_string(), "3 items: 1 folders, 2 dashboards");
}

#[tokio::test]
async fn test_delete_cascades_through_the_subtree() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::DeleteFolder {
            folder_id: fx.infra.clone(),
            confirmation: DELETE_CONFIRMATION.to_string(),
        })
        .await
        .expect("delete");

    assert!(!sink.last_names().contains(&"Infrastructure".to_string()));
    assert_eq!(
        fx.repo
            .get_folder_contents(&fx.network, false)
            .await
            .expect_err("descendant gone")
            .kind,
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_deleting_the_viewed_folder_navigates_up() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());

    coordinator
        .dispatch(Command::Navigate(fx.network.clone()))
        .await
        .expect("navigate");
    coordinator
        .dispatch(Command::DeleteFolder {
            folder_id: fx.network.clone(),
            confirmation: DELETE_CONFIRMATION.to_string(),
        })
        .await
        .expect("delete viewed folder");

    assert_eq!(coordinator.current_folder().await, fx.infra);
    match sink.last_view() {
        ContentView::Tree(contents) => {
            assert_eq!(contents.folder.name, "Infrastructure");
        }
        other => panic!("expected tree view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_default_folder_is_protected_from_moving() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let err = coordinator
        .dispatch(Command::MoveFolder {
            folder_id: fx.provisioned.clone(),
            new_parent_id: fx.archive.clone(),
        })
        .await
        .expect_err("default folder");
    assert_eq!(err.kind, ErrorKind::Forbidden);

    // Still a direct child of the root.
    let root = fx
        .repo
        .get_folder_contents(&ItemId::root(), true)
        .await
        .expect("root");
    assert!(root
        .items
        .iter()
        .any(|item| item.id() == &fx.provisioned));
}

#[tokio::test]
async fn test_default_content_is_protected_from_deletion() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let err = coordinator
        .dispatch(Command::DeleteFolder {
            folder_id: fx.provisioned.clone(),
            confirmation: DELETE_CONFIRMATION.to_string(),
        })
        .await
        .expect_err("default folder");
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_delete_dashboard_removes_it_from_the_listing() {
    let fx = helpers::fixture().await;
    let (coordinator, sink, _) = helpers::coordinator(fx.repo.clone());
    coordinator.load().await;

    coordinator
        .dispatch(Command::DeleteDashboard(fx.uptime.clone()))
        .await
        .expect("delete dashboard");

    assert!(!sink.last_names().contains(&"Uptime".to_string()));
}

#[tokio::test]
async fn test_toggle_favorite_reports_the_new_state() {
    let fx = helpers::fixture().await;
    let (coordinator, _, _) = helpers::coordinator(fx.repo.clone());

    let outcome = coordinator
        .dispatch(Command::ToggleFavorite(fx.uptime.clone()))
        .await
        .expect("star");
    assert_eq!(outcome, CommandOutcome::Favorite(true));

    let outcome = coordinator
        .dispatch(Command::ToggleFavorite(fx.uptime.clone()))
        .await
        .expect("unstar");
    assert_eq!(outcome, CommandOutcome::Favorite(false));
}
