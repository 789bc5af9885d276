//! Resolver navigation, history binding and event ordering.

mod common;

use assert_matches::assert_matches;
use common::*;
use media_navigator::catalog::MediaView;
use media_navigator::*;

#[test]
fn test_idle_before_first_navigation() {
    let resolver = media_resolver();
    assert_matches!(resolver.state(), ResolverState::Idle);
    assert!(resolver.current().is_none());
    assert!(resolver.view().is_none());
    assert!(resolver.history().is_empty());
}

#[test]
fn test_start_replaces_host_entry() {
    let mut resolver = media_resolver();
    let result = resolver.start("/");

    assert_eq!(result, NavigationResult::Active { path: "/".into() });
    assert_active(&resolver, "/", MediaView::Dashboard);
    assert_eq!(host_paths(&resolver), vec!["/"]);
    assert!(!resolver.can_go_back());
}

#[test]
fn test_navigate_pushes_history() {
    let mut resolver = media_resolver();
    resolver.start("/");
    let result = resolver.navigate_to("/video-frames", NavigateOptions::push());

    assert!(result.is_active());
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
    assert_eq!(resolver.history().entries(), ["/", "/video-frames"]);
    assert_eq!(host_paths(&resolver), vec!["/", "/video-frames"]);
}

#[test]
fn test_trailing_slash_resolves_to_canonical_path() {
    let mut resolver = media_resolver();
    resolver.navigate_to("/write-metadata/", NavigateOptions::push());

    assert_active(&resolver, "/write-metadata", MediaView::WriteMetadataImage);
    assert_eq!(resolver.history().current(), Some("/write-metadata"));
}

#[test]
fn test_replace_overwrites_current_entry() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/video-geotagger", NavigateOptions::push());
    resolver.navigate_to("/video-geotagger-v2", NavigateOptions::replace());

    assert_active(&resolver, "/video-geotagger-v2", MediaView::VideoGeotaggerV2);
    assert_eq!(resolver.history().entries(), ["/", "/video-geotagger-v2"]);
    assert_eq!(host_paths(&resolver), vec!["/", "/video-geotagger-v2"]);
}

#[test]
fn test_not_found_is_recorded_in_history() {
    let mut resolver = media_resolver();
    resolver.start("/");
    let result = resolver.navigate_to("/does-not-exist", NavigateOptions::push());

    assert_eq!(
        result,
        NavigationResult::NotFound {
            path: "/does-not-exist".into()
        }
    );
    assert_matches!(resolver.state(), ResolverState::NotFound("/does-not-exist"));
    assert_eq!(resolver.view(), Some(&MediaView::NotFound));
    assert_eq!(resolver.history().current(), Some("/does-not-exist"));
    assert_eq!(host_paths(&resolver), vec!["/", "/does-not-exist"]);
}

#[test]
fn test_back_and_forward() {
    let mut resolver = media_resolver();
    resolver.navigate_to("/video-frames", NavigateOptions::push());
    resolver.navigate_to("/video-geotagger-v2", NavigateOptions::push());

    let back = resolver.back().expect("host delivers the traversal");
    assert!(back.is_active());
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);

    let forward = resolver.forward().expect("host delivers the traversal");
    assert!(forward.is_active());
    assert_active(&resolver, "/video-geotagger-v2", MediaView::VideoGeotaggerV2);

    // Traversals never add host entries
    assert_eq!(host_paths(&resolver), vec!["/video-frames", "/video-geotagger-v2"]);
}

#[test]
fn test_back_through_not_found_entry() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/video-geotagger-v4", NavigateOptions::push());
    resolver.navigate_to("/video-geotagger-v3", NavigateOptions::push());

    resolver.back();
    assert!(resolver.current().unwrap().is_not_found());
    assert_eq!(resolver.view(), Some(&MediaView::NotFound));

    resolver.back();
    assert_active(&resolver, "/", MediaView::Dashboard);
}

#[test]
fn test_back_at_start_delivers_nothing() {
    let mut resolver = media_resolver();
    resolver.start("/");
    assert!(resolver.back().is_none());
    assert_active(&resolver, "/", MediaView::Dashboard);
}

#[test]
fn test_on_history_change_without_position() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/read-metadata", NavigateOptions::push());

    let result = resolver.on_history_change(HistoryEvent::to_path("/"));
    assert!(result.is_active());
    assert_active(&resolver, "/", MediaView::Dashboard);
    assert_eq!(resolver.history().position(), 0);
    assert!(resolver.can_go_forward());
}

#[test]
fn test_traversal_with_trailing_slash_moves_cursor() {
    let mut resolver = media_resolver();
    resolver.start("/video-frames");
    resolver.navigate_to("/read-metadata", NavigateOptions::push());

    let result = resolver.on_history_change(HistoryEvent::at("/video-frames/", 0));
    assert!(result.is_active());
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
    assert_eq!(resolver.history().entries(), ["/video-frames", "/read-metadata"]);
    assert_eq!(resolver.history().position(), 0);
    assert!(resolver.can_go_forward());
}

#[test]
fn test_unrecorded_traversal_replaces_current_entry() {
    let mut resolver = media_resolver();
    resolver.start("/");

    resolver.on_history_change(HistoryEvent::to_path("/video-frames"));
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
    assert_eq!(resolver.history().entries(), ["/video-frames"]);
    // The host already shows the entry
    assert_eq!(host_paths(&resolver), vec!["/"]);
}

#[test]
fn test_push_after_back_drops_forward_entries() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/video-frames", NavigateOptions::push());
    resolver.back();
    resolver.navigate_to("/read-metadata", NavigateOptions::push());

    assert_eq!(resolver.history().entries(), ["/", "/read-metadata"]);
    assert_eq!(host_paths(&resolver), vec!["/", "/read-metadata"]);
    assert!(resolver.forward().is_none());
}

#[test]
fn test_navigate_by_name() {
    let mut resolver = media_resolver();
    let result = resolver.navigate_by_name("VideoGeotaggerV3", NavigateOptions::push());

    assert_eq!(
        result,
        NavigationResult::Active {
            path: "/video-geotagger-v3".into()
        }
    );
    assert_active(&resolver, "/video-geotagger-v3", MediaView::VideoGeotaggerV3);
}

#[test]
fn test_navigate_by_unknown_name_keeps_state() {
    let mut resolver = media_resolver();
    resolver.start("/");
    let result = resolver.navigate_by_name("VideoGeotaggerV4", NavigateOptions::push());

    assert_eq!(
        result,
        NavigationResult::Error(NavigationError::UnknownRouteName {
            name: "VideoGeotaggerV4".into()
        })
    );
    assert_active(&resolver, "/", MediaView::Dashboard);
    assert_eq!(resolver.history().len(), 1);
}

#[test]
fn test_host_failure_still_applies_locally() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.host_mut().reject_writes("history quota exceeded");

    let result = resolver.navigate_to("/video-frames", NavigateOptions::push());
    assert_matches!(
        result,
        NavigationResult::Error(NavigationError::Host { ref path, .. }) if path == "/video-frames"
    );
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
    assert_eq!(host_paths(&resolver), vec!["/"]);
}

#[test]
fn test_queued_events_processed_in_order() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/video-frames", NavigateOptions::push());

    let navigator = resolver.navigator();
    navigator.history_changed(HistoryEvent::at("/", 0));
    navigator.history_changed(HistoryEvent::at("/video-frames", 1));

    let results = resolver.process_pending();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].path(), Some("/"));
    assert_eq!(results[1].path(), Some("/video-frames"));
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
}

#[test]
fn test_superseded_navigation_discarded() {
    let mut resolver = media_resolver();
    resolver.start("/");

    let navigator = resolver.navigator();
    navigator.navigate_to("/video-geotagger", NavigateOptions::push());
    navigator.navigate_to("/video-geotagger-v3", NavigateOptions::push());

    let results = resolver.process_pending();
    assert_eq!(
        results,
        vec![
            NavigationResult::Discarded {
                path: "/video-geotagger".into()
            },
            NavigationResult::Active {
                path: "/video-geotagger-v3".into()
            },
        ]
    );
    assert_eq!(resolver.history().entries(), ["/", "/video-geotagger-v3"]);
    assert_eq!(host_paths(&resolver), vec!["/", "/video-geotagger-v3"]);
}

#[test]
fn test_unknown_name_does_not_supersede() {
    let mut resolver = media_resolver();
    resolver.start("/");

    let navigator = resolver.navigator();
    navigator.navigate_to("/video-frames", NavigateOptions::push());
    navigator.navigate_by_name("Bogus", NavigateOptions::push());

    let results = resolver.process_pending();
    assert_eq!(
        results,
        vec![
            NavigationResult::Active {
                path: "/video-frames".into()
            },
            NavigationResult::Error(NavigationError::UnknownRouteName {
                name: "Bogus".into()
            }),
        ]
    );
    assert_active(&resolver, "/video-frames", MediaView::VideoFrames);
}

#[test]
fn test_direct_navigation_runs_after_queued_events() {
    let mut resolver = media_resolver();
    resolver.start("/");

    let navigator = resolver.navigator();
    navigator.navigate_to("/video-geotagger", NavigateOptions::push());
    navigator.history_changed(HistoryEvent::to_path("/"));

    let result = resolver.navigate_to("/video-geotagger-v2", NavigateOptions::push());
    assert_eq!(
        result,
        NavigationResult::Active {
            path: "/video-geotagger-v2".into()
        }
    );
    assert_eq!(navigator.pending(), 0);
    // The queued push was superseded by the direct one
    assert_eq!(resolver.history().entries(), ["/", "/video-geotagger-v2"]);
    assert_matches!(resolver.state(), ResolverState::Active(route) if route.name() == "VideoGeotaggerV2");
}

#[test]
fn test_direct_unknown_name_leaves_queued_navigation() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver
        .navigator()
        .navigate_to("/write-metadata", NavigateOptions::push());

    let result = resolver.navigate_by_name("Bogus", NavigateOptions::push());
    assert!(result.is_error());
    assert_active(&resolver, "/write-metadata", MediaView::WriteMetadataImage);
}

#[test]
fn test_traversal_not_discarded_by_later_navigation() {
    let mut resolver = media_resolver();
    resolver.start("/");
    resolver.navigate_to("/video-frames", NavigateOptions::push());

    let navigator = resolver.navigator();
    navigator.history_changed(HistoryEvent::at("/", 0));
    navigator.navigate_to("/read-metadata", NavigateOptions::push());

    let results = resolver.process_pending();
    assert!(results.iter().all(NavigationResult::is_active));
    assert_eq!(resolver.history().entries(), ["/", "/read-metadata"]);
}

#[test]
fn test_with_options_resolves_initial_path() {
    init_logging();
    let table = media_navigator::catalog::media_table().unwrap();
    let options = RouterOptions::new(MediaView::NotFound).initial_path("/video-frames/");
    let resolver = Resolver::with_options(table, MemoryHistory::new(), options);

    let current = resolver.current().unwrap();
    assert_eq!(current.path(), "/video-frames");
    assert_eq!(resolver.not_found_view(), &MediaView::NotFound);
}

#[test]
fn test_host_subscribed_to_resolver_queue() {
    let mut resolver = media_resolver();
    resolver.navigate_to("/", NavigateOptions::push());
    resolver.navigate_to("/video-frames", NavigateOptions::push());

    // A traversal the host delivers on its own schedule
    resolver.host_mut().go(-1);
    assert_eq!(resolver.navigator().pending(), 1);
    resolver.process_pending();
    assert_active(&resolver, "/", MediaView::Dashboard);
}
