mod common;

use std::io::Write;

use common::{count, listing_ids, loaded_state, seed, RecordingApi};
use regexhub::api::ApiHandle;
use regexhub::app::{
    handle_event, Action, AppState, Event, ListKind, Origin, ProfileEvent, ProfileListKind, ProfileState,
    RefreshPolicy,
};
use regexhub::domain::{ContentRecord, RegexHubError};
use regexhub::ui::{format_record, ViewKind};
use regexhub::Config;

fn notice_of(error: &RegexHubError) -> Action {
    Action::ShowNotice(error.notice())
}

#[test]
fn refresh_after_search_matches_direct_search() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    handle_event(&mut state, &Event::SetInput("colou".into())).unwrap();
    handle_event(&mut state, &Event::Search).unwrap();
    let searched = state.lists.listing.rows().to_vec();
    assert!(searched.iter().any(|r| r.record_id == 3));

    handle_event(&mut state, &Event::Refresh).unwrap();
    assert_eq!(state.lists.listing.rows(), searched.as_slice());
    assert_eq!(state.session.active_query(), "colou");
    assert_eq!(count(&api.calls.search_posts), 2);
}

#[test]
fn clear_search_restores_unfiltered_listing() {
    let (_api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let unfiltered = state.lists.listing.rows().to_vec();

    handle_event(&mut state, &Event::SetInput("com".into())).unwrap();
    handle_event(&mut state, &Event::Search).unwrap();
    assert!(state.return_enabled);

    handle_event(&mut state, &Event::ReturnToBrowse).unwrap();
    assert!(state.session.is_browsing());
    assert!(!state.return_enabled);
    assert_eq!(state.lists.listing.rows(), unfiltered.as_slice());
}

#[test]
fn empty_input_is_a_silent_no_op() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let before_calls = api.calls.total();
    let before_rows = state.lists.listing.rows().to_vec();

    for event in [Event::Search, Event::Create] {
        let (redraw, actions) = handle_event(&mut state, &event).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
    }

    assert_eq!(api.calls.total(), before_calls);
    assert_eq!(state.lists.listing.rows(), before_rows.as_slice());
    assert!(state.session.is_browsing());
}

#[test]
fn overlong_create_never_reaches_the_api() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let before_calls = api.calls.total();

    handle_event(&mut state, &Event::SetInput("a".repeat(256))).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Create).unwrap();

    assert_eq!(actions, vec![notice_of(&RegexHubError::LengthExceeded { len: 256, max: 255 })]);
    match &actions[0] {
        Action::ShowNotice(n) => assert_eq!(n.message, "Maximum length limit - 255."),
        other => panic!("unexpected action {other:?}"),
    }
    assert_eq!(api.calls.total(), before_calls);
    assert_eq!(count(&api.calls.create_regex), 0);
}

#[test]
fn created_post_opens_detail_by_id_and_refreshes_listing() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let fetches_before = count(&api.calls.get_all_posts);

    handle_event(&mut state, &Event::SetInput(r"x{2,}".into())).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Create).unwrap();

    let detail = match &actions[..] {
        [Action::OpenDetail(detail)] => detail.clone(),
        other => panic!("unexpected actions {other:?}"),
    };
    assert_eq!(detail.request().record_id, 5);
    assert_eq!(detail.request().origin, Origin::Created);
    assert_eq!(detail.record().map(|r| r.expression.as_str()), Some(r"x{2,}"));
    assert_eq!(count(&api.calls.get_post), 1);
    assert_eq!(count(&api.calls.get_all_posts), fetches_before + 1);
    assert_eq!(listing_ids(&state), vec![5, 4, 3, 2, 1]);
    assert!(state.lists.listing.rows()[0].text.contains("Views: 1 "));
    assert_eq!(state.lists.history.rows()[0].record_id, 5);
    assert!(state.input.is_empty());
}

#[test]
fn rejected_create_leaves_listing_unchanged() {
    let (_api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let before = state.lists.listing.rows().to_vec();

    for (text, error) in [
        ("([unbalanced", RegexHubError::InvalidExpression),
        ("[A-Z][a-z]+", RegexHubError::DuplicateExpression),
    ] {
        handle_event(&mut state, &Event::SetInput(text.into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Create).unwrap();

        assert_eq!(actions, vec![notice_of(&error)]);
        assert_eq!(state.lists.listing.rows(), before.as_slice());
        assert_eq!(state.input, text);
    }
}

#[test]
fn unreachable_service_blocks_every_guarded_action() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    handle_event(&mut state, &Event::SetInput("colou".into())).unwrap();
    handle_event(&mut state, &Event::Search).unwrap();

    api.inner.set_available(false);
    let remote_before = api.calls.remote();
    let listing_before = state.lists.listing.rows().to_vec();
    let history_before = state.lists.history.rows().to_vec();

    for (input, event) in [
        ("word", Event::Search),
        ("", Event::Refresh),
        ("abc+", Event::Create),
        ("", Event::Logout),
        ("", Event::ReturnToBrowse),
    ] {
        handle_event(&mut state, &Event::SetInput(input.into())).unwrap();
        let (_, actions) = handle_event(&mut state, &event).unwrap();
        assert_eq!(actions, vec![notice_of(&RegexHubError::Connectivity)], "{event:?}");
    }

    assert_eq!(api.calls.remote(), remote_before);
    assert_eq!(state.lists.listing.rows(), listing_before.as_slice());
    assert_eq!(state.lists.history.rows(), history_before.as_slice());
    assert!(!state.closed);
    assert!(api.inner.is_authenticated());
}

#[test]
fn offline_initial_load_fetches_nothing() {
    let api = RecordingApi::new(seed());
    api.inner.set_available(false);
    let handle: ApiHandle = api.clone();
    let mut state = AppState::new(handle, RefreshPolicy::Consistent);

    let (redraw, actions) = handle_event(&mut state, &Event::Load).unwrap();

    assert!(!redraw);
    assert_eq!(actions, vec![notice_of(&RegexHubError::Connectivity)]);
    assert_eq!(count(&api.calls.check_availability), 1);
    assert_eq!(api.calls.remote(), 0);
    assert!(state.lists.listing.is_empty());
    assert!(state.lists.history.is_empty());
}

#[test]
fn return_to_browse_only_after_a_search() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let before = api.calls.total();

    let (redraw, actions) = handle_event(&mut state, &Event::ReturnToBrowse).unwrap();
    assert!(!redraw);
    assert!(actions.is_empty());
    assert_eq!(api.calls.total(), before);

    handle_event(&mut state, &Event::SetInput("com".into())).unwrap();
    handle_event(&mut state, &Event::Search).unwrap();
    let fetches = count(&api.calls.get_all_posts);
    handle_event(&mut state, &Event::ReturnToBrowse).unwrap();
    assert_eq!(count(&api.calls.get_all_posts), fetches + 1);
}

#[test]
fn connectivity_notice_text() {
    let notice = RegexHubError::Connectivity.notice();
    assert_eq!(notice.title, "Internet Connection");
    assert_eq!(notice.message, "There is no internet connection.");
}

#[test]
fn formatter_is_deterministic() {
    let fractional = ContentRecord::new(4, r"^\w+@\w+\.com$", 7, 10.0 / 3.0, "2024-03-04 18:05");
    let multi_word = ContentRecord::new(9, "hello world again", 1, 2.0, "2024-03-05 08:00");

    for record in [&fractional, &multi_word] {
        for kind in [ViewKind::Listing, ViewKind::HistoryCompact] {
            assert_eq!(format_record(record, kind), format_record(record, kind));
        }
    }
    assert_eq!(
        format_record(&fractional, ViewKind::Listing),
        r"4 | ^\w+@\w+\.com$ | Views: 7 Mark: 3.33333 | Created: 2024-03-04 18:05"
    );
    assert_eq!(
        format_record(&multi_word, ViewKind::HistoryCompact),
        "9 | hello world again | 2024-03-05 08:00"
    );
}

#[test]
fn pipe_in_expression_does_not_confuse_selection() {
    let mut seed = seed();
    seed.posts.push(ContentRecord::new(10, "7 | a|b", 0, 0.0, "2024-04-01 00:00"));
    let api = RecordingApi::new(seed);
    let handle: ApiHandle = api.clone();
    let mut state = AppState::new(handle, RefreshPolicy::Consistent);
    handle_event(&mut state, &Event::Load).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::SelectRow { list: ListKind::Listing, index: 0 }).unwrap();
    assert!(matches!(&actions[..], [Action::OpenDetail(d)] if d.request().record_id == 10));
}

#[test]
fn detail_from_listing_refreshes_view_counts() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    // Listing is newest first: index 3 is record 1 with 12 views.
    let (_, actions) = handle_event(&mut state, &Event::SelectRow { list: ListKind::Listing, index: 3 }).unwrap();

    let Some(Action::OpenDetail(detail)) = actions.first() else {
        panic!("no detail opened: {actions:?}");
    };
    assert_eq!(detail.record().map(|r| r.views), Some(13));
    assert_eq!(actions.len(), 1);
    assert_eq!(count(&api.calls.get_post), 1);

    assert!(state.lists.listing.rows()[3].text.contains("Views: 13"));
    assert_eq!(state.lists.history.rows()[0].record_id, 1);
    assert_eq!(state.lists.listing.selected(), None);
}

#[test]
fn history_open_moves_record_to_top_of_history() {
    let (_api, mut state) = loaded_state(RefreshPolicy::Consistent);
    // History is [2, 1]; opening record 1 brings it to the front.
    handle_event(&mut state, &Event::SelectRow { list: ListKind::History, index: 1 }).unwrap();

    let ids: Vec<i64> = state.lists.history.rows().iter().map(|r| r.record_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn offline_detail_open_changes_nothing() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    api.inner.set_available(false);
    let remote_before = api.calls.remote();
    let listing_before = state.lists.listing.rows().to_vec();

    let (_, actions) = handle_event(&mut state, &Event::SelectRow { list: ListKind::Listing, index: 0 }).unwrap();

    assert_eq!(actions, vec![notice_of(&RegexHubError::Connectivity)]);
    assert_eq!(api.calls.remote(), remote_before);
    assert_eq!(state.lists.listing.rows(), listing_before.as_slice());
}

#[test]
fn history_refresh_follows_policy() {
    for (policy, expected_extra_fetches) in [(RefreshPolicy::Consistent, 1), (RefreshPolicy::ListingOnly, 0)] {
        let (api, mut state) = loaded_state(policy);
        let before = count(&api.calls.user_views_history);

        let (_, actions) =
            handle_event(&mut state, &Event::SelectRow { list: ListKind::History, index: 0 }).unwrap();

        assert!(matches!(
            &actions[..],
            [Action::OpenDetail(d)] if d.request().record_id == 2 && d.request().origin == Origin::History
        ));
        assert_eq!(count(&api.calls.user_views_history), before + expected_extra_fetches, "{policy:?}");
    }
}

#[test]
fn profile_loads_both_lists_with_counts() {
    let api = RecordingApi::new(seed());
    let handle: ApiHandle = api.clone();
    let mut profile = ProfileState::new(handle, RefreshPolicy::Consistent);

    let (redraw, actions) = profile.handle_event(&ProfileEvent::Load).unwrap();
    assert!(redraw);
    assert!(actions.is_empty());
    assert_eq!(profile.username(), "ada");
    assert_eq!(profile.list(ProfileListKind::Posts).label(), "Posts (2)");
    assert_eq!(profile.list(ProfileListKind::History).label(), "History (2)");
    assert_eq!(count(&api.calls.author_posts), 1);
}

#[test]
fn profile_detail_refresh_follows_policy() {
    for (policy, expected) in [(RefreshPolicy::Consistent, 2), (RefreshPolicy::ListingOnly, 1)] {
        let api = RecordingApi::new(seed());
        let handle: ApiHandle = api.clone();
        let mut profile = ProfileState::new(handle, policy);
        profile.handle_event(&ProfileEvent::Load).unwrap();

        profile
            .handle_event(&ProfileEvent::SelectRow { list: ProfileListKind::Posts, index: 0 })
            .unwrap();
        assert_eq!(count(&api.calls.author_posts), expected, "{policy:?}");
    }
}

#[test]
fn open_profile_action_names_current_user() {
    let (_api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let (_, actions) = handle_event(&mut state, &Event::OpenProfile).unwrap();
    assert_eq!(actions, vec![Action::OpenProfile { username: "ada".into() }]);
}

#[test]
fn logout_hands_over_to_welcome() {
    let (api, mut state) = loaded_state(RefreshPolicy::Consistent);
    let (_, actions) = handle_event(&mut state, &Event::Logout).unwrap();

    assert_eq!(actions, vec![Action::OpenWelcome, Action::CloseWindow]);
    assert_eq!(count(&api.calls.exit_user), 1);
    assert!(!api.inner.is_authenticated());
    assert!(state.closed);
}

#[test]
fn config_file_round_trip_through_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.json");
    std::fs::write(&seed_path, serde_json::to_string(&seed()).unwrap()).unwrap();

    let config_path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "data_file = {:?}", seed_path.display().to_string()).unwrap();
    writeln!(file, "refresh_policy = \"listing-only\"").unwrap();
    drop(file);

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.refresh_policy, RefreshPolicy::ListingOnly);

    let mut state = regexhub::initialize(&config).unwrap();
    handle_event(&mut state, &Event::Load).unwrap();
    assert_eq!(listing_ids(&state), vec![4, 3, 2, 1]);
    assert_eq!(state.identity().username, "ada");
}
