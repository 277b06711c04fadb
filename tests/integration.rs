// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the notifier against a scripted host.

use herald::config::Config;
use herald::test_utils::MockHost;
use herald::{ConfirmToastRequest, Notifier, PromptToastRequest, ToastRequest, Variant};
use std::sync::{Arc, Mutex};

fn notifier(host: &Arc<MockHost>) -> Notifier {
    Notifier::builder(Arc::clone(host) as Arc<dyn herald::DialogHost>)
        .config(Config::default())
        .language("en-US")
        .build()
}

#[tokio::test]
async fn repeated_identical_alert_opens_one_dialog() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    tokio::join!(
        notifier.alert("Heads up", "disk is almost full"),
        notifier.alert("Heads up", "disk is almost full"),
        async {
            // The duplicate was suppressed before we dismiss anything.
            assert_eq!(host.alert_count(), 1);
            host.dismiss_alert(0);
        }
    );

    assert_eq!(host.alert_count(), 1);
}

#[tokio::test]
async fn alerts_with_different_content_stack() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    tokio::join!(
        notifier.alert("t", "first message"),
        notifier.alert("t", "second message"),
        async {
            assert_eq!(host.alert_count(), 2);
            host.dismiss_alert(0);
            host.dismiss_alert(1);
        }
    );

    assert_eq!(host.alert_count(), 2);
}

#[tokio::test]
async fn guard_resets_after_dismissal() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    tokio::join!(notifier.alert("t", "same text"), async {
        host.dismiss_alert(0);
    });

    tokio::join!(notifier.alert("t", "same text"), async {
        assert_eq!(host.alert_count(), 2);
        host.dismiss_alert(1);
    });

    assert_eq!(host.open_alert_count(), 0);
}

#[test]
fn toast_identifiers_are_distinct_and_increasing() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let ids: Vec<_> = (0..10)
        .map(|i| notifier.toast(ToastRequest::new("t", format!("m{i}"))))
        .collect();

    for (left, right) in ids.iter().zip(ids.iter().skip(1)) {
        assert!(left.value() < right.value(), "{left} should precede {right}");
    }
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn backend_error_code_is_translated() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    tokio::join!(notifier.error("error_missing_field"), async {
        host.dismiss_alert(0);
    });

    let (title, content) = host.alert(0);
    assert_eq!(title, notifier.tr("error"));
    assert_eq!(content, notifier.tr("error_missing_field"));
    assert_eq!(content, "A required field is missing.");
}

#[tokio::test]
async fn unknown_error_code_is_reported_verbatim() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    tokio::join!(notifier.error("E500"), async {
        host.dismiss_alert(0);
    });

    let (title, content) = host.alert(0);
    assert_eq!(title, "Error");
    assert_eq!(content, "Unknown error: E500");
}

#[tokio::test]
async fn confirm_distinguishes_three_outcomes() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let (yes, _) = tokio::join!(notifier.confirm("t", "proceed?"), async {
        host.resolve_confirm(0, true);
    });
    assert_eq!(yes, Some(true));

    let (no, _) = tokio::join!(notifier.confirm("t", "proceed?"), async {
        host.resolve_confirm(1, false);
    });
    assert_eq!(no, Some(false));

    let (dismissed, _) = tokio::join!(notifier.confirm("t", "proceed?"), async {
        host.abandon_confirm(2);
    });
    assert_eq!(dismissed, None);
}

#[tokio::test]
async fn confirm_labels_are_translated() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let (_, _) = tokio::join!(notifier.confirm("t", "c"), async {
        host.resolve_confirm(0, true);
    });

    assert_eq!(
        host.confirm_labels(0),
        ("Yes".to_string(), "No".to_string())
    );
}

#[test]
fn prompt_ok_receives_edited_text() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let captured = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&captured);
    notifier.prompt_toast(PromptToastRequest::new("Rename", "abc", move |text| {
        *sink.lock().unwrap() = Some(text);
    }));

    host.edit_prompt(0, "xyz");
    host.press_ok(0);

    assert_eq!(captured.lock().unwrap().as_deref(), Some("xyz"));
}

#[test]
fn prompt_ok_without_edit_receives_initial_text() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let captured = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&captured);
    notifier.prompt_toast(PromptToastRequest::new("Rename", "abc", move |text| {
        *sink.lock().unwrap() = Some(text);
    }));

    host.press_ok(0);
    assert_eq!(captured.lock().unwrap().as_deref(), Some("abc"));
}

#[test]
fn confirm_toast_fires_exactly_one_callback() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let outcome = Arc::new(Mutex::new(Vec::new()));
    let yes_sink = Arc::clone(&outcome);
    let no_sink = Arc::clone(&outcome);
    notifier.confirm_toast(ConfirmToastRequest::new(
        "Update",
        "Open release notes?",
        move || yes_sink.lock().unwrap().push("yes"),
        move || no_sink.lock().unwrap().push("no"),
    ));

    host.press_yes(0);
    assert_eq!(*outcome.lock().unwrap(), vec!["yes"]);
    assert_eq!(host.toast_count(), 0);
}

#[test]
fn auto_hide_fires_no_callback() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let fired = Arc::new(Mutex::new(false));
    let yes_fired = Arc::clone(&fired);
    let no_fired = Arc::clone(&fired);
    notifier.confirm_toast(ConfirmToastRequest::new(
        "t",
        "m",
        move || *yes_fired.lock().unwrap() = true,
        move || *no_fired.lock().unwrap() = true,
    ));

    host.expire(0);
    assert!(!*fired.lock().unwrap());
    assert_eq!(host.toast_count(), 0);
}

#[test]
fn toast_click_and_close_route_to_their_callbacks() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let events = Arc::new(Mutex::new(Vec::new()));
    let click_sink = Arc::clone(&events);
    let close_sink = Arc::clone(&events);
    notifier.toast(
        ToastRequest::new("Saved", "Your changes were saved")
            .on_click(move || click_sink.lock().unwrap().push("click")),
    );
    notifier.toast(
        ToastRequest::new("Saved", "Again")
            .on_close(move || close_sink.lock().unwrap().push("close")),
    );

    host.press_body(0);
    host.press_close(0); // indices shift after removal
    assert_eq!(*events.lock().unwrap(), vec!["click", "close"]);
}

#[test]
fn replace_flag_clears_same_placement_stack() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    notifier.toast(ToastRequest::new("a", "1"));
    notifier.toast(ToastRequest::new("b", "2"));
    let survivor = notifier.toast(ToastRequest::new("c", "3").append(false));

    assert_eq!(host.toast_count(), 1);
    assert_eq!(host.toast(0).id, survivor);
    assert_eq!(host.dismissed().len(), 2);
}

#[test]
fn dismiss_toast_by_id_is_silent() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    let fired = Arc::new(Mutex::new(false));
    let sink = Arc::clone(&fired);
    let id = notifier.toast(
        ToastRequest::new("t", "m").on_close(move || *sink.lock().unwrap() = true),
    );

    notifier.dismiss_toast(id);
    assert_eq!(host.toast_count(), 0);
    assert!(!*fired.lock().unwrap());
    assert_eq!(host.dismissed(), vec![id]);
}

#[test]
fn open_without_navigator_warns_visibly() {
    let host = Arc::new(MockHost::new());
    let notifier = notifier(&host);

    notifier.open(herald::Location::with_path("/profile"));

    assert_eq!(host.toast_count(), 1);
    let toast = host.toast(0);
    assert_eq!(toast.variant, Variant::Warning);
    assert_eq!(toast.title, "Warning");
}
