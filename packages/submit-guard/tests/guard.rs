use pretty_assertions::assert_eq;
use std::time::Duration;
use submit_guard::*;

fn checkout() -> (ManualScheduler, SubmissionGuard<ManualScheduler>, FormTarget, SharedButton) {
    let clock = ManualScheduler::new();
    let guard = SubmissionGuard::new(clock.clone());
    let form = FormTarget::checkout();
    let button = SharedButton::new(form.submit_label.clone());
    (clock, guard, form, button)
}

#[test]
fn submit_locks_and_shows_spinner() {
    let (_clock, mut guard, form, button) = checkout();

    let outcome = guard.on_submit(Some(&form), Some(&button));

    assert_eq!(outcome, GuardOutcome::Locked);
    assert_eq!(button.state(), ButtonState::processing("Processing..."));
    assert!(button.state().content.is_loading());
    assert!(guard.has_pending());
}

#[test]
fn button_stays_locked_after_relock() {
    let (clock, mut guard, form, button) = checkout();

    guard.on_submit(Some(&form), Some(&button));

    assert_eq!(clock.advance(Duration::from_millis(499)), 0);
    assert!(button.is_disabled());
    assert!(guard.has_pending());

    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert!(button.is_disabled());
    assert_eq!(button.state().content.label(), PROCESSING_LABEL);
    assert!(!guard.has_pending());
}

#[test]
fn relock_reasserts_disabled_flag() {
    let (clock, mut guard, form, button) = checkout();

    guard.on_submit(Some(&form), Some(&button));

    // something outside the guard flips the button back on before the relock
    let mut meddler = button.clone();
    meddler.set_disabled(false);

    clock.advance(Duration::from_millis(500));
    assert!(button.is_disabled());
}

#[test]
fn missing_button_is_a_noop() {
    let (clock, mut guard, form, button) = checkout();

    let outcome = guard.on_submit::<SharedButton>(Some(&form), None);

    assert_eq!(outcome, GuardOutcome::Skipped(Missing::Button));
    assert_eq!(button.state(), ButtonState::new("Proceed to Checkout"));
    assert_eq!(clock.pending(), 0);
    assert_eq!(guard.submissions(), 0);
    assert!(!guard.has_pending());
}

#[test]
fn missing_form_is_a_noop() {
    let (clock, mut guard, _form, button) = checkout();

    assert_eq!(
        guard.on_submit(None, Some(&button)),
        GuardOutcome::Skipped(Missing::Form)
    );
    assert_eq!(
        guard.on_submit::<SharedButton>(None, None),
        GuardOutcome::Skipped(Missing::Both)
    );

    assert!(!button.is_disabled());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn resubmitting_replaces_the_pending_relock() {
    let (clock, mut guard, form, button) = checkout();

    guard.on_submit(Some(&form), Some(&button));
    clock.advance(Duration::from_millis(300));
    guard.on_submit(Some(&form), Some(&button));

    assert_eq!(clock.pending(), 1);
    assert_eq!(guard.submissions(), 2);

    // the first relock would have been due at 500ms
    assert_eq!(clock.advance(Duration::from_millis(200)), 0);
    assert_eq!(clock.advance(Duration::from_millis(300)), 1);
    assert!(button.is_disabled());
}

#[test]
fn dropping_the_guard_cancels_the_relock() {
    let (clock, mut guard, form, button) = checkout();

    guard.on_submit(Some(&form), Some(&button));
    drop(guard);

    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(Duration::from_secs(1)), 0);
    assert!(button.is_disabled());
}

#[test]
fn cancel_pending_reports_whether_anything_was_cancelled() {
    let (clock, mut guard, form, button) = checkout();

    assert!(!guard.cancel_pending());

    guard.on_submit(Some(&form), Some(&button));
    assert!(guard.cancel_pending());
    assert!(!guard.cancel_pending());

    clock.advance(Duration::from_secs(1));
    assert!(button.is_disabled());
}

#[test]
fn never_enables_the_button() {
    let clock = ManualScheduler::new();
    let mut guard = SubmissionGuard::new(clock.clone());
    let form = FormTarget::checkout();

    for pre_disabled in [false, true] {
        let mut button = SharedButton::new("Pay");
        button.set_disabled(pre_disabled);

        guard.on_submit(Some(&form), Some(&button));
        assert!(button.is_disabled());

        clock.advance(Duration::from_millis(250));
        assert!(button.is_disabled());
    }

    clock.advance(Duration::from_secs(5));
    assert_eq!(clock.pending(), 0);
}

#[test]
fn custom_config_controls_label_and_delay() {
    let clock = ManualScheduler::new();
    let config = GuardConfig {
        processing_label: "Placing order...".into(),
        relock_delay_ms: 50,
        ..Default::default()
    };
    let mut guard = SubmissionGuard::with_config(config, clock.clone());
    let button = SharedButton::new("Place order");

    guard.on_submit(Some(&FormTarget::checkout()), Some(&button));

    assert_eq!(button.state().content, ButtonContent::loading("Placing order..."));
    assert_eq!(clock.advance(Duration::from_millis(50)), 1);
    assert_eq!(guard.config().relock_delay(), Duration::from_millis(50));
}
