use checkout_ui::*;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::time::Duration;

thread_local! {
    static GUARD: RefCell<Option<UseSubmissionGuard>> = const { RefCell::new(None) };
}

fn app() -> Element {
    let guard = use_submission_guard(GuardConfig::default(), "Proceed to Checkout");
    let state = guard.button();

    use_hook(|| {
        guard.submit(Some(&FormTarget::checkout()));
        GUARD.with(|slot| *slot.borrow_mut() = Some(guard.clone()));
    });

    rsx! { CheckoutButton { state } }
}

#[tokio::test(start_paused = true)]
async fn relock_runs_as_a_dioxus_task() {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    let guard = GUARD
        .with(|slot| slot.borrow().clone())
        .expect("guard is captured on first render");
    assert!(guard.has_pending());
    assert!(guard.button().peek().disabled);

    // the relock leaves the button untouched, so there is no more work once it fires
    let _ = tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
        }
    })
    .await;

    assert!(!guard.has_pending());
    assert!(guard.button().peek().disabled);
    assert!(guard.button().peek().content.is_loading());
}
