use crate::shared::api_utils::app_config;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// Delay before the close button takes focus, letting the overlay mount.
const FOCUS_DELAY_MS: u32 = 50;

/// Confirmation shown after a successful save.
///
/// Closes on Escape, on an overlay click, on the close button, or by itself
/// after `success_modal_ms`. Pending timers and the Escape listener are
/// released when the modal unmounts.
#[component]
pub fn SuccessModal(
    #[prop(into)] message: String,
    on_close: Callback<()>,
    /// Overrides the configured auto-close delay; `Some(0)` disables it
    #[prop(optional)]
    auto_close_ms: Option<u32>,
) -> impl IntoView {
    let close_ref = NodeRef::<html::Button>::new();
    let timers = StoredValue::new_local(Vec::<Timeout>::new());

    let close = Callback::new(move |_: ()| {
        // Dropping a gloo Timeout cancels it
        let _ = timers.try_set_value(Vec::new());
        on_close.run(());
    });

    let focus = Timeout::new(FOCUS_DELAY_MS, move || {
        if let Some(button) = close_ref.get_untracked() {
            let _ = button.focus();
        }
    });
    timers.update_value(|t| t.push(focus));

    let delay = auto_close_ms.unwrap_or(app_config().success_modal_ms);
    if delay > 0 {
        // Must not clear `timers` from inside its own callback
        let auto_close = Timeout::new(delay, move || on_close.run(()));
        timers.update_value(|t| t.push(auto_close));
    }

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close.run(());
        }
    });

    on_cleanup(move || {
        escape.remove();
        let _ = timers.try_set_value(Vec::new());
    });

    view! {
        <div class="modal-overlay" on:click=move |_| close.run(())>
            <div
                class="modal modal--success"
                role="alertdialog"
                aria-live="assertive"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-body modal-body--centered">
                    <span class="modal__icon">{icon("check-circle")}</span>
                    <p class="modal__message">{message}</p>
                    <button
                        type="button"
                        class="button button--primary"
                        node_ref=close_ref
                        on:click=move |_| close.run(())
                    >
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
