use crate::shared::icons::icon;
use contracts::shared::inline_edit::{ActionLayout, ActionState};
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Save/cancel pair shared by every inline-edit renderer.
///
/// Both buttons are inert while `is_updating || disabled`; the spinner
/// replaces the save icon while a save is in flight.
#[component]
pub fn ActionButtons(
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] is_updating: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] layout: ActionLayout,
) -> impl IntoView {
    let state = Memo::new(move |_| {
        ActionState::from_flags(true, is_updating.get(), disabled.get())
    });

    view! {
        <div class=layout.css_class()>
            <button
                type="button"
                class="button button--icon inline-edit__save"
                title="Guardar"
                aria-label="Guardar"
                aria-busy=move || state.get().busy.to_string()
                disabled=move || !state.get().save_enabled
                on:click=move |_| {
                    if state.get_untracked().save_enabled {
                        on_save.run(());
                    }
                }
            >
                {move || {
                    if state.get().busy {
                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                    } else {
                        icon("save")
                    }
                }}
            </button>
            <button
                type="button"
                class="button button--icon inline-edit__cancel"
                title="Cancelar"
                aria-label="Cancelar"
                disabled=move || !state.get().cancel_enabled
                on:click=move |_| {
                    if state.get_untracked().cancel_enabled {
                        on_cancel.run(());
                    }
                }
            >
                {icon("close")}
            </button>
        </div>
    }
}
