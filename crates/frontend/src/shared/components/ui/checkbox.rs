use super::next_control_id;
use leptos::prelude::*;

/// Checkbox over an optional boolean.
///
/// `None` renders as indeterminate so an unanswered field never looks like
/// "No" while editing.
#[component]
pub fn Toggle(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<Option<bool>>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let control_id = next_control_id("toggle");
    let wrapper_class = move || {
        if disabled.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=control_id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get().unwrap_or(false)
                prop:indeterminate=move || checked.get().is_none()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=control_id>
                {label}
            </label>
        </div>
    }
}
