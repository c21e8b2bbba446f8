use super::{next_control_id, FormGroup};
use contracts::shared::inline_edit::SelectOption;
use leptos::prelude::*;

/// Drop-down over a fixed option list.
///
/// Emits the raw option code, or `None` when the leading blank entry is
/// chosen.
#[component]
pub fn OptionSelect(
    options: &'static [SelectOption],
    /// Selected code, empty for none
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<Option<String>>,
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Text of the blank entry
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let control_id = next_control_id("select");

    view! {
        <FormGroup label=label control_id=control_id.clone()>
            <select
                id=control_id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let code = event_target_value(&ev);
                    on_change.run(if code.is_empty() { None } else { Some(code) });
                }
            >
                <option value="" selected=move || value.with(|v| v.is_empty())>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                {options
                    .iter()
                    .map(|option| {
                        let code = option.value;
                        view! {
                            <option value=code selected=move || value.with(|v| v == code)>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </FormGroup>
    }
}
