use crate::shared::icons::icon;
use contracts::shared::country::{country_name, search_countries};
use leptos::prelude::*;

/// Searchable country list. Emits the ISO code of the clicked entry.
#[component]
pub fn CountryPicker(
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let matches = Memo::new(move |_| query.with(|q| search_countries(q)));
    let is_disabled = move || disabled.get();

    view! {
        <div class="country-picker">
            <div class="country-picker__current">
                {move || {
                    let code = selected.get();
                    if code.trim().is_empty() {
                        "Sin seleccionar".to_string()
                    } else {
                        format!("{} {}", code, country_name(&code))
                    }
                }}
            </div>
            <div class="country-picker__search">
                {icon("search")}
                <input
                    type="search"
                    class="form__input"
                    placeholder="Buscar país"
                    prop:value=move || query.get()
                    disabled=is_disabled
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <ul class="country-picker__list" role="listbox">
                <For
                    each=move || matches.get()
                    key=|country| country.code
                    children=move |country| {
                        let code = country.code;
                        view! {
                            <li
                                role="option"
                                class="country-picker__option"
                                class:country-picker__option--selected=move || selected.get().eq_ignore_ascii_case(code)
                                aria-selected=move || selected.get().eq_ignore_ascii_case(code).to_string()
                                on:click=move |_| {
                                    if !is_disabled() {
                                        on_select.run(code.to_string());
                                    }
                                }
                            >
                                <span class="country-picker__code">{code}</span>
                                " "
                                {country.name}
                            </li>
                        }
                    }
                />
                <Show when=move || matches.with(|m| m.is_empty())>
                    <li class="country-picker__empty">"Sin resultados"</li>
                </Show>
            </ul>
        </div>
    }
}
