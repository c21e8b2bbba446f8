use crate::domain::a001_guest::ui::details::GuestDetails;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::path;

/// `/guests/:id`
#[component]
fn GuestPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    // A new id remounts the page with fresh edit sessions
    move || view! { <GuestDetails id=id.get() /> }
}

/// Landing page: open a guest by id.
#[component]
fn GuestLookup() -> impl IntoView {
    let navigate = use_navigate();
    let (guest_id, set_guest_id) = signal(String::new());

    let open = move || {
        let id = guest_id.get_untracked();
        let id = id.trim();
        if !id.is_empty() {
            navigate(&format!("/guests/{}", urlencoding::encode(id)), Default::default());
        }
    };
    let open_on_click = open.clone();

    view! {
        <div class="guest-lookup">
            <h1>{icon("search")} " Buscar huésped"</h1>
            <input
                type="text"
                class="form__input"
                placeholder="ID del huésped"
                prop:value=move || guest_id.get()
                on:input=move |ev| set_guest_id.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        open();
                    }
                }
            />
            <button type="button" class="button button--primary" on:click=move |_| open_on_click()>
                "Abrir"
            </button>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="alert alert--error">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=GuestLookup />
                    <Route path=path!("/guests/:id") view=GuestPage />
                </Routes>
            </main>
        </Router>
    }
}
