use crate::shared::icons::icon;
use leptos::prelude::*;

/// Icon button with an optional visible caption.
///
/// `title` doubles as the accessible name, so icon-only buttons stay
/// announced.
#[component]
pub fn IconButton(
    icon_name: &'static str,
    #[prop(into)] title: String,
    on_click: Callback<()>,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let class = match (&caption, class) {
        (Some(_), Some(extra)) => format!("button button--secondary button--small {}", extra),
        (Some(_), None) => "button button--secondary button--small".to_string(),
        (None, Some(extra)) => format!("button button--icon {}", extra),
        (None, None) => "button button--icon".to_string(),
    };

    view! {
        <button
            type="button"
            class=class
            title=title.clone()
            aria-label=title
            disabled=move || disabled.get()
            on:click=move |_| {
                if !disabled.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {icon(icon_name)}
            {caption}
        </button>
    }
}
