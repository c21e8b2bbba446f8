//! Form primitives shared by the inline-edit renderers

pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;

pub use button::IconButton;
pub use checkbox::Toggle;
pub use input::TextInput;
pub use select::OptionSelect;

use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_CONTROL_ID: AtomicUsize = AtomicUsize::new(1);

/// Unique DOM id tying a `<label>` to its control.
pub fn next_control_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
}

/// Label slot above a control. Renders the control alone when `label` is unset.
#[component]
pub fn FormGroup(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Id of the labelled control
    control_id: String,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=control_id.clone()>
                    {l}
                    {required.then_some(view! { <span class="form__required" aria-hidden="true">" *"</span> })}
                </label>
            })}
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_ids_are_unique() {
        let a = next_control_id("slot");
        let b = next_control_id("slot");
        assert_ne!(a, b);
        assert!(a.starts_with("slot-"));
    }
}
