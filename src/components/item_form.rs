//! Item Form Component
//!
//! Form for creating new items. Name is required and checked client-side
//! before any network call; the parent is told about saves (to refresh its
//! list) and failures (to surface the message).

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::dialogs::use_dialogs;

fn name_is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Form for creating new items
#[component]
pub fn ItemForm(
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let dialogs = use_dialogs();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_value = name.get();
        if name_is_blank(&name_value) {
            // Rejected before any network call; fields stay as typed.
            dialogs.alert("Name is required");
            return;
        }
        let description_value = description.get();

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_item(&name_value, &description_value).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    on_saved.run(());
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[ITEM-FORM] create failed: {}", err).into(),
                    );
                    on_error.run(format!("Error creating item: {}", err));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="item-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="name">"Name:"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=move || name.get()
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
            </div>

            <div class="form-group">
                <label for="description">"Description:"</label>
                <textarea
                    id="description"
                    prop:value=move || description.get()
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_description.set(textarea.value());
                    }
                ></textarea>
            </div>

            <button type="submit" class="button-primary" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Adding..." } else { "Add Item" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_rejected() {
        assert!(name_is_blank(""));
        assert!(name_is_blank("   "));
        assert!(name_is_blank("\t\n"));
    }

    #[test]
    fn test_padded_name_accepted() {
        assert!(!name_is_blank("  Widget  "));
        assert!(!name_is_blank("a"));
    }
}
