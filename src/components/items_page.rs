//! Items Page
//!
//! Collection view for `/items`: creation form on top, fetched item list
//! below. Every mutation is followed by a full re-fetch; the server stays
//! the sole source of truth.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{ItemForm, ItemList};
use crate::fetch::FetchSeq;
use crate::models::Item;

/// Items collection view with creation and deletion
#[component]
pub fn ItemsPage() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);
    // Fetch errors replace the list; mutation errors show above it.
    let (error, set_error) = signal::<Option<String>>(None);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let seq = FetchSeq::new();

    // Fetch on mount and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let seq = seq.clone();
        let ticket = seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_items().await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_items.set(loaded);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] fetch failed: {}", err).into());
                    set_error.set(Some(format!("Error fetching items: {}", err)));
                }
            }
            set_loading.set(false);
        });
    });

    let refresh = move || {
        set_action_error.set(None);
        set_reload_trigger.update(|v| *v += 1);
    };

    // Confirmation already happened in the list; just delete and refresh.
    let delete_item = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => refresh(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] delete failed: {}", err).into());
                    // Keep the currently displayed list.
                    set_action_error.set(Some(format!("Error deleting item: {}", err)));
                }
            }
        });
    });

    let on_saved = Callback::new(move |_: ()| refresh());
    let on_error = Callback::new(move |msg: String| set_action_error.set(Some(msg)));

    view! {
        <div class="items-page">
            <A href="/" attr:class="back-link">"← Back to Users"</A>
            <h1>"Items"</h1>

            <ItemForm on_saved=on_saved on_error=on_error/>

            {move || action_error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading">
                            <p>"Loading items..."</p>
                        </div>
                    }
                        .into_any()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="error">
                            <p>"Error: " {err}</p>
                        </div>
                    }
                        .into_any()
                } else if items.get().is_empty() {
                    view! {
                        <div class="empty">
                            <p>"No items found."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <ItemList items=items on_delete=delete_item/> }.into_any()
                }
            }}
        </div>
    }
}
