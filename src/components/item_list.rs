//! Item List Component
//!
//! Renders the item rows. Deletion asks for confirmation here and then
//! delegates the actual call upward; declining issues nothing.

use leptos::prelude::*;

use crate::dialogs::{use_dialogs, Dialogs};
use crate::models::{format_date, Item};

/// Gate a delete request behind user confirmation. The callback runs only
/// when the user confirms.
fn confirm_delete(dialogs: &Dialogs, id: u32, on_delete: impl FnOnce(u32)) {
    if dialogs.confirm("Are you sure you want to delete this item?") {
        on_delete(id);
    }
}

/// List renderer with per-row delete buttons
#[component]
pub fn ItemList(
    items: ReadSignal<Vec<Item>>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let dialogs = use_dialogs();

    let handle_delete = move |id: u32| {
        confirm_delete(&dialogs, id, |id| on_delete.run(id));
    };

    view! {
        <ul class="item-list">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item: Item| {
                    let id = item.id;
                    let handle_delete = handle_delete.clone();
                    view! {
                        <li class="item">
                            <div class="item-content">
                                <div class="item-name">{item.name.clone()}</div>
                                {item
                                    .description
                                    .clone()
                                    .map(|desc| {
                                        view! { <div class="item-description">{desc}</div> }
                                    })}
                                <div class="item-date">
                                    "Created: " {format_date(&item.created_at)}
                                </div>
                            </div>
                            <button class="item-delete" on:click=move |_| handle_delete(id)>
                                "Delete"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
