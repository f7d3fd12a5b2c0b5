//! User List Component
//!
//! Collection view for `/`: fetches all user summaries on mount and renders
//! one card per user, linking to the detail page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::models::UserSummary;

/// User collection view with loading/error/empty/populated states
#[component]
pub fn UserList() -> impl IntoView {
    let (users, set_users) = signal(Vec::<UserSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Single fetch on mount; re-fetching views carry a sequence guard instead.
    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_users().await {
                Ok(loaded) => {
                    set_users.set(loaded);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[USERS] fetch failed: {}", err).into());
                    set_error.set(Some(format!("Error fetching users: {}", err)));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                view! {
                    <div class="loading">
                        <p>"Loading users..."</p>
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
            } else if users.get().is_empty() {
                view! {
                    <div class="empty">
                        <p>"No users found."</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="user-list">
                        <h1>"Social OS Wiki"</h1>
                        <p class="subtitle">"User Profiles"</p>

                        <div class="users-grid">
                            <For
                                each=move || users.get()
                                key=|user| user.user_id.clone()
                                children=move |user: UserSummary| {
                                    let href = format!("/users/{}", user.user_id);
                                    view! {
                                        <A href=href attr:class="user-card">
                                            <h2>{user.name.clone()}</h2>
                                            {user.bio.clone().map(|bio| view! { <p class="bio">{bio}</p> })}
                                            <span class="user-id">"@" {user.user_id.clone()}</span>
                                        </A>
                                    }
                                }
                            />
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
