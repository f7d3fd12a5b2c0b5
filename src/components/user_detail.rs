//! User Detail Component
//!
//! Detail view for `/users/:userId`: fetches one profile keyed by the route
//! parameter and renders it, wiki content through the markdown module.
//! Re-fetches when the id changes; a stale response never overwrites the
//! newer fetch thanks to the sequence guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::fetch::FetchSeq;
use crate::markdown::parse_markdown;
use crate::models::{format_date, UserDetail as User};

/// User detail view with loading/error/not-found/populated states
#[component]
pub fn UserDetail() -> impl IntoView {
    let params = use_params_map();
    let (user, set_user) = signal::<Option<User>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let seq = FetchSeq::new();

    // Fetch on mount and whenever the route id changes
    Effect::new(move |_| {
        let user_id = params.read().get("userId");
        let seq = seq.clone();
        let ticket = seq.begin();

        let Some(user_id) = user_id else {
            set_error.set(Some("No user ID provided".to_string()));
            set_loading.set(false);
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            let result = api::get_user(&user_id).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_user.set(loaded);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[USER] fetch failed: {}", err).into());
                    set_error.set(Some(format!("Error fetching user: {}", err)));
                }
            }
            set_loading.set(false);
        });
    });

    let back_link = || view! { <A href="/" attr:class="back-link">"← Back to Users"</A> };

    view! {
        {move || {
            if loading.get() {
                view! {
                    <div class="loading">
                        <p>"Loading user profile..."</p>
                    </div>
                }
                    .into_any()
            } else if let Some(err) = error.get() {
                view! {
                    <div class="error">
                        {back_link()}
                        <p>"Error: " {err}</p>
                    </div>
                }
                    .into_any()
            } else if let Some(user) = user.get() {
                view! {
                    <div class="user-detail">
                        {back_link()}

                        <header class="user-header">
                            <h1>{user.name.clone()}</h1>
                            <span class="user-id">"@" {user.user_id.clone()}</span>
                            {user.bio.clone().map(|bio| view! { <p class="bio">{bio}</p> })}
                        </header>

                        {match user.wiki_content.clone() {
                            Some(content) => {
                                view! {
                                    <div class="wiki-content" inner_html=parse_markdown(&content)></div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="empty">"No additional information available."</p> }
                                    .into_any()
                            }
                        }}

                        {(user.created_at.is_some() || user.updated_at.is_some())
                            .then(|| {
                                view! {
                                    <footer class="user-footer">
                                        {user
                                            .created_at
                                            .clone()
                                            .map(|ts| {
                                                view! { <p class="meta">"Created: " {format_date(&ts)}</p> }
                                            })}
                                        {user
                                            .updated_at
                                            .clone()
                                            .map(|ts| {
                                                view! { <p class="meta">"Updated: " {format_date(&ts)}</p> }
                                            })}
                                    </footer>
                                }
                            })}
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="error">
                        {back_link()}
                        <p>"User not found"</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
