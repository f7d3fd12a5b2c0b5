//! Social Wiki Frontend App
//!
//! Root component: provides the dialog capability and maps routes to views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{ItemsPage, UserDetail, UserList};
use crate::dialogs::{BrowserDialogs, Dialogs};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Dialogs::new(BrowserDialogs));

    view! {
        <Router>
            <div class="container">
                <Routes fallback=|| view! { <p class="error">"Page not found."</p> }>
                    <Route path=path!("/") view=UserList/>
                    <Route path=path!("/items") view=ItemsPage/>
                    <Route path=path!("/users/:userId") view=UserDetail/>
                </Routes>
            </div>
        </Router>
    }
}
