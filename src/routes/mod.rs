mod admin;
mod message;
mod not_found;

pub(crate) use admin::AdminPage;
pub(crate) use message::MessagePage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const ADMIN: &str = "/admin";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=MessagePage />
            <Route path=path!("/admin") view=AdminPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
