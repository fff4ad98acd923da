//! Shared layout wrapper with navigation, content container and a build
//! footer. Navigation is client-side only; the API enforces access control.

use crate::{app_lib::GIT_COMMIT_HASH, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK_CLASS: &str = "py-2 px-3 text-gray-900 rounded hover:text-rose-600 md:p-0";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="font-semibold whitespace-nowrap text-rose-600">
                        "spread love"
                    </A>
                    <nav class="flex gap-6">
                        <A href=paths::HOME {..} class=NAV_LINK_CLASS>"Today"</A>
                        <A href=paths::ADMIN {..} class=NAV_LINK_CLASS>"Admin"</A>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                <pre>{GIT_COMMIT_HASH}</pre>
            </footer>
        </div>
    }
}
