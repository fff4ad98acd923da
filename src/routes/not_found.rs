//! Minimal 404 page for unknown routes.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-7xl font-black text-rose-100 select-none">"404"</h1>
                <p class="mt-2 text-xl font-semibold text-gray-900">"Page not found"</p>
                <A
                    href=paths::HOME
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 transition-all"
                >
                    "Back to today's message"
                </A>
            </div>
        </AppShell>
    }
}
