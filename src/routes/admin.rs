//! Moderation panel. The login form and the admin container are toggled from
//! the session controller's panel state; the controller itself lives in a
//! local `StoredValue` so event handlers can reach it without globals.

use crate::{
    app_lib::{api::FetchClient, config::AppConfig},
    components::{Alert, AlertKind, AppShell, Button, PendingCard, Spinner},
    features::moderation::{
        session::{AdminPanel, AdminView, SessionController},
        types::Decision,
        view::ListView,
    },
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use std::rc::Rc;

type AdminSession = SessionController<FetchClient, RwSignal<AdminPanel>>;

impl AdminView for RwSignal<AdminPanel> {
    fn show(&self, panel: &AdminPanel) {
        self.set(panel.clone());
    }
}

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-rose-500 focus:border-rose-500 block w-full p-2.5";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900";

#[component]
pub fn AdminPage() -> impl IntoView {
    let panel = RwSignal::new(AdminPanel::default());
    let session: AdminSession = SessionController::new(FetchClient::new(&AppConfig::load()), panel);
    let session = StoredValue::new_local(Rc::new(session));
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let session = session.get_value();
        // Disables the login control before the probe is sent.
        let Some(attempt) =
            session.begin_login(&username.get_untracked(), &password.get_untracked())
        else {
            return;
        };
        spawn_local(async move { session.finish_login(attempt).await });
    };

    let refresh = move |_: MouseEvent| {
        let session = session.get_value();
        spawn_local(async move { session.load_pending_messages().await });
    };

    let logout = move |_: MouseEvent| {
        set_password.set(String::new());
        session.get_value().logout();
    };

    let on_decide = Callback::new(move |(id, decision): (i64, Decision)| {
        let session = session.get_value();
        spawn_local(async move {
            match decision {
                Decision::Approve => session.approve_message(id).await,
                Decision::Reject => session.reject_message(id).await,
            }
        });
    });

    view! {
        <AppShell>
            <section class="max-w-2xl mx-auto space-y-6">
                <Show when=move || panel.with(AdminPanel::login_form_visible)>
                    <form id="login-form" class="max-w-sm mx-auto" on:submit=on_submit>
                        <div class="mb-5">
                            <label class=LABEL_CLASS for="username">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                class=INPUT_CLASS
                                autocomplete="username"
                                required
                                on:input=move |event| set_username.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class=LABEL_CLASS for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                class=INPUT_CLASS
                                autocomplete="current-password"
                                required
                                prop:value=move || password.get()
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                        </div>
                        <Button
                            id="login-btn"
                            button_type="submit"
                            disabled=Signal::derive(move || panel.with(AdminPanel::login_disabled))
                        >
                            {move || panel.with(AdminPanel::login_label)}
                        </Button>
                        {move || {
                            panel
                                .with(|panel| panel.login_error.clone())
                                .map(|message| {
                                    view! {
                                        <div id="login-error" class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </Show>
                <Show when=move || panel.with(AdminPanel::admin_visible)>
                    <div id="admin-app" class="space-y-4">
                        <div class="flex items-center justify-between">
                            <h1 class="text-2xl font-semibold text-gray-900">"Pending messages"</h1>
                            <div class="flex gap-2">
                                <button
                                    id="refresh"
                                    type="button"
                                    class="p-2 text-gray-500 hover:text-rose-600 transition-colors"
                                    on:click=refresh
                                >
                                    "Refresh"
                                </button>
                                <button
                                    id="logout"
                                    type="button"
                                    class="p-2 text-gray-500 hover:text-rose-600 transition-colors"
                                    on:click=logout
                                >
                                    "Log out"
                                </button>
                            </div>
                        </div>
                        {move || {
                            panel
                                .with(|panel| panel.action_error.clone())
                                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                        }}
                        <div id="pending-list" class="space-y-3">
                            {move || pending_list(panel.with(|panel| panel.pending.clone()), on_decide)}
                        </div>
                    </div>
                </Show>
            </section>
        </AppShell>
    }
}

fn pending_list(pending: ListView, on_decide: Callback<(i64, Decision)>) -> AnyView {
    if let Some((class, text)) = pending.notice() {
        return view! { <div class=class>{text}</div> }.into_any();
    }

    match pending {
        ListView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <PendingCard card=card on_decide=on_decide /> })
            .collect_view()
            .into_any(),
        ListView::Idle | ListView::Empty | ListView::Failed => view! { <Spinner /> }.into_any(),
    }
}
