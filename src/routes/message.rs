//! Public landing page: the message of the day with a refresh control, and a
//! form to submit a new message for review.

use crate::{
    app_lib::{api::FetchClient, config::AppConfig},
    components::{Alert, AlertKind, AppShell, Button},
    features::message::{
        types::SubmissionStatus,
        widget::{MessageView, MessageWidget, LOADING_TEXT},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use std::rc::Rc;

#[derive(Clone, Copy)]
struct MessageSignals {
    text: RwSignal<String>,
    submission: RwSignal<SubmissionStatus>,
}

impl MessageView for MessageSignals {
    fn show_message(&self, text: &str) {
        self.text.set(text.to_string());
    }

    fn show_submission(&self, status: SubmissionStatus) {
        self.submission.set(status);
    }
}

#[component]
pub fn MessagePage() -> impl IntoView {
    let signals = MessageSignals {
        text: RwSignal::new(LOADING_TEXT.to_string()),
        submission: RwSignal::new(SubmissionStatus::Idle),
    };
    let widget = MessageWidget::new(FetchClient::new(&AppConfig::load()), signals);
    let widget = StoredValue::new_local(Rc::new(widget));
    let (draft, set_draft) = signal(String::new());

    let refresh = move || {
        let widget = widget.get_value();
        spawn_local(async move {
            widget.fetch_message().await;
        });
    };
    refresh();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let widget = widget.get_value();
        let content = draft.get_untracked();
        spawn_local(async move {
            if widget.submit_message(&content).await {
                set_draft.set(String::new());
            }
        });
    };

    view! {
        <AppShell>
            <section class="max-w-xl mx-auto space-y-10 text-center">
                <div class="space-y-4">
                    <p id="message" class="text-3xl font-semibold text-gray-900">
                        {move || signals.text.get()}
                    </p>
                    <button
                        id="refresh-message"
                        type="button"
                        class="text-sm text-gray-500 hover:text-rose-600 transition-colors"
                        on:click=move |_| refresh()
                    >
                        "Another one"
                    </button>
                </div>
                <form class="space-y-3 text-left" on:submit=on_submit>
                    <label class="block text-sm font-medium text-gray-900" for="content">
                        "Share something kind"
                    </label>
                    <textarea
                        id="content"
                        name="content"
                        rows="3"
                        class="block w-full p-2.5 text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300 focus:ring-rose-500 focus:border-rose-500"
                        prop:value=move || draft.get()
                        on:input=move |event| set_draft.set(event_target_value(&event))
                    ></textarea>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || {
                            signals.submission.get() == SubmissionStatus::Sending
                        })
                    >
                        "Send"
                    </Button>
                    {move || {
                        let status = signals.submission.get();
                        status
                            .notice()
                            .map(|message| {
                                let kind = if status == SubmissionStatus::Sent {
                                    AlertKind::Success
                                } else {
                                    AlertKind::Error
                                };
                                view! { <Alert kind=kind message=message /> }
                            })
                    }}
                </form>
            </section>
        </AppShell>
    }
}
