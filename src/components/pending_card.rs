//! One card in the moderation queue. The approve/reject buttons are bound to
//! this card's id through `on:click` handlers, not global function names.

use crate::features::moderation::{types::Decision, view::MessageCard};
use leptos::prelude::*;

#[component]
pub fn PendingCard(card: MessageCard, on_decide: Callback<(i64, Decision)>) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="message-card rounded-lg border border-gray-200 bg-white p-4 shadow-sm" id=card.element_id>
            // Already escaped by `MessageCard`.
            <div class="message-content text-gray-900 whitespace-pre-wrap" inner_html=card.content_html></div>
            <div class="message-date mt-2 text-xs text-gray-500">{card.created_label}</div>
            <div class="message-actions mt-3 flex gap-2">
                <button
                    type="button"
                    class="btn-approve px-3 py-1.5 text-sm font-medium text-white bg-emerald-600 rounded-lg hover:bg-emerald-700"
                    on:click=move |_| on_decide.run((id, Decision::Approve))
                >
                    "✓ Approve"
                </button>
                <button
                    type="button"
                    class="btn-reject px-3 py-1.5 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700"
                    on:click=move |_| on_decide.run((id, Decision::Reject))
                >
                    "✗ Reject"
                </button>
            </div>
        </div>
    }
}
