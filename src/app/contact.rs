use leptos::prelude::*;

use super::sections::SectionFrame;
use crate::contact::{Field, FormStatus};
use crate::sections::Section;
use crate::state::{Action, PageState};
use crate::variant::Theme;

#[component]
pub fn ContactSection(
    state: RwSignal<PageState>,
    on_action: Callback<Action>,
    theme: &'static Theme,
) -> impl IntoView {
    let recipient = state.with_untracked(|s| s.contact.recipient().to_string());
    let status = Memo::new(move |_| state.with(|s| s.contact.status()));

    view! {
        <SectionFrame section=Section::Contact theme>
            <p class=format!("{} mb-4", theme.muted)>
                "Have a question or an opportunity? Send me a message and I'll get back to you."
            </p>
            <form
                class="space-y-3 max-w-xl"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_action.run(Action::Submit);
                }
            >
                <DraftInput field=Field::Name label="Name" state on_action theme />
                <DraftInput field=Field::Email label="Email" state on_action theme />
                <DraftInput field=Field::Message label="Message" state on_action theme />
                <button type="submit" class=theme.button>
                    "Send Message"
                </button>
            </form>
            {move || {
                let status = status.get();
                (status != FormStatus::Empty)
                    .then(|| {
                        let class = if status.is_error() { "mt-3 text-red-600" } else { "mt-3 text-green-600" };
                        view! {
                            <p class=class role="status">
                                {status.message()}
                            </p>
                        }
                    })
            }}
            <p class=format!("{} text-sm mt-4", theme.muted)>
                "Or email me directly at "
                <a href=format!("mailto:{recipient}") class=theme.link>
                    {recipient.clone()}
                </a>
            </p>
        </SectionFrame>
    }
}

#[component]
fn DraftInput(
    field: Field,
    label: &'static str,
    state: RwSignal<PageState>,
    on_action: Callback<Action>,
    theme: &'static Theme,
) -> impl IntoView {
    let id = format!("contact_{}", label.to_lowercase());
    let value = move || state.with(|s| s.contact.draft().get(field).to_string());

    let input = match field {
        Field::Message => view! {
            <textarea
                id=id.clone()
                name="message"
                rows="5"
                class=theme.input
                placeholder="Your message"
                prop:value=value
                on:input=move |ev| on_action.run(Action::Edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        Field::Email => view! {
            <input
                id=id.clone()
                type="email"
                name="email"
                class=theme.input
                placeholder="you@example.com"
                prop:value=value
                on:input=move |ev| on_action.run(Action::Edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        Field::Name => view! {
            <input
                id=id.clone()
                type="text"
                name="name"
                class=theme.input
                placeholder="Your name"
                prop:value=value
                on:input=move |ev| on_action.run(Action::Edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-1">
                {label}
            </label>
            {input}
        </div>
    }
}
