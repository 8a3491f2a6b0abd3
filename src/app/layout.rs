use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::contact::ContactSection;
use super::footer::Footer;
use super::profile::ProfileHeader;
use super::sections::static_section;
use crate::contact::{Ticket, SUCCESS_DELAY_MS};
use crate::content::{get_portfolio, Portfolio};
use crate::sections::Section;
use crate::state::{Action, Followup, PageState};
use crate::variant::{Theme, Variant};

const TAB_ACTIVE: &str = "px-4 py-2 rounded-t-md border-b-2 border-cyan text-cyan font-bold";
const TAB_INACTIVE: &str =
    "px-4 py-2 rounded-t-md border-b-2 border-transparent text-muted hover:text-foreground";

#[component]
pub fn ClassicPage() -> impl IntoView {
    view! { <VariantPage variant=Variant::Classic /> }
}

#[component]
pub fn TabbedPage() -> impl IntoView {
    view! { <VariantPage variant=Variant::Tabbed /> }
}

#[component]
pub fn AnchoredPage() -> impl IntoView {
    view! { <VariantPage variant=Variant::Anchored /> }
}

#[component]
fn VariantPage(variant: Variant) -> impl IntoView {
    match get_portfolio(variant) {
        Ok(portfolio) => {
            let title = format!("{} - {}", portfolio.profile.name, variant.label());
            Either::Left(view! {
                <Title text=title />
                <PortfolioView variant portfolio />
            })
        }
        Err(e) => Either::Right(view! {
            <Title text="Content unavailable" />
            <div class="p-8 mx-auto max-w-2xl text-center">
                <h1 class="text-2xl font-bold mb-4">"Content unavailable"</h1>
                <pre class="whitespace-pre-wrap text-red-600">{e.to_string()}</pre>
            </div>
        }),
    }
}

fn open_mail(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        log::warn!("couldn't open mail client: {e:?}");
    }
}

/// One variant's page. Owns the page state and turns follow-ups from
/// [`PageState::apply`] into navigation and timer calls.
#[component]
pub fn PortfolioView(variant: Variant, portfolio: Arc<Portfolio>) -> impl IntoView {
    let theme = variant.theme();
    let state = RwSignal::new(PageState::new(
        &portfolio.sections,
        portfolio.profile.email.clone(),
    ));

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: Ticket| {
            state.update(|s| {
                s.apply(Action::Settle(ticket));
            });
        },
        SUCCESS_DELAY_MS as f64,
    );

    let stop_on_cleanup = stop.clone();
    let on_action = Callback::new(move |action: Action| {
        let followup = state
            .try_update(|s| s.apply(action))
            .unwrap_or(Followup::Nothing);
        match followup {
            Followup::Nothing => {}
            Followup::OpenMail { href, ticket } => {
                open_mail(&href);
                // restarting replaces a timer from an earlier submit
                start(ticket);
            }
            Followup::CancelTimer => stop(),
        }
    });

    on_cleanup(move || {
        if let Some(Followup::CancelTimer) =
            state.try_update_untracked(|s| s.apply(Action::Teardown))
        {
            stop_on_cleanup();
        }
    });

    let body = section_body(portfolio.clone(), theme, state, on_action);

    let content = match variant {
        Variant::Classic => view! { <Stacked sections=portfolio.sections.clone() body /> }.into_any(),
        Variant::Anchored => view! {
            <AnchorNav sections=portfolio.sections.clone() theme />
            <Stacked sections=portfolio.sections.clone() body />
        }
        .into_any(),
        Variant::Tabbed => view! {
            <Tabs sections=portfolio.sections.clone() state on_action body />
        }
        .into_any(),
    };

    view! {
        <div class=theme.page>
            <ProfileHeader profile=portfolio.profile.clone() theme />
            {content}
            <Footer name=portfolio.profile.name.clone() current=variant theme />
        </div>
    }
}

fn section_body(
    portfolio: Arc<Portfolio>,
    theme: &'static Theme,
    state: RwSignal<PageState>,
    on_action: Callback<Action>,
) -> impl Fn(Section) -> AnyView + Send + Sync + 'static {
    move |section: Section| {
        static_section(&portfolio, section, theme).unwrap_or_else(|| {
            view! { <ContactSection state on_action theme /> }.into_any()
        })
    }
}

#[component]
fn Stacked<F>(sections: Vec<Section>, body: F) -> impl IntoView
where
    F: Fn(Section) -> AnyView + 'static,
{
    view! { <div>{sections.into_iter().map(&body).collect_view()}</div> }
}

#[component]
fn AnchorNav(sections: Vec<Section>, theme: &'static Theme) -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-10 -mx-6 mb-8 px-6 py-3 bg-slate-50/90 backdrop-blur border-b border-slate-200">
            <ul class="flex flex-wrap gap-4 justify-center">
                {sections
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li>
                                <a href=s.href() class=theme.link>
                                    {s.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn Tabs<F>(
    sections: Vec<Section>,
    state: RwSignal<PageState>,
    on_action: Callback<Action>,
    body: F,
) -> impl IntoView
where
    F: Fn(Section) -> AnyView + Send + Sync + 'static,
{
    // Only tab changes re-render the panel, not edits to the contact draft
    let current = Memo::new(move |_| state.with(|s| s.view.current()));

    view! {
        <nav class="flex flex-wrap gap-2 border-b border-muted/30 mb-6" role="tablist">
            {sections
                .into_iter()
                .map(|s| {
                    let is_active = move || current.get() == s;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || if is_active() { TAB_ACTIVE } else { TAB_INACTIVE }
                            on:click=move |_| on_action.run(Action::SelectTab(s))
                        >
                            {s.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
        <div role="tabpanel">{move || body(current.get())}</div>
    }
}
