mod contact;
mod footer;
mod layout;
mod profile;
mod sections;

use layout::{AnchoredPage, ClassicPage, TabbedPage};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <main class="flex flex-col min-h-screen w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=ClassicPage />
                    <Route path=path!("/tabs") view=TabbedPage />
                    <Route path=path!("/sections") view=AnchoredPage />
                </Routes>
            </main>
        </Router>
    }
}
