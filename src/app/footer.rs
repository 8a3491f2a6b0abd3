use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::variant::{Theme, Variant};

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

#[component]
pub fn Footer(name: String, current: Variant, theme: &'static Theme) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {name}"),
        None => format!("© {name}"),
    };
    view! {
        <footer class=format!(
            "mt-12 pt-6 text-center text-sm border-t border-gray-200 {}",
            theme.muted,
        )>
            <div>{copyright}</div>
            <nav class="mt-2 space-x-3" aria-label="Layouts">
                {Variant::ALL
                    .into_iter()
                    .map(|v| {
                        let class = if v == current {
                            "font-bold underline".to_string()
                        } else {
                            theme.link.to_string()
                        };
                        view! {
                            <a href=v.path() class=class>
                                {v.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </footer>
    }
}
