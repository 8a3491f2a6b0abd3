use leptos::prelude::*;

use crate::content::Profile;
use crate::variant::Theme;

#[component]
pub fn ProfileHeader(profile: Profile, theme: &'static Theme) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    view! {
        <header class="mb-10 text-center">
            <img
                src=profile.avatar
                alt=profile.name.clone()
                class="mx-auto mb-4 rounded-full border-2 border-gray-300 w-28 h-28 object-cover"
            />
            <h1 class="text-4xl font-bold mb-2">{profile.name}</h1>
            <div class="text-lg font-medium mb-2">{profile.headline}</div>
            <div class=format!("{} max-w-2xl mx-auto mb-4", theme.muted)>{profile.tagline}</div>
            <div class="space-x-4 text-sm">
                <a href=mailto class=theme.link>
                    {profile.email}
                </a>
                <span class=theme.muted>"|"</span>
                <a href=profile.github class=theme.link target="_blank" rel="noopener noreferrer">
                    <i class="devicon-github-plain mr-1" />
                    "GitHub"
                </a>
                <span class=theme.muted>"|"</span>
                <a
                    href=profile.linkedin
                    class=theme.link
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="devicon-linkedin-plain mr-1" />
                    "LinkedIn"
                </a>
            </div>
        </header>
    }
}
