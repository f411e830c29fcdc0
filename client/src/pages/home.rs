//! Landing page: title, description and the assistant chat panel.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

pub const PAGE_TITLE: &str = "Pokemon AI Assistant";
pub const PAGE_DESCRIPTION: &str = "Ask me anything about Pokemon!";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-page__container">
                <header class="home-page__header">
                    <h1 class="home-page__title">{PAGE_TITLE}</h1>
                    <p class="home-page__description">{PAGE_DESCRIPTION}</p>
                </header>
                <ChatPanel/>
            </div>
        </div>
    }
}
