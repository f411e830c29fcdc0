//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use pokechat::AssistantConfig;

use crate::net::api::BrowserAssistant;
use crate::pages::home::{HomePage, PAGE_TITLE};

/// Root application component.
///
/// Provides the assistant transport for every chat panel below it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BrowserAssistant::new(&AssistantConfig::default()));

    view! {
        <Title text=PAGE_TITLE/>
        <HomePage/>
    }
}
