use crate::routes::routes::AppRoutes;
use crate::shared::page_data::PageConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page configuration rendered by the server into #initial_page_data.
    provide_context(PageConfig::load());

    view! {
        <AppRoutes />
    }
}
