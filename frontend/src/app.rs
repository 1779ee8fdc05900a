use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ListingConfig;
use crate::pages::listing::ListingPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ListingConfig::from_build_env());

    view! {
        <Router>
            <Routes fallback=|| "页面不存在">
                <Route path=path!("/") view=ListingPage/>
            </Routes>
        </Router>
    }
}
