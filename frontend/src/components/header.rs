use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-4xl">"工具导航"</h1>
        </div>
    }
}
