use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div>
            <p class="text-sm text-gray-500">"输入关键词后稍候自动搜索，按回车立即搜索"</p>
        </div>
    }
}
