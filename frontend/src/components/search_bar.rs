use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;

/// 搜索框
///
/// # 参数
/// - `value`: 输入框当前内容
/// - `on_input`: 每次输入时触发（防抖由调用方负责）
/// - `on_submit`: 点击搜索按钮或按下回车
/// - `on_clear`: 点击清除按钮，仅在输入非空白时显示
#[component]
pub fn SearchBar(
    value: RwSignal<String>,
    #[prop(into)] on_input: UnsyncCallback<String>,
    #[prop(into)] on_submit: UnsyncCallback<()>,
    #[prop(into)] on_clear: UnsyncCallback<()>,
) -> impl IntoView {
    let show_clear = Memo::new(move |_| value.with(|v| !v.trim().is_empty()));

    view! {
        <div class="flex items-center gap-2">
            <div class="relative">
                <input
                    type="text"
                    placeholder="搜索工具名称或描述"
                    class="w-72 px-3 py-2 rounded border border-gray-700 bg-transparent"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if submits_search(&ev.key(), ev.is_composing()) {
                            on_submit.run(());
                        }
                    }
                />
                <Show when=move || show_clear.get()>
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 text-gray-500 hover:text-white"
                        on:click=move |_| on_clear.run(())
                    >
                        "×"
                    </button>
                </Show>
            </div>
            <button
                class="px-3 py-2 rounded border border-gray-700 hover:bg-gray-800"
                on:click=move |_| on_submit.run(())
            >
                "搜索"
            </button>
        </div>
    }
}

/// 回车提交搜索；输入法组字时的回车只用于确认候选词
fn submits_search(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_during_composition_does_not_submit() {
        assert!(submits_search("Enter", false));
        assert!(!submits_search("Enter", true));
        assert!(!submits_search("a", false));
    }
}
