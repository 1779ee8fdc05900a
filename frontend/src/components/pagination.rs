use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;

use crate::view_model::{PageButton, PaginationView};

/// 分页栏：只有一页或没有结果时不渲染
#[component]
pub fn PaginationBar(
    pagination: Memo<Option<PaginationView>>,
    #[prop(into)] on_page: UnsyncCallback<u32>,
    #[prop(into)] on_prev: UnsyncCallback<()>,
    #[prop(into)] on_next: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <nav>
            {move || {
                pagination
                    .get()
                    .map(|bar| {
                        let PaginationView { info, prev_enabled, next_enabled, buttons } = bar;
                        view! {
                            <div class="flex flex-wrap items-center justify-between gap-3 text-sm">
                                <span class="text-gray-500">{info}</span>
                                <div class="flex items-center gap-1">
                                    <button
                                        class="px-2 py-1 rounded border border-gray-700 disabled:opacity-40 disabled:cursor-not-allowed"
                                        disabled=!prev_enabled
                                        on:click=move |_| on_prev.run(())
                                    >
                                        "上一页"
                                    </button>
                                    {buttons
                                        .into_iter()
                                        .map(|button| render_page_button(button, on_page))
                                        .collect_view()}
                                    <button
                                        class="px-2 py-1 rounded border border-gray-700 disabled:opacity-40 disabled:cursor-not-allowed"
                                        disabled=!next_enabled
                                        on:click=move |_| on_next.run(())
                                    >
                                        "下一页"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

fn render_page_button(button: PageButton, on_page: UnsyncCallback<u32>) -> AnyView {
    match button {
        PageButton::Number { page, active } => {
            let class = if active {
                "px-2 py-1 rounded text-white bg-gray-800"
            } else {
                "px-2 py-1 rounded text-gray-400 hover:text-white hover:bg-gray-800"
            };
            view! {
                <button class=class on:click=move |_| on_page.run(page)>
                    {page}
                </button>
            }
            .into_any()
        }
        PageButton::Ellipsis { .. } => view! { <span class="px-1 text-gray-500">"..."</span> }.into_any(),
    }
}
