use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;

use crate::types::SourceType;
use crate::view_model::{GridView, ToolCard, EMPTY_MESSAGE};

#[component]
pub fn ToolGrid(
    grid: Memo<GridView>,
    #[prop(into)] on_activate: UnsyncCallback<String>,
    #[prop(into)] on_retry: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <div class="min-h-[40vh]">
            {move || {
                let rendered: AnyView = match grid.get() {
                    GridView::Loading => {
                        view! { <div class="text-gray-500 py-4">"加载中..."</div> }.into_any()
                    }
                    GridView::Error(message) => {
                        view! {
                            <div class="text-center py-10 text-red-500 space-y-3">
                                <h3>{format!("⚠️ {message}")}</h3>
                                <button
                                    class="px-3 py-1 rounded border border-red-500 hover:bg-gray-800"
                                    on:click=move |_| on_retry.run(())
                                >
                                    "重试"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    GridView::Empty => {
                        view! { <div class="text-gray-500 py-10 text-center">{EMPTY_MESSAGE}</div> }
                            .into_any()
                    }
                    GridView::Cards(cards) => {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                                {cards
                                    .into_iter()
                                    .map(|card| render_tool_card(card, on_activate))
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                };

                rendered
            }}
        </div>
    }
}

fn render_tool_card(card: ToolCard, on_activate: UnsyncCallback<String>) -> AnyView {
    let ToolCard {
        key,
        name,
        description,
        category_name,
        date_label,
        source_type,
    } = card;
    let source_label = match source_type {
        SourceType::Preset => "预设",
        SourceType::Uploaded => "上传",
    };

    view! {
        <button
            class="text-left px-4 py-3 rounded bg-gray-900 hover:bg-gray-800 transition-colors space-y-2"
            on:click=move |_| on_activate.run(key.clone())
        >
            <h3 class="text-lg text-white truncate">{name}</h3>
            <p class="text-sm text-gray-400 line-clamp-2">{description}</p>
            <div class="flex items-center gap-2 text-xs text-gray-500">
                <span>{category_name}</span>
                <span class="px-1 rounded border border-gray-700">{source_label}</span>
                <span class="ml-auto">{date_label}</span>
            </div>
        </button>
    }
    .into_any()
}
