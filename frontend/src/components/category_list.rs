use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;

use crate::state::CategoryFilter;
use crate::view_model::CategoryItem;

/// 分类栏：第一项固定为“全部”，当前分类高亮
#[component]
pub fn CategoryList(
    items: Memo<Vec<CategoryItem>>,
    #[prop(into)] on_select: UnsyncCallback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <ul class="text-xl text-gray-500 flex flex-col gap-1">
            <For
                each=move || items.get()
                key=|item| (item.filter, item.active)
                children=move |item: CategoryItem| {
                    let filter = item.filter;
                    let base = "w-full text-left truncate px-2 py-1 rounded";
                    let class = if item.active {
                        format!("{base} text-white bg-gray-800")
                    } else {
                        format!("{base} text-gray-400 hover:text-white hover:bg-gray-800")
                    };

                    view! {
                        <li class="w-full min-w-0">
                            <button class=class on:click=move |_| on_select.run(filter)>
                                {item.label}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
