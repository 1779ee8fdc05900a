pub mod logic;

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;

use crate::components::category_list::CategoryList;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::pagination::PaginationBar;
use crate::components::search_bar::SearchBar;
use crate::components::tool_grid::ToolGrid;
use crate::config::ListingConfig;
pub use logic::ListingLogic;

/// 页面入口：左侧分类，右侧搜索、工具网格与分页。交互逻辑位于 `logic` 模块。
#[component]
pub fn ListingPage() -> impl IntoView {
    let config = use_context::<ListingConfig>().unwrap_or_default();
    let logic = ListingLogic::new(config);
    logic.init();

    let on_category = UnsyncCallback::new(move |filter| logic.select_category(filter));
    let on_input = UnsyncCallback::new(move |raw: String| logic.on_search_input(raw));
    let on_submit = UnsyncCallback::new(move |_: ()| logic.submit_search());
    let on_clear = UnsyncCallback::new(move |_: ()| logic.clear_search());
    let on_activate = UnsyncCallback::new(move |key: String| logic.activate_tool(&key));
    let on_retry = UnsyncCallback::new(move |_: ()| logic.retry());
    let on_page = UnsyncCallback::new(move |page: u32| logic.go_to_page(page));
    let on_prev = UnsyncCallback::new(move |_: ()| logic.prev_page());
    let on_next = UnsyncCallback::new(move |_: ()| logic.next_page());

    let ListingLogic {
        search_input,
        category_items,
        heading,
        total_items,
        grid,
        pagination,
        ..
    } = logic;

    view! {
        <div class="flex flex-col min-h-screen">
            <div class="px-4 pt-4 pb-2 flex-shrink-0 flex flex-wrap items-center justify-between gap-4">
                <Header/>
                <SearchBar
                    value=search_input
                    on_input=on_input
                    on_submit=on_submit
                    on_clear=on_clear
                />
            </div>
            <div class="grid grid-cols-10 flex-1 min-h-0 items-start gap-4 px-4">
                <aside class="col-span-2">
                    <CategoryList items=category_items on_select=on_category/>
                </aside>
                <main class="col-span-8 flex flex-col gap-4">
                    <div class="flex items-baseline gap-3">
                        <h2 class="text-2xl">{move || heading.get()}</h2>
                        <span class="text-sm text-gray-500">
                            {move || format!("{} 个工具", total_items.get())}
                        </span>
                    </div>
                    <ToolGrid grid=grid on_activate=on_activate on_retry=on_retry/>
                    <PaginationBar
                        pagination=pagination
                        on_page=on_page
                        on_prev=on_prev
                        on_next=on_next
                    />
                </main>
            </div>
            <div class="px-4 pb-4 flex-shrink-0">
                <Footer/>
            </div>
        </div>
    }
}
