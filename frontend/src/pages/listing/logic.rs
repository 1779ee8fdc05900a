use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal};

use crate::api::{get_categories, get_tools};
use crate::config::ListingConfig;
use crate::debounce::{BrowserScheduler, Debouncer};
use crate::error::{ApiError, CATEGORIES_FAILED_MESSAGE, TOOLS_FAILED_MESSAGE};
use crate::state::{ApplyOutcome, CategoryFilter, ListingState};
use crate::view_model::{
    activation_for, category_heading, category_items, grid_view, pagination_view, CategoryItem,
    GridView, PaginationView, ToolActivation,
};

/// 封装列表页所需的全部信号、派生视图模型与操作方法。
///
/// 所有可变状态集中在 `state` 一个信号中，交互方法先同步修改状态，
/// 再按需发起请求。每次请求携带序号，过期响应一律丢弃。
#[derive(Clone, Copy)]
pub struct ListingLogic {
    pub state: RwSignal<ListingState>,
    pub search_input: RwSignal<String>,

    pub category_items: Memo<Vec<CategoryItem>>,
    pub heading: Memo<String>,
    pub total_items: Memo<u64>,
    pub grid: Memo<GridView>,
    pub pagination: Memo<Option<PaginationView>>,

    config: StoredValue<ListingConfig>,
    debouncer: StoredValue<Debouncer<BrowserScheduler>, LocalStorage>,
    in_flight: StoredValue<Option<AbortController>, LocalStorage>,
}

impl ListingLogic {
    pub fn new(config: ListingConfig) -> Self {
        let state = RwSignal::new(ListingState::new(config.per_page));
        let search_input = RwSignal::new(String::new());

        let category_items = Memo::new(move |_| {
            state.with(|s| category_items(&s.categories, s.view.category))
        });
        let heading = Memo::new(move |_| {
            state.with(|s| category_heading(&s.categories, s.view.category))
        });
        let total_items = Memo::new(move |_| state.with(|s| s.view.total_items));
        let grid = Memo::new(move |_| {
            let today = Local::now().date_naive();
            state.with(|s| grid_view(s, today))
        });
        let max_visible_pages = config.max_visible_pages;
        let pagination = Memo::new(move |_| {
            state.with(|s| pagination_view(&s.view, s.tools.len(), max_visible_pages))
        });

        let debouncer = Debouncer::new(BrowserScheduler, config.search_debounce);

        ListingLogic {
            state,
            search_input,
            category_items,
            heading,
            total_items,
            grid,
            pagination,
            config: StoredValue::new(config),
            debouncer: StoredValue::new_local(debouncer),
            in_flight: StoredValue::new_local(None),
        }
    }

    /// 初始载入：先加载分类，成功后再加载工具。分类已加载或正在加载时不做任何事
    pub fn init(self) {
        if !self.mutate(ListingState::begin_categories) {
            return;
        }
        spawn_local(async move {
            let config = self.config.get_value();
            match get_categories(&config).await {
                Ok(categories) => {
                    web_sys::console::log_2(
                        &"[分类] 加载完成".into(),
                        &JsValue::from(categories.len() as u32),
                    );
                    self.state.update(|s| s.apply_categories(categories));
                    self.load_tools();
                }
                Err(err) => {
                    log_api_error("[分类] 加载失败", &err);
                    self.state.update(|s| s.fail_categories(CATEGORIES_FAILED_MESSAGE));
                }
            }
        });
    }

    /// 错误提示中的重试：分类未就绪时重新初始化
    pub fn retry(self) {
        if self.state.with_untracked(ListingState::categories_ready) {
            self.load_tools();
        } else {
            self.init();
        }
    }

    pub fn load_tools(self) {
        let Some(request) = self.state.try_update(ListingState::begin_request).flatten() else {
            // 分类尚未就绪，交互只改视图状态，由初始化完成后统一加载
            self.init();
            return;
        };
        let abort = self.restart_abort();
        let config = self.config.get_value();

        spawn_local(async move {
            let result = get_tools(&config, &request.query, abort.as_ref()).await;
            let outcome = match result {
                Ok(response) => self
                    .state
                    .try_update(|s| s.apply_tools(request.token, response)),
                Err(err) => {
                    let shown = self
                        .state
                        .try_update(|s| s.apply_tools_failure(request.token, TOOLS_FAILED_MESSAGE))
                        .unwrap_or(false);
                    if shown {
                        log_api_error("[工具] 加载失败", &err);
                    }
                    return;
                }
            };

            match outcome {
                Some(ApplyOutcome::Clamped) => {
                    web_sys::console::log_1(&"[工具] 页码越界，重新加载".into());
                    self.load_tools();
                }
                Some(ApplyOutcome::Stale) => {
                    web_sys::console::log_1(&"[工具] 丢弃过期响应".into());
                }
                Some(ApplyOutcome::Applied) | None => {}
            }
        });
    }

    pub fn select_category(self, filter: CategoryFilter) {
        if self.mutate(|s| s.view.select_category(filter)) {
            self.load_tools();
        }
    }

    /// 输入框内容变化：防抖后再搜索
    pub fn on_search_input(self, raw: String) {
        self.search_input.set(raw.clone());
        self.debouncer
            .with_value(|debouncer| debouncer.call(move || self.apply_search(&raw)));
    }

    /// 点击搜索或回车：跳过防抖立即搜索
    pub fn submit_search(self) {
        self.debouncer.with_value(|debouncer| {
            debouncer.cancel();
        });
        let input = self.search_input.get_untracked();
        self.apply_search(&input);
    }

    pub fn clear_search(self) {
        self.debouncer.with_value(|debouncer| {
            debouncer.cancel();
        });
        self.search_input.set(String::new());
        self.state.update(|s| s.view.clear_search());
        self.load_tools();
    }

    pub fn go_to_page(self, page: u32) {
        if self.mutate(|s| s.view.go_to_page(page)) {
            self.load_tools();
        }
    }

    pub fn next_page(self) {
        if self.mutate(|s| s.view.next_page()) {
            self.load_tools();
        }
    }

    pub fn prev_page(self) {
        if self.mutate(|s| s.view.prev_page()) {
            self.load_tools();
        }
    }

    /// 上传组件在新标签页打开，预设工具只弹出说明
    pub fn activate_tool(self, key: &str) {
        let tool = self
            .state
            .with_untracked(|s| s.tools.iter().find(|tool| tool.key() == key).cloned());
        let (Some(tool), Some(window)) = (tool, web_sys::window()) else {
            return;
        };

        match activation_for(&tool) {
            ToolActivation::Open { path } => {
                if let Err(err) = window.open_with_url_and_target(&path, "_blank") {
                    web_sys::console::log_2(&"[工具] 打开失败".into(), &err);
                }
            }
            ToolActivation::Notice { message } => {
                if let Err(err) = window.alert_with_message(&message) {
                    web_sys::console::log_2(&"[工具] 提示失败".into(), &err);
                }
            }
        }
    }

    fn apply_search(self, input: &str) {
        if self.mutate(|s| s.view.set_search(input)) {
            web_sys::console::log_2(&"[搜索]".into(), &JsValue::from_str(input.trim()));
            self.load_tools();
        }
    }

    fn mutate(self, f: impl FnOnce(&mut ListingState) -> bool) -> bool {
        self.state.try_update(f).unwrap_or(false)
    }

    fn restart_abort(self) -> Option<AbortSignal> {
        self.in_flight
            .try_update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.abort();
                }
                let controller = AbortController::new().ok()?;
                let signal = controller.signal();
                *slot = Some(controller);
                Some(signal)
            })
            .flatten()
    }
}

fn log_api_error(label: &str, err: &ApiError) {
    web_sys::console::error_2(&JsValue::from_str(label), &JsValue::from_str(&err.to_string()));
}
