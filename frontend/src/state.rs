use crate::api::ToolsQuery;
use crate::types::{Category, Pagination, Tool, ToolsResponse};

/// 服务端约定：分类 id 为 0 表示全部
pub const ALL_CATEGORY_ID: i64 = 0;

/// 当前的分类筛选
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(i64),
}

impl CategoryFilter {
    pub fn from_id(id: i64) -> Self {
        if id == ALL_CATEGORY_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    pub fn id(self) -> i64 {
        match self {
            CategoryFilter::All => ALL_CATEGORY_ID,
            CategoryFilter::Only(id) => id,
        }
    }
}

/// 驱动下一次请求参数的视图状态，只由用户交互修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub search_term: String,
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl ViewState {
    pub fn new(page_size: u32) -> Self {
        Self {
            category: CategoryFilter::All,
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 1,
        }
    }

    /// 已是当前分类时返回 `false`
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.current_page = 1;
        true
    }

    /// 去除首尾空白；关键词未变化时返回 `false`
    pub fn set_search(&mut self, input: &str) -> bool {
        let term = input.trim();
        if self.search_term == term {
            return false;
        }
        self.search_term = term.to_string();
        self.current_page = 1;
        true
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == self.current_page || page < 1 || page > self.total_pages {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn query(&self) -> ToolsQuery {
        ToolsQuery {
            category_id: match self.category {
                CategoryFilter::All => None,
                CategoryFilter::Only(id) => Some(id),
            },
            search: if self.search_term.is_empty() {
                None
            } else {
                Some(self.search_term.clone())
            },
            page: self.current_page,
            per_page: self.page_size,
        }
    }

    /// 用服务端分页信息覆盖总数与页码。页码超出 `[1, pages]` 被修正时返回 `true`
    pub fn apply_pagination(&mut self, pagination: &Pagination) -> bool {
        self.total_items = pagination.total;
        self.total_pages = pagination.pages;

        let last = pagination.pages.max(1);
        let page = pagination.page.clamp(1, last);
        self.current_page = page;
        page != pagination.page
    }
}

/// 工具列表区域的加载状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// 每次发起工具请求时分配的序号，只有最新序号的响应会被采用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsRequest {
    pub token: RequestToken,
    pub query: ToolsQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// 已采用，但页码被修正，需要重新加载
    Clamped,
    Stale,
}

/// 列表页的完整状态，由一个信号持有
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub view: ViewState,
    pub categories: Vec<Category>,
    pub tools: Vec<Tool>,
    pub status: LoadStatus,
    categories_ready: bool,
    categories_pending: bool,
    latest_request: u64,
}

impl ListingState {
    pub fn new(page_size: u32) -> Self {
        Self {
            view: ViewState::new(page_size),
            categories: Vec::new(),
            tools: Vec::new(),
            status: LoadStatus::Loading,
            categories_ready: false,
            categories_pending: false,
            latest_request: 0,
        }
    }

    /// 开始加载分类。已加载或正在加载时返回 `false`
    pub fn begin_categories(&mut self) -> bool {
        if self.categories_ready || self.categories_pending {
            return false;
        }
        self.categories_pending = true;
        self.status = LoadStatus::Loading;
        true
    }

    pub fn apply_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.categories_pending = false;
        self.categories_ready = true;
    }

    pub fn fail_categories(&mut self, message: impl Into<String>) {
        self.categories_pending = false;
        self.fail(message);
    }

    pub fn categories_ready(&self) -> bool {
        self.categories_ready
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    /// 分类未加载成功前不发起工具请求，返回 `None`
    pub fn begin_request(&mut self) -> Option<ToolsRequest> {
        if !self.categories_ready {
            return None;
        }
        self.latest_request += 1;
        self.status = LoadStatus::Loading;
        Some(ToolsRequest {
            token: RequestToken(self.latest_request),
            query: self.view.query(),
        })
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest_request
    }

    pub fn apply_tools(&mut self, token: RequestToken, response: ToolsResponse) -> ApplyOutcome {
        if !self.is_latest(token) {
            return ApplyOutcome::Stale;
        }

        let clamped = self.view.apply_pagination(&response.pagination);
        self.tools = response.tools;
        self.status = LoadStatus::Ready;

        if clamped {
            ApplyOutcome::Clamped
        } else {
            ApplyOutcome::Applied
        }
    }

    /// 请求已过期时返回 `false`
    pub fn apply_tools_failure(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.fail(message);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceType;

    fn tool(id: i64) -> Tool {
        Tool {
            id,
            name: format!("tool-{id}"),
            description: String::new(),
            category_name: "图片工具".into(),
            url: "#".into(),
            source_type: SourceType::Preset,
            publish_date: "2024-01-01".into(),
        }
    }

    fn response(page: u32, pages: u32, total: u64, ids: &[i64]) -> ToolsResponse {
        ToolsResponse {
            tools: ids.iter().copied().map(tool).collect(),
            pagination: Pagination {
                page,
                total,
                pages,
                per_page: None,
                has_prev: None,
                has_next: None,
            },
        }
    }

    fn ready_state() -> ListingState {
        let mut state = ListingState::new(10);
        assert!(state.begin_categories());
        state.apply_categories(Vec::new());
        state
    }

    fn begin(state: &mut ListingState) -> ToolsRequest {
        state.begin_request().expect("categories are loaded")
    }

    #[test]
    fn all_category_sends_no_filter() {
        let mut view = ViewState::new(10);
        assert_eq!(view.query().category_id, None);

        assert!(view.select_category(CategoryFilter::Only(3)));
        assert_eq!(view.query().category_id, Some(3));

        assert!(view.select_category(CategoryFilter::from_id(ALL_CATEGORY_ID)));
        assert_eq!(view.query().category_id, None);
    }

    #[test]
    fn empty_or_blank_search_sends_no_parameter() {
        let mut view = ViewState::new(10);
        assert_eq!(view.query().search, None);

        assert!(!view.set_search("   "));
        assert_eq!(view.query().search, None);

        assert!(view.set_search(" pdf "));
        assert_eq!(view.query().search.as_deref(), Some("pdf"));

        view.clear_search();
        assert_eq!(view.query().search, None);
    }

    #[test]
    fn interactions_reset_page() {
        let mut view = ViewState::new(10);
        view.total_pages = 5;
        assert!(view.go_to_page(4));

        assert!(view.set_search("图片"));
        assert_eq!(view.current_page, 1);

        assert!(view.go_to_page(3));
        assert!(view.select_category(CategoryFilter::Only(2)));
        assert_eq!(view.current_page, 1);

        assert!(!view.select_category(CategoryFilter::Only(2)));
        assert!(!view.set_search("图片"));
    }

    #[test]
    fn page_navigation_respects_bounds() {
        let mut view = ViewState::new(10);
        view.total_pages = 3;

        assert!(!view.prev_page());
        assert!(view.next_page());
        assert!(view.next_page());
        assert_eq!(view.current_page, 3);
        assert!(!view.next_page());

        assert!(!view.go_to_page(3));
        assert!(!view.go_to_page(0));
        assert!(!view.go_to_page(4));
        assert!(view.go_to_page(1));
        assert_eq!(view.query().page, 1);
    }

    #[test]
    fn response_overwrites_view_state() {
        let mut state = ready_state();
        state.view.total_pages = 9;
        state.view.go_to_page(3);
        let request = begin(&mut state);
        assert!(state.is_loading());
        assert_eq!(request.query.page, 3);

        let outcome = state.apply_tools(request.token, response(3, 3, 23, &[21, 22, 23]));
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(state.view.total_items, 23);
        assert_eq!(state.view.total_pages, 3);
        assert_eq!(state.view.current_page, 3);
        assert_eq!(state.tools.len(), 3);
        assert_eq!(state.status, LoadStatus::Ready);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = ready_state();

        state.view.select_category(CategoryFilter::Only(2));
        let older = begin(&mut state);
        state.view.set_search("pdf");
        let newer = begin(&mut state);

        let outcome = state.apply_tools(newer.token, response(1, 1, 1, &[7]));
        assert_eq!(outcome, ApplyOutcome::Applied);

        let snapshot = state.clone();
        assert_eq!(
            state.apply_tools(older.token, response(1, 2, 15, &[1, 2, 3])),
            ApplyOutcome::Stale
        );
        assert!(!state.apply_tools_failure(older.token, "boom"));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn failure_of_latest_request_is_shown() {
        let mut state = ready_state();
        let request = begin(&mut state);
        assert!(state.apply_tools_failure(request.token, "加载工具失败，请重试"));
        assert_eq!(
            state.status,
            LoadStatus::Failed("加载工具失败，请重试".into())
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let mut state = ready_state();
        let request = begin(&mut state);

        let outcome = state.apply_tools(request.token, response(5, 2, 12, &[]));
        assert_eq!(outcome, ApplyOutcome::Clamped);
        assert_eq!(state.view.current_page, 2);

        let request = begin(&mut state);
        let outcome = state.apply_tools(request.token, response(1, 0, 0, &[]));
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(state.view.current_page, 1);
        assert_eq!(state.view.total_pages, 0);
    }

    #[test]
    fn failed_categories_block_tool_requests() {
        let mut state = ListingState::new(10);
        assert!(state.begin_categories());
        state.fail_categories(crate::error::CATEGORIES_FAILED_MESSAGE);

        assert!(state.view.set_search("pdf"));
        assert!(state.begin_request().is_none());
        state.view.select_category(CategoryFilter::Only(2));
        assert!(state.begin_request().is_none());

        assert!(!state.categories_ready());
        assert_eq!(
            state.status,
            LoadStatus::Failed(crate::error::CATEGORIES_FAILED_MESSAGE.into())
        );
    }

    #[test]
    fn category_reload_shows_loading_once() {
        let mut state = ListingState::new(10);
        assert!(state.begin_categories());
        state.fail_categories(crate::error::CATEGORIES_FAILED_MESSAGE);

        assert!(state.begin_categories());
        assert!(state.is_loading());
        assert!(!state.begin_categories());

        state.apply_categories(Vec::new());
        assert!(state.categories_ready());
        assert!(!state.begin_categories());
        assert!(state.begin_request().is_some());
    }
}
