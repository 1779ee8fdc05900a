//! 状态到视图模型的纯函数转换，不接触 DOM，便于在宿主机上测试。

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::state::{CategoryFilter, ListingState, LoadStatus, ViewState};
use crate::types::{Category, SourceType, Tool};

pub const ALL_CATEGORY_NAME: &str = "all";
pub const ALL_CATEGORY_LABEL: &str = "全部";
pub const EMPTY_MESSAGE: &str = "暂无相关工具";
pub const PRESET_NOTICE: &str = "这是一个示例工具，暂无实际功能。";

/// 分类栏中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub filter: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// "全部" 始终排在第一位；服务端自带的 `all` 分类被过滤掉
pub fn category_items(categories: &[Category], selected: CategoryFilter) -> Vec<CategoryItem> {
    let all = CategoryItem {
        filter: CategoryFilter::All,
        label: ALL_CATEGORY_LABEL.to_string(),
        active: selected == CategoryFilter::All,
    };

    std::iter::once(all)
        .chain(
            categories
                .iter()
                .filter(|category| category.name != ALL_CATEGORY_NAME)
                .map(|category| {
                    let filter = CategoryFilter::from_id(category.id);
                    CategoryItem {
                        filter,
                        label: category.display_name.clone(),
                        active: filter == selected,
                    }
                }),
        )
        .collect()
}

pub fn category_heading(categories: &[Category], selected: CategoryFilter) -> String {
    let label = match selected {
        CategoryFilter::All => ALL_CATEGORY_LABEL,
        CategoryFilter::Only(id) => categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.display_name.as_str())
            .unwrap_or(ALL_CATEGORY_LABEL),
    };

    if label.ends_with("工具") {
        label.to_string()
    } else {
        format!("{label}工具")
    }
}

/// 工具卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub date_label: String,
    pub source_type: SourceType,
}

pub fn tool_cards(tools: &[Tool], today: NaiveDate) -> Vec<ToolCard> {
    tools
        .iter()
        .map(|tool| ToolCard {
            key: tool.key(),
            name: tool.name.clone(),
            description: tool.description.clone(),
            category_name: tool.category_name.clone(),
            date_label: relative_date_label(&tool.publish_date, today),
            source_type: tool.source_type,
        })
        .collect()
}

/// 点击卡片后的行为
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolActivation {
    Open { path: String },
    Notice { message: String },
}

pub fn activation_for(tool: &Tool) -> ToolActivation {
    match tool.source_type {
        SourceType::Uploaded => ToolActivation::Open {
            path: format!("/{}", tool.url.trim_start_matches('/')),
        },
        SourceType::Preset => ToolActivation::Notice {
            message: format!("{}\n\n{}\n\n{PRESET_NOTICE}", tool.name, tool.description),
        },
    }
}

fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

pub fn relative_date_label(raw: &str, today: NaiveDate) -> String {
    let Some(date) = parse_publish_date(raw) else {
        return raw.to_string();
    };

    let days = (today - date).num_days().abs();
    match days {
        0 => "今天".to_string(),
        1 => "昨天".to_string(),
        2..=6 => format!("{days}天前"),
        7..=29 => format!("{}周前", days / 7),
        _ => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
    }
}

/// 某一页实际展示的条目区间（从 1 开始，闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

pub fn page_range(page: u32, page_size: u32, total: u64) -> Option<PageRange> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let size = u64::from(page_size);
    let start = (u64::from(page) - 1) * size + 1;
    if start > total {
        return None;
    }
    let end = (u64::from(page) * size).min(total);
    Some(PageRange { start, end })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageButton {
    Number { page: u32, active: bool },
    /// 紧跟在该页码之后的省略号
    Ellipsis { after: u32 },
}

impl PageButton {
    pub fn key(&self) -> String {
        match self {
            PageButton::Number { page, active } => format!("page-{page}-{active}"),
            PageButton::Ellipsis { after } => format!("gap-{after}"),
        }
    }
}

/// 页码窗口：以当前页为中心最多显示 `max_visible` 个页码，首尾页始终可达
pub fn page_buttons(current: u32, total_pages: u32, max_visible: usize) -> Vec<PageButton> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max_visible = max_visible.max(1) as i64;
    let total = i64::from(total_pages);
    let current = i64::from(current.clamp(1, total_pages));

    let mut start = (current - max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = (end - max_visible + 1).max(1);
    }

    let mut buttons = Vec::new();
    let number = |page: i64| PageButton::Number {
        page: page as u32,
        active: page == current,
    };

    if start > 1 {
        buttons.push(number(1));
        if start > 2 {
            buttons.push(PageButton::Ellipsis { after: 1 });
        }
    }

    buttons.extend((start..=end).map(number));

    if end < total {
        if end < total - 1 {
            buttons.push(PageButton::Ellipsis { after: end as u32 });
        }
        buttons.push(number(total));
    }

    buttons
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub info: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub buttons: Vec<PageButton>,
}

/// `None` means the pagination bar is hidden.
pub fn pagination_view(
    view: &ViewState,
    shown_items: usize,
    max_visible: usize,
) -> Option<PaginationView> {
    if view.total_pages <= 1 || shown_items == 0 {
        return None;
    }

    let range = page_range(view.current_page, view.page_size, view.total_items)?;
    Some(PaginationView {
        info: format!(
            "显示第 {}-{} 项，共 {} 项",
            range.start, range.end, view.total_items
        ),
        prev_enabled: view.current_page > 1,
        next_enabled: view.current_page < view.total_pages,
        buttons: page_buttons(view.current_page, view.total_pages, max_visible),
    })
}

/// 工具网格区域要呈现的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading,
    Error(String),
    Empty,
    Cards(Vec<ToolCard>),
}

pub fn grid_view(state: &ListingState, today: NaiveDate) -> GridView {
    match &state.status {
        LoadStatus::Loading => GridView::Loading,
        LoadStatus::Failed(message) => GridView::Error(message.clone()),
        LoadStatus::Ready if state.tools.is_empty() => GridView::Empty,
        LoadStatus::Ready => GridView::Cards(tool_cards(&state.tools, today)),
    }
}
