use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

use crate::config::ListingConfig;
use crate::error::ApiError;
use crate::types::{Category, ToolsResponse};

const CATEGORIES_PATH: &str = "/api/categories";
const TOOLS_PATH: &str = "/api/tools";

/// `/api/tools` 的查询参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsQuery {
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl ToolsQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("per_page", self.per_page.to_string()));
        pairs
    }

    pub fn to_url(&self, endpoint: &str) -> String {
        let query = self
            .pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{endpoint}?{query}")
    }
}

/// 获取分类列表
pub async fn get_categories(config: &ListingConfig) -> Result<Vec<Category>, ApiError> {
    let resp = Request::get(&config.endpoint(CATEGORIES_PATH))
        .send()
        .await
        .map_err(ApiError::network)?;
    let resp = ensure_ok(resp)?;
    resp.json::<Vec<Category>>().await.map_err(ApiError::decode)
}

/// 获取一页工具列表；`abort` 用于在新请求发出时中止旧请求
pub async fn get_tools(
    config: &ListingConfig,
    query: &ToolsQuery,
    abort: Option<&AbortSignal>,
) -> Result<ToolsResponse, ApiError> {
    let url = query.to_url(&config.endpoint(TOOLS_PATH));
    let resp = Request::get(&url)
        .abort_signal(abort)
        .send()
        .await
        .map_err(ApiError::network)?;
    let resp = ensure_ok(resp)?;
    resp.json::<ToolsResponse>().await.map_err(ApiError::decode)
}

fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: resp.status(),
        })
    }
}
