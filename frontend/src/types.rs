use serde::{Deserialize, Serialize};

/// 分类数据结构（由服务端定义，前端只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

/// 工具来源：预设工具或上传组件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Preset,
    Uploaded,
}

/// 工具数据结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub url: String,
    #[serde(default)]
    pub source_type: SourceType,
    pub publish_date: String,
}

impl Tool {
    /// 预设工具与上传组件的 id 各自独立，用来源前缀区分
    pub fn key(&self) -> String {
        match self.source_type {
            SourceType::Preset => format!("preset:{}", self.id),
            SourceType::Uploaded => format!("uploaded:{}", self.id),
        }
    }
}

/// 分页元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub total: u64,
    pub pages: u32,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub has_prev: Option<bool>,
    #[serde(default)]
    pub has_next: Option<bool>,
}

/// `/api/tools` 响应数据结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<Tool>,
    pub pagination: Pagination,
}
