use thiserror::Error;

/// 分类加载失败时展示给用户的提示
pub const CATEGORIES_FAILED_MESSAGE: &str = "加载失败，请刷新页面重试";
/// 工具加载失败时展示给用户的提示
pub const TOOLS_FAILED_MESSAGE: &str = "加载工具失败，请重试";

/// 调用后端接口可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("请求失败: {0}")]
    Network(String),

    #[error("服务器返回异常状态: {status}")]
    Status { status: u16 },

    #[error("解析错误: {0}")]
    Decode(String),
}

impl ApiError {
    /// 被中止的请求同样归为网络错误，由请求序号过滤
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = ApiError::Status { status: 502 };
        assert_eq!(err.to_string(), "服务器返回异常状态: 502");
    }

    #[test]
    fn helpers_keep_source_text() {
        assert_eq!(
            ApiError::network("connection reset"),
            ApiError::Network("connection reset".into())
        );
        assert_eq!(ApiError::decode("eof").to_string(), "解析错误: eof");
    }
}
