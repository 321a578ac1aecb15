// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非2xx状态码
    #[error("Unexpected status code: {0}")]
    Status(u16),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取响应
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
}

/// 抓取引擎接口
///
/// 页面抓取与文件下载的统一出口，领域服务通过该接口访问网络，
/// 便于在测试中替换为本地桩实现
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 抓取文本页面
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应（仅2xx）
    /// * `Err(FetchError)` - 超时、连接失败或非2xx状态
    async fn fetch_text(&self, url: &str) -> Result<FetchResponse, FetchError>;

    /// 下载二进制内容
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
