// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{FetchEngine, FetchError, FetchResponse};
use async_trait::async_trait;
use std::time::Duration;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎，带超时上限；
/// 部分部署环境的门户证书不可信，可按配置跳过TLS校验
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 每次请求的超时上限
    /// * `verify_tls` - 是否校验TLS证书
    pub fn new(timeout: Duration, verify_tls: bool) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; examrs/0.1; +https://github.com/Kirky-X/examrs)")
            .timeout(timeout);

        if !verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;
        Ok(Self { client })
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 抓取文本页面
    async fn fetch_text(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.get_checked(url).await?;
        let status_code = response.status().as_u16();
        let content = response.text().await?;

        Ok(FetchResponse {
            status_code,
            content,
        })
    }

    /// 下载二进制内容
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get_checked(url).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
