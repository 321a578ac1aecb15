// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含考试门户、试卷镜像站、HTTP客户端和存储等所有配置项。
/// 原工具集把门户地址、下载目录甚至凭据硬编码在脚本里，
/// 这里统一收敛为显式配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 考试门户配置
    pub portal: PortalSettings,
    /// 试卷镜像站配置
    pub notes: NotesSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 考试门户配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSettings {
    /// 时间表列表页URL
    pub listing_url: String,
}

/// 试卷镜像站配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NotesSettings {
    /// 镜像站根URL
    pub base_url: String,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 是否校验TLS证书
    pub verify_tls: bool,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 试卷下载根目录
    pub download_dir: String,
    /// 临时文件工作目录（默认使用系统临时目录）
    pub work_dir: Option<String>,
}

impl HttpSettings {
    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选的配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("portal.listing_url", "https://ktu.edu.in/exam/timetable")?
            .set_default("notes.base_url", "https://www.ktunotes.in")?
            // Default HTTP settings
            .set_default("http.timeout_secs", 10)?
            .set_default("http.verify_tls", true)?
            // Default storage settings
            .set_default("storage.download_dir", "./downloads")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EXAMRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
