// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchEngine;
use crate::utils::errors::PaperError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

static DRIVE_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href*='drive.google.com']").expect("static selector"));

static DRIVE_FILE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:file/d/|id=)([\w-]+)").expect("static pattern"));

static COURSE_CODE_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+").expect("static pattern"));
static COURSE_CODE_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));

/// 试卷服务
///
/// 从第三方镜像站下载历年试卷。镜像站的列表页URL没有统一格式，
/// 按三种已知格式依次猜测，命中一个含Google Drive链接的页面后
/// 将试卷逐个下载到按课程命名的目录。单个文件失败只跳过该文件
pub struct PaperService<E: FetchEngine> {
    engine: E,
    base_url: String,
    download_root: PathBuf,
}

/// 生成镜像站候选列表页URL
///
/// 三种历史格式：
/// 1. `ktu-{code}-{name}-solved-question-papers/`
/// 2. `ktu-{code_alpha}-{code_numeric}-{name}-solved-question-papers/`
/// 3. `ktu-{name}-question-papers-{code}/`
///
/// 课程代码没有字母或数字部分时跳过格式2
pub fn candidate_urls(base_url: &str, course_code: &str, course_name: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    let code = course_code.trim().to_lowercase();
    let name = course_name.trim().to_lowercase().replace(' ', "-");

    let mut urls = vec![format!(
        "{base}/ktu-{code}-{name}-solved-question-papers/"
    )];

    let alpha = COURSE_CODE_ALPHA.find(course_code.trim());
    let numeric = COURSE_CODE_NUMERIC.find(course_code.trim());
    if let (Some(alpha), Some(numeric)) = (alpha, numeric) {
        urls.push(format!(
            "{base}/ktu-{}-{}-{name}-solved-question-papers/",
            alpha.as_str().to_lowercase(),
            numeric.as_str()
        ));
    }

    urls.push(format!("{base}/ktu-{name}-question-papers-{code}/"));
    urls
}

/// 从Google Drive分享链接中提取文件ID
pub fn extract_drive_file_id(url: &str) -> Option<&str> {
    DRIVE_FILE_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Drive文件ID对应的直接下载URL
fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

/// 收集页面上所有指向Google Drive的链接
fn discover_drive_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&DRIVE_ANCHOR)
        .filter_map(|e| e.value().attr("href"))
        .map(str::to_string)
        .collect()
}

impl<E: FetchEngine> PaperService<E> {
    /// 创建试卷服务
    pub fn new(engine: E, base_url: impl Into<String>, download_root: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            base_url: base_url.into(),
            download_root: download_root.into(),
        }
    }

    /// 下载指定课程的全部试卷
    ///
    /// # 参数
    ///
    /// * `course_code` - 课程代码（如`MAT206`）
    /// * `course_name` - 课程名称（如`Graph Theory`）
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<PathBuf>)` - 成功落盘的试卷路径
    /// * `Err(PaperError::ListingNotFound)` - 所有候选URL均未命中
    pub async fn download_papers(
        &self,
        course_code: &str,
        course_name: &str,
    ) -> Result<Vec<PathBuf>, PaperError> {
        for url in candidate_urls(&self.base_url, course_code, course_name) {
            let response = match self.engine.fetch_text(&url).await {
                Ok(response) => response,
                Err(e) => {
                    debug!("Candidate URL {} not reachable: {}", url, e);
                    continue;
                }
            };

            let drive_links = discover_drive_links(&response.content);
            if drive_links.is_empty() {
                info!("No papers found at {}, trying next format", url);
                continue;
            }

            info!("Fetching {} papers from {}", drive_links.len(), url);
            let saved = self
                .save_papers(course_code, course_name, &drive_links)
                .await?;
            return Ok(saved);
        }

        Err(PaperError::ListingNotFound(course_code.to_string()))
    }

    async fn save_papers(
        &self,
        course_code: &str,
        course_name: &str,
        drive_links: &[String],
    ) -> Result<Vec<PathBuf>, PaperError> {
        let stem = format!(
            "{}_{}",
            course_code.trim().to_uppercase(),
            course_name.trim().replace(' ', "_")
        );
        let course_dir = self.download_root.join(&stem);
        tokio::fs::create_dir_all(&course_dir).await?;

        let mut saved = Vec::new();
        for (i, link) in drive_links.iter().enumerate() {
            let file_id = match extract_drive_file_id(link) {
                Some(id) => id,
                None => {
                    warn!("Failed to extract file id from {}", link);
                    continue;
                }
            };

            match self.engine.fetch_bytes(&drive_download_url(file_id)).await {
                Ok(bytes) => {
                    let target = course_dir.join(format!("{}_{}.pdf", stem, i + 1));
                    tokio::fs::write(&target, &bytes).await?;
                    info!("Downloaded {}", target.display());
                    saved.push(target);
                }
                Err(e) => warn!("Failed to download {}: {}", link, e),
            }
        }

        Ok(saved)
    }

    /// 下载根目录
    pub fn download_root(&self) -> &Path {
        &self.download_root
    }
}
