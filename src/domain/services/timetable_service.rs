// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::course::CourseCode;
use crate::domain::models::exam_date::ExamDate;
use crate::domain::models::pdf_link::PdfLink;
use crate::domain::services::course_filter::filter_by_course;
use crate::domain::services::date_recovery::recover_dates;
use crate::domain::services::link_discovery::LinkDiscovery;
use crate::engines::traits::FetchEngine;
use crate::infrastructure::download::TempDownload;
use crate::infrastructure::pdf::PdfExtractor;
use crate::utils::errors::TimetableError;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

/// 时间表服务
///
/// 编排完整的考试日期管道：发现列表页PDF链接 → 按课程过滤 →
/// 逐个下载、提取、恢复日期 → 合并去重排序。文档严格串行处理，
/// 没有并发扇出；单个文档的失败只跳过该文档，不中断整次调用
pub struct TimetableService<E: FetchEngine> {
    engine: E,
    listing_url: Url,
    work_dir: PathBuf,
}

impl<E: FetchEngine> TimetableService<E> {
    /// 创建时间表服务
    ///
    /// # 参数
    ///
    /// * `engine` - 抓取引擎
    /// * `listing_url` - 时间表列表页URL
    /// * `work_dir` - 临时下载目录（`None`使用系统临时目录）
    pub fn new(engine: E, listing_url: Url, work_dir: Option<PathBuf>) -> Self {
        Self {
            engine,
            listing_url,
            work_dir: work_dir.unwrap_or_else(std::env::temp_dir),
        }
    }

    /// 发现列表页上的全部PDF链接
    ///
    /// 列表页本身不可达（超时、DNS、TLS、非2xx）时返回
    /// `ListingUnreachable`，与「零命中」的空结果可区分
    pub async fn fetch_listing(&self) -> Result<Vec<PdfLink>, TimetableError> {
        let response = self
            .engine
            .fetch_text(self.listing_url.as_str())
            .await
            .map_err(TimetableError::ListingUnreachable)?;

        let links = LinkDiscovery::discover(&response.content, &self.listing_url);
        info!("Discovered {} PDF links on listing page", links.len());
        Ok(links)
    }

    /// 提取指定课程的全部考试日期
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<ExamDate>)` - 去重后按日历顺序升序的日期；
    ///   无命中或无日期时为空，这是合法结果
    /// * `Err(TimetableError::ListingUnreachable)` - 列表页抓取失败
    pub async fn exam_dates(&self, course: &CourseCode) -> Result<Vec<ExamDate>, TimetableError> {
        let links = self.fetch_listing().await?;
        let matched = filter_by_course(&links, course);
        info!("{} of {} links match course {}", matched.len(), links.len(), course);

        let mut dates = BTreeSet::new();
        for link in &matched {
            // Per-document failures are isolated: log and continue
            match self.process_document(link).await {
                Ok(found) => {
                    debug!("Recovered {} dates from {}", found.len(), link.url);
                    dates.extend(found);
                }
                Err(e) => warn!("Skipping document {}: {}", link.url, e),
            }
        }

        Ok(dates.into_iter().collect())
    }

    /// 下载并解析单个时间表PDF
    ///
    /// 临时文件在返回前删除，成功与否都一样
    async fn process_document(
        &self,
        link: &PdfLink,
    ) -> Result<BTreeSet<ExamDate>, TimetableError> {
        let download = TempDownload::create(&self.work_dir)?;

        let bytes = self
            .engine
            .fetch_bytes(&link.url)
            .await
            .map_err(TimetableError::Download)?;
        download.write(&bytes).await?;

        let pages = PdfExtractor::extract_pages(download.path())?;
        Ok(recover_dates(&pages))
        // download dropped here, removing the temp file
    }
}
