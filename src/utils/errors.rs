// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use crate::infrastructure::pdf::PdfError;
use thiserror::Error;

/// 时间表管道错误类型
///
/// 区分「列表页不可达」与「匹配结果为空」：前者是错误，
/// 后者是合法的空结果
#[derive(Error, Debug)]
pub enum TimetableError {
    /// 时间表列表页抓取失败
    #[error("时间表列表页不可达: {0}")]
    ListingUnreachable(#[source] FetchError),

    /// 单个PDF下载失败
    #[error("PDF下载失败: {0}")]
    Download(#[source] FetchError),

    /// PDF解析失败
    #[error("PDF解析失败: {0}")]
    Pdf(#[from] PdfError),

    /// 无效的课程代码
    #[error("无效的课程代码: {0}")]
    InvalidCourseCode(String),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 试卷下载错误类型
#[derive(Error, Debug)]
pub enum PaperError {
    /// 所有候选URL格式均未找到试卷页面
    #[error("未找到课程 {0} 的试卷页面")]
    ListingNotFound(String),

    /// 网络抓取失败
    #[error("抓取失败: {0}")]
    Fetch(#[from] FetchError),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}
