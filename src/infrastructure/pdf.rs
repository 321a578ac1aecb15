// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lopdf::Document;
use std::path::Path;
use thiserror::Error;

/// PDF解析错误类型
#[derive(Error, Debug)]
pub enum PdfError {
    /// 文档损坏或无法打开
    #[error("Failed to load document: {0}")]
    Load(String),
    /// 页面文本提取失败
    #[error("Failed to extract text from page {page}: {message}")]
    Extract { page: u32, message: String },
}

/// PDF文本提取器
///
/// 基于lopdf实现的逐页文本提取。无可提取文本的页面
/// （如扫描件）产出空字符串而不是错误
pub struct PdfExtractor;

impl PdfExtractor {
    /// 逐页提取PDF纯文本
    ///
    /// # 参数
    ///
    /// * `path` - 已下载PDF的本地路径
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 按页序排列的每页文本
    /// * `Err(PdfError)` - 文档损坏或页面提取失败，整个文档视为失败
    pub fn extract_pages(path: &Path) -> Result<Vec<String>, PdfError> {
        let doc = Document::load(path).map_err(|e| PdfError::Load(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for page_num in page_numbers {
            match doc.extract_text(&[page_num]) {
                Ok(text) => pages.push(text),
                // A page without a decodable content stream is common for
                // scanned timetables; treat it as empty rather than fatal
                Err(lopdf::Error::ContentDecode) => pages.push(String::new()),
                Err(e) => {
                    return Err(PdfError::Extract {
                        page: page_num,
                        message: e.to_string(),
                    })
                }
            }
        }

        Ok(pages)
    }
}
