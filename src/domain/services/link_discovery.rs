// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pdf_link::PdfLink;
use crate::utils::url_utils;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

static PDF_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href$='.pdf']").expect("static selector"));

/// 链接发现服务
///
/// 从列表页标记中选出所有指向PDF的锚元素，按文档顺序
/// 产出标题/绝对URL记录。重复的URL在此阶段保留不去重
pub struct LinkDiscovery;

impl LinkDiscovery {
    /// 发现列表页上的全部PDF链接
    ///
    /// # 参数
    ///
    /// * `html` - 列表页标记
    /// * `base` - 列表页自身的URL，用于重写相对href
    ///
    /// # 返回值
    ///
    /// 按文档顺序排列的链接记录；无法解析的href被跳过
    pub fn discover(html: &str, base: &Url) -> Vec<PdfLink> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for element in document.select(&PDF_ANCHOR) {
            let href = match element.value().attr("href") {
                Some(h) => h,
                None => continue,
            };

            let url = match url_utils::resolve_url(base, href) {
                Ok(u) => u,
                Err(e) => {
                    debug!("Skipping unresolvable href {}: {}", href, e);
                    continue;
                }
            };

            let title = element.text().collect::<Vec<_>>().join(" ").trim().to_string();
            links.push(PdfLink::new(title, url));
        }

        links
    }
}
