// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// PDF链接实体
///
/// 列表页上发现的一条可下载时间表记录。`url`始终是
/// 绝对地址：相对href在发现阶段就已经按站点源地址重写
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLink {
    /// 链接可见文本（已去除首尾空白）
    pub title: String,
    /// 解析后的绝对URL
    pub url: String,
}

impl PdfLink {
    /// 创建一条新的PDF链接记录
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
