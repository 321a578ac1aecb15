// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的href转换为绝对路径URL
pub fn resolve_url(base_url: &Url, href: &str) -> Result<Url, ParseError> {
    base_url.join(href)
}
