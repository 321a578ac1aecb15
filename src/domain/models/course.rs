// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::TimetableError;
use regex::Regex;

/// 课程代码实体
///
/// 调用方提供的不透明标识（如`CST202`）。匹配按整词、
/// 大小写不敏感进行：代码两侧不能紧邻单词字符，
/// 因此`CS1`不会命中`CS10`，`CS10`也不会命中`CS100`
#[derive(Debug, Clone)]
pub struct CourseCode {
    raw: String,
    pattern: Regex,
}

impl CourseCode {
    /// 创建课程代码
    ///
    /// # 参数
    ///
    /// * `code` - 课程代码文本，两侧空白会被去除
    ///
    /// # 返回值
    ///
    /// * `Ok(CourseCode)` - 可用于标题匹配的课程代码
    /// * `Err(TimetableError::InvalidCourseCode)` - 空代码
    pub fn new(code: &str) -> Result<Self, TimetableError> {
        let raw = code.trim().to_string();
        if raw.is_empty() {
            return Err(TimetableError::InvalidCourseCode(code.to_string()));
        }

        // The code is matched as a literal, so it is escaped before being
        // wrapped in word boundaries
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&raw)))
            .map_err(|e| TimetableError::InvalidCourseCode(e.to_string()))?;

        Ok(Self { raw, pattern })
    }

    /// 课程代码原文
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 判断标题是否整词命中该课程代码
    pub fn matches(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }
}

impl std::fmt::Display for CourseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
