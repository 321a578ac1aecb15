// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::course::CourseCode;
use crate::domain::models::pdf_link::PdfLink;

/// 按课程代码筛选链接
///
/// 保留标题整词命中课程代码的链接，维持原有顺序。
/// 无命中返回空序列，这是合法结果而不是错误
pub fn filter_by_course(links: &[PdfLink], course: &CourseCode) -> Vec<PdfLink> {
    links
        .iter()
        .filter(|link| course.matches(&link.title))
        .cloned()
        .collect()
}
