// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 课程代码（course）：调用方提供的大小写不敏感课程标识
/// - 考试日期（exam_date）：规范化的日历日期
/// - PDF链接（pdf_link）：列表页上发现的标题/绝对URL对
pub mod course;
pub mod exam_date;
pub mod pdf_link;
