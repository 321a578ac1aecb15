// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 链接发现（link_discovery）：从列表页标记中提取PDF链接
/// - 课程过滤（course_filter）：按课程代码筛选链接
/// - 日期恢复（date_recovery）：从嘈杂文本中恢复日历日期
/// - 时间表服务（timetable_service）：编排完整的抓取管道
/// - 试卷服务（paper_service）：从镜像站下载历年试卷
/// - 主题分析（topic_analysis）：试卷文本的主题频率统计
pub mod course_filter;
pub mod date_recovery;
pub mod link_discovery;
pub mod paper_service;
pub mod timetable_service;
pub mod topic_analysis;
