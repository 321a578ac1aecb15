// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：PDF链接、课程代码、考试日期
/// - 服务（services）：链接发现、日期恢复、时间表管道、
///   试卷下载和主题频率分析
pub mod models;
pub mod services;
