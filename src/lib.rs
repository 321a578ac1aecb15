// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和领域服务：PDF链接、课程代码、
/// 考试日期，以及时间表抓取和试卷分析的业务逻辑
pub mod domain;

/// 引擎模块
///
/// 实现网页和文件的HTTP抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供外部资源集成：临时文件下载和PDF文本提取
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
