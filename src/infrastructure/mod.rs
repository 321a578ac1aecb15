// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部资源集成：
/// - 临时下载文件（download）：带作用域清理的PDF落盘
/// - PDF提取（pdf）：逐页提取PDF纯文本
pub mod download;
pub mod pdf;
