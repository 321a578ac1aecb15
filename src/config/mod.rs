// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 管理应用程序的所有配置项，支持配置文件和环境变量
pub mod settings;
