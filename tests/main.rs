// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 测试主模块
///
/// 组织集成测试：针对本地HTTP服务器运行完整的时间表管道
mod integration;
