// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// 作用域临时下载文件
///
/// 同一次管道调用会顺序处理多个PDF，文件名用UUID保证互不冲突。
/// 文件在`Drop`时删除，覆盖所有退出路径：正常返回、提取失败、
/// 下载半途而废
pub struct TempDownload {
    path: PathBuf,
}

impl TempDownload {
    /// 在工作目录下分配一个唯一的临时PDF路径
    ///
    /// 目录不存在时自动创建；此时尚未写入任何字节
    pub fn create(work_dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(work_dir)?;
        let path = work_dir.join(format!("timetable_{}.pdf", Uuid::new_v4()));
        Ok(Self { path })
    }

    /// 将下载内容写入临时路径
    pub async fn write(&self, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(&self.path, bytes).await
    }

    /// 临时文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDownload {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                debug!("Failed to remove temp file {}: {}", self.path.display(), e);
            }
        }
    }
}
