// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Parser, Subcommand};
use examrs::config::settings::Settings;
use examrs::domain::models::course::CourseCode;
use examrs::domain::services::paper_service::PaperService;
use examrs::domain::services::timetable_service::TimetableService;
use examrs::domain::services::topic_analysis;
use examrs::engines::reqwest_engine::ReqwestEngine;
use examrs::infrastructure::pdf::PdfExtractor;
use examrs::utils::telemetry;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// 考试门户学生工具：时间表日期提取、历年试卷下载与主题分析
#[derive(Parser)]
#[command(name = "examrs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 提取指定课程的考试日期
    Dates {
        /// 课程代码（如 CST202）
        course_code: String,
    },
    /// 下载指定课程的历年试卷
    Papers {
        /// 课程代码（如 MAT206）
        course_code: String,
        /// 课程名称（如 "Graph Theory"）
        course_name: String,
    },
    /// 对本地试卷PDF做主题频率分析
    Analyze {
        /// 课程代码，用于选择预置主题表
        course_code: String,
        /// 试卷PDF路径
        files: Vec<PathBuf>,
    },
    /// 备考模式：下载试卷并立即分析
    Prep {
        /// 课程代码
        course_code: String,
        /// 课程名称
        course_name: String,
    },
}

/// 主函数
///
/// 应用程序入口点，负责初始化配置与引擎并分发子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting examrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the shared fetch engine
    let engine = ReqwestEngine::new(settings.http.timeout(), settings.http.verify_tls)?;

    match Cli::parse().command {
        Command::Dates { course_code } => {
            let course = CourseCode::new(&course_code)?;
            let listing_url = Url::parse(&settings.portal.listing_url)?;
            let work_dir = settings.storage.work_dir.clone().map(PathBuf::from);
            let service = TimetableService::new(engine, listing_url, work_dir);

            let dates = service.exam_dates(&course).await?;
            if dates.is_empty() {
                println!("No exam dates found for {}", course);
            } else {
                println!("Exam dates for {}:", course);
                for date in dates {
                    println!("  {}", date);
                }
            }
        }
        Command::Papers {
            course_code,
            course_name,
        } => {
            let service = PaperService::new(
                engine,
                settings.notes.base_url.clone(),
                settings.storage.download_dir.clone(),
            );
            let saved = service.download_papers(&course_code, &course_name).await?;
            println!("Downloaded {} papers to {}", saved.len(), service.download_root().display());
        }
        Command::Analyze { course_code, files } => {
            analyze_files(&course_code, &files)?;
        }
        Command::Prep {
            course_code,
            course_name,
        } => {
            let service = PaperService::new(
                engine,
                settings.notes.base_url.clone(),
                settings.storage.download_dir.clone(),
            );
            let saved = service.download_papers(&course_code, &course_name).await?;
            println!("Downloaded {} papers", saved.len());
            analyze_files(&course_code, &saved)?;
        }
    }

    Ok(())
}

/// 提取试卷文本并打印主题频率报告
fn analyze_files(course_code: &str, files: &[PathBuf]) -> anyhow::Result<()> {
    let topics = topic_analysis::course_topics(course_code);
    if topics.is_empty() {
        println!("No predefined topics for course code {}", course_code);
        return Ok(());
    }
    if files.is_empty() {
        println!("No question papers to analyze");
        return Ok(());
    }

    let mut combined = String::new();
    for file in files {
        match PdfExtractor::extract_pages(file) {
            Ok(pages) => {
                for page in pages {
                    combined.push_str(&topic_analysis::clean_text(&page));
                    combined.push(' ');
                }
            }
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }

    let frequencies = topic_analysis::analyze_topics(&combined, topics);
    if frequencies.is_empty() {
        println!("No predefined topics found in the papers");
    } else {
        println!("Most frequently asked topics for {}:", course_code);
        for (topic, count) in frequencies {
            println!("  {}: {} times", topic, count);
        }
    }

    Ok(())
}
