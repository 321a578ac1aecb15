// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{build_pdf, PortalServer};
use examrs::domain::models::course::CourseCode;
use examrs::domain::services::timetable_service::TimetableService;
use examrs::engines::reqwest_engine::ReqwestEngine;
use examrs::utils::errors::TimetableError;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

const LISTING_PATH: &str = "/exam/timetable";

fn listing_html() -> String {
    r#"
        <html><body>
            <h2>Exam Timetables</h2>
            <a href="/downloads/cst202_s4.pdf">CST202 S4 Timetable</a>
            <a href="/downloads/cst204_s4.pdf">CST204 S4 Timetable</a>
            <a href="/news">Latest news</a>
        </body></html>
    "#
    .to_string()
}

async fn start_portal() -> PortalServer {
    let mut pages = HashMap::new();
    pages.insert(LISTING_PATH.to_string(), listing_html());

    let mut files = HashMap::new();
    files.insert(
        "/downloads/cst202_s4.pdf".to_string(),
        build_pdf(&[
            &["CST202 Computer Organisation", "FN 03/04/2025", "AN 10/04/2025"],
            &["Supplementary on 2 Jan 2026"],
        ]),
    );
    files.insert(
        "/downloads/cst204_s4.pdf".to_string(),
        build_pdf(&[&["CST204 DBMS", "17/04/2025"]]),
    );

    PortalServer::start(pages, files).await
}

fn service(base_url: &str, work_dir: &std::path::Path) -> TimetableService<ReqwestEngine> {
    let engine = ReqwestEngine::new(Duration::from_secs(5), true).unwrap();
    let listing_url = Url::parse(&format!("{}{}", base_url, LISTING_PATH)).unwrap();
    TimetableService::new(engine, listing_url, Some(work_dir.to_path_buf()))
}

#[tokio::test]
async fn test_end_to_end_only_matching_pdf_is_processed() {
    let portal = start_portal().await;
    let work_dir = tempfile::tempdir().unwrap();
    let service = service(&portal.base_url, work_dir.path());
    let course = CourseCode::new("CST202").unwrap();

    let dates = service.exam_dates(&course).await.unwrap();

    let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["03 Apr 2025", "10 Apr 2025", "02 Jan 2026"]);

    let requests = portal.requests();
    assert!(requests.contains(&"/downloads/cst202_s4.pdf".to_string()));
    assert!(!requests.contains(&"/downloads/cst204_s4.pdf".to_string()));
}

#[tokio::test]
async fn test_temp_files_are_cleaned_up_after_run() {
    let portal = start_portal().await;
    let work_dir = tempfile::tempdir().unwrap();
    let service = service(&portal.base_url, work_dir.path());
    let course = CourseCode::new("CST202").unwrap();

    service.exam_dates(&course).await.unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(work_dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_zero_matches_yields_empty_result() {
    let portal = start_portal().await;
    let work_dir = tempfile::tempdir().unwrap();
    let service = service(&portal.base_url, work_dir.path());
    let course = CourseCode::new("MAT206").unwrap();

    let dates = service.exam_dates(&course).await.unwrap();

    assert!(dates.is_empty());
}

#[tokio::test]
async fn test_unreachable_listing_page_is_an_error_not_empty() {
    // Nothing listens on this port
    let work_dir = tempfile::tempdir().unwrap();
    let service = service("http://127.0.0.1:1", work_dir.path());
    let course = CourseCode::new("CST202").unwrap();

    let result = service.exam_dates(&course).await;

    assert!(matches!(result, Err(TimetableError::ListingUnreachable(_))));
}

#[tokio::test]
async fn test_broken_pdf_is_skipped_and_rest_processed() {
    let mut pages = HashMap::new();
    pages.insert(
        LISTING_PATH.to_string(),
        r#"
            <a href="/downloads/broken.pdf">CST202 S4 Timetable</a>
            <a href="/downloads/good.pdf">CST202 S4 Supplementary Timetable</a>
        "#
        .to_string(),
    );
    let mut files = HashMap::new();
    files.insert("/downloads/broken.pdf".to_string(), b"not a pdf".to_vec());
    files.insert(
        "/downloads/good.pdf".to_string(),
        build_pdf(&[&["CST202 21/04/2025"]]),
    );
    let portal = PortalServer::start(pages, files).await;

    let work_dir = tempfile::tempdir().unwrap();
    let service = service(&portal.base_url, work_dir.path());
    let course = CourseCode::new("CST202").unwrap();

    let dates = service.exam_dates(&course).await.unwrap();

    let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["21 Apr 2025"]);
}
