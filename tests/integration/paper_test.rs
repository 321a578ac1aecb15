// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::PortalServer;
use examrs::domain::services::paper_service::PaperService;
use examrs::engines::reqwest_engine::ReqwestEngine;
use examrs::utils::errors::PaperError;
use std::collections::HashMap;
use std::time::Duration;

fn engine() -> ReqwestEngine {
    ReqwestEngine::new(Duration::from_secs(5), true).unwrap()
}

#[tokio::test]
async fn test_all_candidate_urls_missing_is_listing_not_found() {
    let server = PortalServer::start(HashMap::new(), HashMap::new()).await;
    let root = tempfile::tempdir().unwrap();
    let service = PaperService::new(engine(), server.base_url.clone(), root.path());

    let result = service.download_papers("MAT206", "Graph Theory").await;

    assert!(matches!(result, Err(PaperError::ListingNotFound(_))));
    // All three URL formats were tried
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn test_listing_without_drive_links_falls_through() {
    let mut pages = HashMap::new();
    pages.insert(
        "/ktu-mat206-graph-theory-solved-question-papers/".to_string(),
        r#"<a href="/unrelated.pdf">Unrelated</a>"#.to_string(),
    );
    let server = PortalServer::start(pages, HashMap::new()).await;
    let root = tempfile::tempdir().unwrap();
    let service = PaperService::new(engine(), server.base_url.clone(), root.path());

    let result = service.download_papers("MAT206", "Graph Theory").await;

    assert!(matches!(result, Err(PaperError::ListingNotFound(_))));
}
