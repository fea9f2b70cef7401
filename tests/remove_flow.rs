//! End-to-end removal tests against the local filesystem and a mock registry.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use proxy_fleet::proxy::{ProxyController, ReloadError, TemplateAssembler};
use proxy_fleet::registry::ConsulRegistry;
use proxy_fleet::remove::{FragmentLock, RemovalOrchestrator, RemovalRequest, RemoveError};

mod common;

#[derive(Default)]
struct CountingReloader {
    reloads: AtomicU32,
}

#[async_trait]
impl ProxyController for CountingReloader {
    async fn reload(&self) -> Result<(), ReloadError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn orchestrator(reloader: Arc<CountingReloader>) -> RemovalOrchestrator {
    RemovalOrchestrator::new(
        FragmentLock::new(),
        Arc::new(TemplateAssembler::new("haproxy.tmpl", "haproxy.cfg")),
        reloader,
        Arc::new(ConsulRegistry::new(Duration::from_secs(2)).unwrap()),
    )
}

fn request(root: &Path, service: &str, registry: &str, mode: &str) -> RemovalRequest {
    RemovalRequest {
        service_name: service.to_string(),
        templates_path: root.join("tmpl"),
        configs_path: root.to_path_buf(),
        registry_address: registry.to_string(),
        instance_name: "docker-flow".to_string(),
        mode: mode.to_string(),
    }
}

#[tokio::test]
async fn test_remove_in_default_mode_deregisters_and_rebuilds() {
    let root = common::scratch_layout(&["api", "web"]);
    let (registry_addr, requests) = common::start_mock_registry(200).await;
    let reloader = Arc::new(CountingReloader::default());

    orchestrator(reloader.clone())
        .remove(&request(&root, "api", &registry_addr.to_string(), "default"))
        .await
        .unwrap();

    assert!(!root.join("tmpl/api-fe.cfg").exists());
    assert!(!root.join("tmpl/api-be.cfg").exists());
    assert!(root.join("tmpl/web-fe.cfg").exists());

    let config = std::fs::read_to_string(root.join("haproxy.cfg")).unwrap();
    assert_eq!(
        config,
        "global\n    daemon\n\n    use_backend web-be if url_web\n\nbackend web-be\n"
    );

    assert_eq!(
        *requests.lock().unwrap(),
        vec!["DELETE /v1/kv/docker-flow/api?recurse HTTP/1.1".to_string()]
    );
    assert_eq!(reloader.reloads.load(Ordering::SeqCst), 1);

    std::fs::remove_dir_all(&root).unwrap();
}

#[tokio::test]
async fn test_remove_in_swarm_mode_leaves_registry_alone() {
    let root = common::scratch_layout(&["api"]);
    let (registry_addr, requests) = common::start_mock_registry(200).await;
    let reloader = Arc::new(CountingReloader::default());

    orchestrator(reloader.clone())
        .remove(&request(&root, "api", &registry_addr.to_string(), "Swarm"))
        .await
        .unwrap();

    assert!(requests.lock().unwrap().is_empty());
    let config = std::fs::read_to_string(root.join("haproxy.cfg")).unwrap();
    assert_eq!(config, "global\n    daemon\n");
    assert_eq!(reloader.reloads.load(Ordering::SeqCst), 1);

    std::fs::remove_dir_all(&root).unwrap();
}

#[tokio::test]
async fn test_registry_failure_aborts_before_assembly() {
    let root = common::scratch_layout(&["api"]);
    let (registry_addr, requests) = common::start_mock_registry(500).await;
    let reloader = Arc::new(CountingReloader::default());

    let err = orchestrator(reloader.clone())
        .remove(&request(&root, "api", &registry_addr.to_string(), "default"))
        .await
        .unwrap_err();

    assert!(matches!(err, RemoveError::Registry(_)));
    assert!(err
        .to_string()
        .contains("could not remove the service from the registry"));
    assert_eq!(requests.lock().unwrap().len(), 1);

    // Fragments are gone; nothing downstream ran.
    assert!(!root.join("tmpl/api-fe.cfg").exists());
    assert!(!root.join("haproxy.cfg").exists());
    assert_eq!(reloader.reloads.load(Ordering::SeqCst), 0);

    std::fs::remove_dir_all(&root).unwrap();
}

#[tokio::test]
async fn test_unknown_service_fails_on_missing_fragment() {
    let root = common::scratch_layout(&["web"]);
    let (registry_addr, requests) = common::start_mock_registry(200).await;
    let reloader = Arc::new(CountingReloader::default());

    let err = orchestrator(reloader.clone())
        .remove(&request(&root, "api", &registry_addr.to_string(), "default"))
        .await
        .unwrap_err();

    match err {
        RemoveError::Filesystem(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(requests.lock().unwrap().is_empty());
    assert!(root.join("tmpl/web-be.cfg").exists());
    assert_eq!(reloader.reloads.load(Ordering::SeqCst), 0);

    std::fs::remove_dir_all(&root).unwrap();
}
