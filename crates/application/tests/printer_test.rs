use application::printer::{PrintError, PrintOrchestrator};
use domain::barcode::{BarcodeIdentity, generate_code};
use domain::label::{LabelData, LabelSettings};
use domain::printer::{PrintJobState, PrintTimings};
use infrastructure::surface::{AfterPrint, MockBehavior, MockSurfaceProvider};
use std::sync::Arc;
use tokio::time::{Duration, Instant};

fn label() -> LabelData {
    let code = generate_code(&BarcodeIdentity::new("abc123", "v1"));
    LabelData::new(code, "Green Tea", 2.5).unwrap()
}

fn orchestrator(provider: &MockSurfaceProvider) -> PrintOrchestrator {
    PrintOrchestrator::new(Arc::new(provider.clone()), LabelSettings::default())
}

#[tokio::test(start_paused = true)]
async fn test_success_path_closes_once() {
    let provider = MockSurfaceProvider::new(MockBehavior::default());
    let orchestrator = orchestrator(&provider);

    let start = Instant::now();
    let result = orchestrator.print_label(label()).await;

    assert_eq!(result, Ok(true));
    assert_eq!(provider.stats.opens(), 1);
    assert_eq!(provider.stats.prints(), 1);
    assert_eq!(provider.stats.close_calls(), 1);

    // Settle delay always applies, fallback never needed
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_document_carries_label() {
    let provider = MockSurfaceProvider::new(MockBehavior::default());
    let orchestrator = PrintOrchestrator::new(
        Arc::new(provider.clone()),
        LabelSettings {
            currency: "USD".to_string(),
        },
    );

    orchestrator.print_label(label()).await.unwrap();

    let documents = provider.documents.lock().await;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].code.as_str(), "0011135808409");
    assert!(documents[0].markup.contains("2.500 USD"));
    assert!(documents[0].markup.contains("Green Tea"));
}

#[tokio::test(start_paused = true)]
async fn test_fallback_completes_without_after_print_event() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        after_print: AfterPrint::Never,
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider);

    let start = Instant::now();
    let result = orchestrator.print_label(label()).await;

    assert_eq!(result, Ok(true));
    assert_eq!(provider.stats.close_calls(), 1);
    // settle (500ms) + fallback (1000ms)
    assert!(start.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_after_print_event_beats_fallback() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        after_print: AfterPrint::Delayed(Duration::from_millis(200)),
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider);

    let start = Instant::now();
    assert_eq!(orchestrator.print_label(label()).await, Ok(true));

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(700));
    assert!(elapsed < Duration::from_millis(1500));
    assert_eq!(provider.stats.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_open_failure_is_surface_unavailable() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        fail_open: true,
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider);

    let result = orchestrator.print_label(label()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, PrintError::SurfaceUnavailable(_)));
    assert_eq!(err.stage(), PrintJobState::Created);
    assert_eq!(provider.stats.opens(), 0);
    assert_eq!(provider.stats.close_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_print_failure_still_closes_once() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        fail_print: true,
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider);

    let result = orchestrator.print_label(label()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, PrintError::PrintCommandFailed(_)));
    assert_eq!(err.stage(), PrintJobState::Rendered);
    assert_eq!(provider.stats.prints(), 0);
    assert_eq!(provider.stats.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_asset_failure_is_skipped() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        fail_assets: true,
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider);

    assert_eq!(orchestrator.print_label(label()).await, Ok(true));
    assert_eq!(provider.stats.prints(), 1);
    assert_eq!(provider.stats.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_assets_are_bounded() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        stall_assets: true,
        ..MockBehavior::default()
    });
    let orchestrator = orchestrator(&provider).with_timings(PrintTimings {
        assets_timeout: Duration::from_millis(2000),
        ..PrintTimings::default()
    });

    let start = Instant::now();
    assert_eq!(orchestrator.print_label(label()).await, Ok(true));

    // assets timeout (2000ms) + settle (500ms)
    assert!(start.elapsed() >= Duration::from_millis(2500));
    assert_eq!(provider.stats.prints(), 1);
    assert_eq!(provider.stats.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_jobs_own_their_surfaces() {
    let provider = MockSurfaceProvider::new(MockBehavior {
        after_print: AfterPrint::Never,
        ..MockBehavior::default()
    });
    let orchestrator = Arc::new(orchestrator(&provider));

    let mut handles = Vec::new();
    for i in 0..3 {
        let orchestrator = orchestrator.clone();
        handles.push(tokio::spawn(async move {
            let code = generate_code(&BarcodeIdentity::new(format!("p{i}"), "v1"));
            orchestrator
                .print_label(LabelData::new(code, format!("Item {i}"), 1.0).unwrap())
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(true));
    }
    assert_eq!(provider.stats.opens(), 3);
    assert_eq!(provider.stats.prints(), 3);
    assert_eq!(provider.stats.close_calls(), 3);
}

#[tokio::test]
async fn test_network_printer_receives_escpos_barcode() {
    use infrastructure::surface::NetworkSurfaceProvider;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let orchestrator = PrintOrchestrator::new(
        Arc::new(NetworkSurfaceProvider::new("127.0.0.1", port)),
        LabelSettings::default(),
    )
    .with_timings(PrintTimings {
        settle_delay: Duration::from_millis(10),
        fallback_timeout: Duration::from_millis(50),
        assets_timeout: Duration::from_millis(50),
    });

    assert_eq!(orchestrator.print_label(label()).await, Ok(true));

    let received = server.await.unwrap();
    assert!(received.starts_with(&[0x1B, 0x40]), "missing ESC @ prefix");
    let mut barcode = vec![0x1D, 0x6B, 67, 13];
    barcode.extend_from_slice(b"0011135808409");
    assert!(
        received.windows(barcode.len()).any(|w| w == barcode.as_slice()),
        "missing GS k EAN-13 command"
    );
    assert!(!received.windows(9).any(|w| w == b"<!DOCTYPE"));
}
