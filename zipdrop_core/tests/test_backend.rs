use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use zipdrop_core::{
    AppCommand, AppConfig, AppEvent, FileHandle, MemoryTransferService, Mode, Session,
    SessionEvent, TransferError, TransferService, run_backend,
};

// Helper to spawn the backend over a given service
fn spawn_backend(
    service: Arc<dyn TransferService>,
    config: AppConfig,
) -> (mpsc::Sender<AppCommand>, mpsc::Receiver<AppEvent>) {
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::spawn(run_backend(cmd_rx, event_tx, service, config));
    (cmd_tx, event_rx)
}

// Wait for the next event that maps onto the session
async fn next_session_event(rx: &mut mpsc::Receiver<AppEvent>) -> SessionEvent {
    loop {
        let ev = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("Timeout waiting for backend event")
            .expect("Channel closed");
        match ev.into_session_event() {
            Some(session_event) => return session_event,
            None => continue,
        }
    }
}

#[tokio::test]
async fn test_share_then_receive_through_backend() {
    let service: Arc<dyn TransferService> = Arc::new(MemoryTransferService::new());
    let (cmd_tx, mut event_rx) = spawn_backend(service, AppConfig::default());

    // Sharing side
    let mut sender = Session::new(Mode::Share);
    let file = FileHandle::new("holiday.jpg", 3_500_000);
    sender.update(SessionEvent::FilePicked(Some(file.clone())));
    let effect = sender
        .update(SessionEvent::ShareRequested)
        .expect("Share should produce an effect");
    cmd_tx
        .send(AppCommand::from_effect(effect).unwrap())
        .await
        .unwrap();

    sender.update(next_session_event(&mut event_rx).await);
    let code = match sender.share().announce_status() {
        zipdrop_core::session::AnnounceStatus::Ready { code } => code.clone(),
        other => panic!("Expected invite code, got {:?}", other),
    };

    // Receiving side, with whitespace around the typed code
    let mut receiver = Session::new(Mode::Receive);
    receiver.update(SessionEvent::InviteCodeChanged(format!("  {}  ", code)));
    let effect = receiver
        .update(SessionEvent::SubmitRequested)
        .expect("Submit should produce an effect");
    cmd_tx
        .send(AppCommand::from_effect(effect).unwrap())
        .await
        .unwrap();

    receiver.update(next_session_event(&mut event_rx).await);
    assert_eq!(
        receiver.receive().retrieval_status(),
        &zipdrop_core::session::RetrievalStatus::Succeeded { file }
    );
}

#[tokio::test]
async fn test_unknown_code_reports_failure() {
    let service: Arc<dyn TransferService> = Arc::new(MemoryTransferService::new());
    let (cmd_tx, mut event_rx) = spawn_backend(service, AppConfig::default());

    let mut session = Session::new(Mode::Receive);
    session.update(SessionEvent::InviteCodeChanged("60001".to_string()));
    let effect = session.update(SessionEvent::SubmitRequested).unwrap();
    cmd_tx
        .send(AppCommand::from_effect(effect).unwrap())
        .await
        .unwrap();

    session.update(next_session_event(&mut event_rx).await);
    assert_eq!(
        session.receive().retrieval_status(),
        &zipdrop_core::session::RetrievalStatus::Failed {
            reason: TransferError::NotFound("60001".to_string()).to_string()
        }
    );
    assert!(session.receive().can_submit());
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let service: Arc<dyn TransferService> =
        Arc::new(MemoryTransferService::new().with_latency(Duration::from_secs(5)));
    let config = AppConfig {
        request_timeout_secs: 1,
        ..AppConfig::default()
    };
    let (cmd_tx, mut event_rx) = spawn_backend(service, config);

    let request_id = uuid::Uuid::new_v4();
    cmd_tx
        .send(AppCommand::Retrieve {
            request_id,
            code: "50000".to_string(),
        })
        .await
        .unwrap();

    match next_session_event(&mut event_rx).await {
        SessionEvent::RetrievalCompleted {
            request_id: id,
            result,
        } => {
            assert_eq!(id, request_id);
            assert_eq!(result, Err(TransferError::TimedOut(1)));
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_shutdown_abandons_pending_requests() {
    let service: Arc<dyn TransferService> =
        Arc::new(MemoryTransferService::new().with_latency(Duration::from_secs(2)));
    let (cmd_tx, mut event_rx) = spawn_backend(service, AppConfig::default());

    cmd_tx
        .send(AppCommand::Retrieve {
            request_id: uuid::Uuid::new_v4(),
            code: "50000".to_string(),
        })
        .await
        .unwrap();
    cmd_tx.send(AppCommand::Shutdown).await.unwrap();

    // Only the startup status arrives before the channel closes
    let mut results = 0;
    while let Ok(Some(ev)) = tokio::time::timeout(Duration::from_secs(5), event_rx.recv()).await {
        if ev.into_session_event().is_some() {
            results += 1;
        }
    }
    assert_eq!(results, 0);
}

#[test]
fn test_file_picker_effect_stays_in_gui() {
    assert!(AppCommand::from_effect(zipdrop_core::Effect::OpenFilePicker).is_none());
}
