//! End-to-end checks of the share/receive view behaviour without a renderer.

use zipdrop_core::session::{DragEvent, RetrievalStatus, VisualState};
use zipdrop_core::{Effect, FileHandle, Mode, Session, SessionEvent, format_bytes};

fn file(name: &str, size: u64) -> FileHandle {
    FileHandle::new(name, size)
}

#[test]
fn test_selected_file_display_size() {
    let mut session = Session::new(Mode::Share);
    session.update(SessionEvent::FilePicked(Some(file("report.pdf", 1500))));

    let selected = session.share().selected_file().expect("File should be selected");
    assert_eq!(selected.mime_type, "application/pdf");
    assert_eq!(format_bytes(selected.size_bytes), "1.46 KB");
}

#[test]
fn test_round_trip_between_tabs_keeps_everything() {
    let mut session = Session::new(Mode::Share);
    let a = file("A.bin", 10);
    session.update(SessionEvent::Drop(DragEvent::with_files(vec![
        a.clone(),
        file("B.bin", 20),
        file("C.bin", 30),
    ])));

    session.update(SessionEvent::SwitchMode(Mode::Receive));
    session.update(SessionEvent::InviteCodeChanged("   ".to_string()));
    assert_eq!(session.update(SessionEvent::SubmitRequested), None);
    session.update(SessionEvent::SwitchMode(Mode::Share));

    assert_eq!(session.share().selected_file(), Some(&a));
    assert_eq!(session.share().visual_state(), VisualState::FileSelected);

    session.update(SessionEvent::SwitchMode(Mode::Receive));
    assert_eq!(session.receive().invite_code(), "   ");
    assert_eq!(session.receive().retrieval_status(), &RetrievalStatus::Idle);
}

#[test]
fn test_later_drop_replaces_picked_file() {
    let mut session = Session::new(Mode::Share);
    session.update(SessionEvent::FilePicked(Some(file("picked.txt", 1))));

    session.update(SessionEvent::DragEnter(DragEvent::new()));
    assert_eq!(session.share().visual_state(), VisualState::DragActive);
    let dropped = file("dropped.txt", 2);
    session.update(SessionEvent::Drop(DragEvent::with_files(vec![dropped.clone()])));

    assert_eq!(session.share().selected_file(), Some(&dropped));
}

#[test]
fn test_drag_cycle_without_drop_keeps_selection() {
    let mut session = Session::new(Mode::Share);
    let picked = file("picked.txt", 1);
    session.update(SessionEvent::FilePicked(Some(picked.clone())));

    session.update(SessionEvent::DragEnter(DragEvent::new()));
    session.update(SessionEvent::DragLeave(DragEvent::new()));

    assert_eq!(session.share().selected_file(), Some(&picked));
    assert_eq!(session.share().visual_state(), VisualState::FileSelected);
}

#[test]
fn test_submit_gate() {
    let mut session = Session::new(Mode::Receive);
    for blank in ["", "   ", "\t\n"] {
        session.update(SessionEvent::InviteCodeChanged(blank.to_string()));
        assert!(!session.receive().can_submit(), "{:?} should not submit", blank);
    }

    session.update(SessionEvent::InviteCodeChanged(" abc ".to_string()));
    assert!(session.receive().can_submit());
    assert!(matches!(
        session.update(SessionEvent::SubmitRequested),
        Some(Effect::Retrieve { ref code, .. }) if code == "abc"
    ));
}
