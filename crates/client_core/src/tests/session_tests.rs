use super::*;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use shared::{domain::Origin, error::ApiError, protocol::HealthResponse};

enum FakeOutcome {
    Artifact(GeneratedArtifact),
    Reported(&'static str),
    Malformed,
}

struct FakeBackend {
    outcome: FakeOutcome,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerateUiRequest>>,
}

impl FakeBackend {
    fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn returning(artifact: GeneratedArtifact) -> Self {
        Self::new(FakeOutcome::Artifact(artifact))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(
        &self,
        request: &GenerateUiRequest,
    ) -> Result<GeneratedArtifact, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        match &self.outcome {
            FakeOutcome::Artifact(artifact) => Ok(artifact.clone()),
            FakeOutcome::Reported(message) => Err(ApiError::new(*message).into()),
            FakeOutcome::Malformed => Err(ClientError::Decode {
                status: 200,
                source: serde_json::from_str::<serde_json::Value>("{").expect_err("bad json"),
            }),
        }
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        Ok(HealthResponse::default())
    }
}

#[derive(Default)]
struct RecordingPreview {
    documents: Vec<String>,
    fail: bool,
}

impl PreviewSurface for RecordingPreview {
    fn load_document(&mut self, document: &str) -> Result<(), ClientError> {
        if self.fail {
            return Err(ClientError::Io(std::io::Error::other("disk full")));
        }
        self.documents.push(document.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    deny: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClientError> {
        if self.deny {
            return Err(ClientError::Clipboard("permission denied".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingDownloads {
    delivered: Vec<Download>,
}

impl DownloadSink for RecordingDownloads {
    fn deliver(&mut self, download: &Download) -> Result<(), ClientError> {
        self.delivered.push(download.clone());
        Ok(())
    }
}

fn controller() -> SessionController {
    SessionController::new(&ClientSettings::default())
}

fn sample_artifact() -> GeneratedArtifact {
    GeneratedArtifact::new("<p>hi</p>", "p{color:red}", "console.log(1)")
}

fn severities(controller: &SessionController) -> Vec<Severity> {
    controller
        .notifications()
        .active()
        .iter()
        .map(|n| n.severity)
        .collect()
}

fn messages(controller: &SessionController) -> Vec<String> {
    controller
        .notifications()
        .active()
        .iter()
        .map(|n| n.message.clone())
        .collect()
}

#[tokio::test]
async fn login_form_scenario_fills_panels_and_preview() {
    let backend = FakeBackend::returning(GeneratedArtifact::new("<form></form>", "", ""));
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session
        .submit("create a login form", &backend, &mut preview)
        .await;

    let panels = session.state().panels();
    assert_eq!(panels.get(CodeKind::Markup), "<form></form>");
    assert_eq!(panels.get(CodeKind::Style), "/* No CSS generated */");
    assert_eq!(panels.get(CodeKind::Script), "// No JavaScript generated");
    assert_eq!(preview.documents.len(), 1);
    assert!(preview.documents[0].contains("<form></form>"));

    let requests = backend.requests.lock().expect("requests lock");
    assert_eq!(
        requests[0],
        GenerateUiRequest::new("create a login form", ComponentType::General)
    );
}

#[tokio::test]
async fn successful_submit_appends_user_then_system_entry() {
    let backend = FakeBackend::returning(sample_artifact());
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session.submit("  a pricing table \n", &backend, &mut preview).await;

    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].origin, Origin::User);
    assert_eq!(transcript[0].text, "a pricing table");
    assert_eq!(transcript[1].origin, Origin::System);
    assert_eq!(transcript[1].text, GENERATION_SUCCEEDED);
    assert_eq!(session.state().artifact(), &sample_artifact());
    assert!(session.state().input().is_empty());
    assert!(!session.state().is_generating());
    assert_eq!(
        messages(&session),
        ["Preview updated!", "UI generated successfully!"]
    );
}

#[tokio::test]
async fn empty_success_shows_placeholders_and_skips_preview() {
    let backend = FakeBackend::returning(GeneratedArtifact::default());
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session.submit("an empty card", &backend, &mut preview).await;

    let panels = session.state().panels();
    for kind in CodeKind::ALL {
        assert_eq!(panels.get(kind), kind.placeholder());
    }
    assert!(preview.documents.is_empty());
    assert_eq!(
        messages(&session),
        ["No code to preview yet!", "UI generated successfully!"]
    );
    assert_eq!(
        severities(&session),
        [Severity::Warning, Severity::Success]
    );
    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].text, GENERATION_SUCCEEDED);
    assert!(!session.state().is_generating());
}

#[tokio::test]
async fn blank_prompts_produce_no_entries_and_no_requests() {
    let backend = FakeBackend::returning(sample_artifact());
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    for prompt in ["", "   ", "\n\t "] {
        session.submit(prompt, &backend, &mut preview).await;
    }

    assert_eq!(backend.calls(), 0);
    assert!(session.state().transcript().is_empty());
    assert!(!session.state().is_generating());
    assert_eq!(severities(&session), [Severity::Warning; 3]);
}

#[tokio::test]
async fn reported_failure_keeps_previous_artifact() {
    let mut preview = RecordingPreview::default();
    let mut session = controller();
    session
        .submit(
            "first",
            &FakeBackend::returning(sample_artifact()),
            &mut preview,
        )
        .await;

    let failing = FakeBackend::new(FakeOutcome::Reported("rate limited"));
    session.submit("second", &failing, &mut preview).await;

    assert_eq!(session.state().artifact(), &sample_artifact());
    assert_eq!(session.state().panels().get(CodeKind::Markup), "<p>hi</p>");
    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[3].text, GENERATION_FAILED);
    assert!(!session.state().is_generating());

    let last = session
        .notifications()
        .active()
        .last()
        .expect("failure notification");
    assert_eq!(last.severity, Severity::Danger);
    assert_eq!(last.message, "Error: rate limited");
}

#[tokio::test]
async fn malformed_response_clears_loading_and_reports_detail() {
    let backend = FakeBackend::new(FakeOutcome::Malformed);
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session.submit("navbar", &backend, &mut preview).await;

    assert!(!session.state().is_generating());
    assert!(session.state().artifact().is_empty());
    assert_eq!(session.state().transcript().len(), 2);
    let last = session.notifications().active().last().expect("notification");
    assert_eq!(last.severity, Severity::Danger);
    assert!(last.message.starts_with("Error: malformed response"));
    assert!(preview.documents.is_empty());
}

#[test]
fn loading_flag_spans_request_interval_only() {
    let mut preview = RecordingPreview::default();
    let mut session = controller();
    session.set_input("hero");

    let request = session.begin_submit().expect("request issued");
    assert_eq!(request.prompt, "hero");
    assert!(session.state().is_generating());
    assert_eq!(session.state().transcript().len(), 1);

    session.finish_submit(Err(ApiError::new("boom").into()), &mut preview);
    assert!(!session.state().is_generating());
    assert_eq!(session.state().transcript().len(), 2);
}

#[test]
fn second_submission_while_outstanding_is_rejected() {
    let mut session = controller();
    session.set_input("first");
    assert!(session.begin_submit().is_some());

    session.set_input("second");
    assert!(session.begin_submit().is_none());

    assert_eq!(session.state().transcript().len(), 1);
    assert_eq!(session.state().input(), "second");
    assert_eq!(
        session.notifications().active().last().map(|n| n.message.as_str()),
        Some("A generation is already in progress")
    );
}

#[test]
fn stray_outcome_without_request_is_ignored() {
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session.finish_submit(Ok(sample_artifact()), &mut preview);

    assert!(session.state().artifact().is_empty());
    assert!(session.state().transcript().is_empty());
}

#[test]
fn preview_and_export_fail_softly_without_code() {
    let mut preview = RecordingPreview::default();
    let mut downloads = RecordingDownloads::default();
    let mut session = controller();

    assert!(!session.render_preview(&mut preview));
    assert!(!session.export_document(&mut downloads));

    assert!(preview.documents.is_empty());
    assert!(downloads.delivered.is_empty());
    assert_eq!(
        messages(&session),
        ["No code to preview yet!", "No code to export!"]
    );
}

#[test]
fn export_delivers_html_document_with_fixed_filename() {
    let mut preview = RecordingPreview::default();
    let mut downloads = RecordingDownloads::default();
    let mut session = controller();
    session.set_input("card");
    session.begin_submit().expect("request");
    session.finish_submit(Ok(sample_artifact()), &mut preview);

    assert!(session.export_document(&mut downloads));

    let download = &downloads.delivered[0];
    assert_eq!(download.filename, "flexiui-component.html");
    assert_eq!(download.mime_type, "text/html");
    let html = String::from_utf8(download.contents.clone()).expect("utf-8");
    for fragment in ["<p>hi</p>", "p{color:red}", "console.log(1)"] {
        assert!(html.contains(fragment));
    }
    assert_eq!(
        session.notifications().active().last().map(|n| n.severity),
        Some(Severity::Success)
    );
}

#[test]
fn preview_write_failure_is_reported_as_danger() {
    let mut preview = RecordingPreview {
        fail: true,
        ..RecordingPreview::default()
    };
    let mut session = controller();
    session.set_input("card");
    session.begin_submit().expect("request");
    session.finish_submit(Ok(sample_artifact()), &mut preview);

    assert!(messages(&session)
        .iter()
        .any(|m| m.starts_with("Failed to update preview")));
}

#[test]
fn copy_with_empty_field_never_touches_clipboard() {
    let mut preview = RecordingPreview::default();
    let mut clipboard = RecordingClipboard::default();
    let mut session = controller();
    session.set_input("markup only");
    session.begin_submit().expect("request");
    session.finish_submit(
        Ok(GeneratedArtifact::new("<nav></nav>", "", "")),
        &mut preview,
    );

    assert!(!session.copy(CodeKind::Style, &mut clipboard));
    assert!(!session.copy(CodeKind::Script, &mut clipboard));
    assert!(clipboard.writes.is_empty());

    assert!(session.copy(CodeKind::Markup, &mut clipboard));
    assert_eq!(clipboard.writes, ["<nav></nav>"]);
    assert_eq!(
        session.notifications().active().last().map(|n| n.message.as_str()),
        Some("HTML copied to clipboard!")
    );
}

#[test]
fn clipboard_rejection_is_reported_without_state_change() {
    let mut preview = RecordingPreview::default();
    let mut clipboard = RecordingClipboard {
        deny: true,
        ..RecordingClipboard::default()
    };
    let mut session = controller();
    session.set_input("x");
    session.begin_submit().expect("request");
    session.finish_submit(Ok(sample_artifact()), &mut preview);
    let transcript_len = session.state().transcript().len();

    assert!(!session.copy(CodeKind::Script, &mut clipboard));

    assert_eq!(session.state().transcript().len(), transcript_len);
    let last = session.notifications().active().last().expect("notification");
    assert_eq!(last.severity, Severity::Danger);
    assert_eq!(last.message, "Failed to copy!");
}

#[test]
fn panels_show_placeholders_before_first_generation() {
    let session = controller();
    for kind in CodeKind::ALL {
        assert_eq!(session.state().panels().get(kind), kind.placeholder());
    }
}

#[test]
fn theme_toggle_is_an_involution() {
    let mut session = controller();
    let original = session.state().theme().clone();
    session.toggle_theme();
    assert_ne!(session.state().theme(), &original);
    session.toggle_theme();
    assert_eq!(session.state().theme(), &original);
}

#[tokio::test]
async fn quick_prompt_runs_normal_submission() {
    let backend = FakeBackend::returning(sample_artifact());
    let mut preview = RecordingPreview::default();
    let mut session = controller();

    session.submit_quick_prompt(3, &backend, &mut preview).await;
    session.submit_quick_prompt(99, &backend, &mut preview).await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(
        session.state().transcript()[0].text,
        crate::QUICK_PROMPTS[3].prompt
    );
    assert_eq!(
        session.notifications().active().last().map(|n| n.message.as_str()),
        Some("Unknown quick prompt")
    );
}

#[test]
fn configured_component_type_is_sent() {
    let settings = ClientSettings {
        component_type: ComponentType::Footer,
        ..ClientSettings::default()
    };
    let mut session = SessionController::new(&settings);
    session.set_input("site footer");
    let request = session.begin_submit().expect("request");
    assert_eq!(request.component_type, ComponentType::Footer);
}
