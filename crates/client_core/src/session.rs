//! UI generation session: state plus the commands the front-ends invoke.

use shared::{
    domain::{CodeKind, ComponentType, GeneratedArtifact, Severity, TranscriptEntry},
    protocol::GenerateUiRequest,
};
use tracing::{debug, error, info, warn};

use crate::{
    client::GenerationBackend,
    config::ClientSettings,
    document,
    error::ClientError,
    notifications::{NotificationCenter, NotificationId},
    quick_prompts::quick_prompt,
    surfaces::{ClipboardSink, Download, DownloadSink, PreviewSurface},
    theme::ThemeState,
};

pub const GENERATION_SUCCEEDED: &str =
    "✅ UI component generated successfully! Check the preview and code tabs.";
pub const GENERATION_FAILED: &str =
    "❌ Sorry, there was an error generating the UI. Please try again.";

/// Read-only text shown in the three code displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePanels {
    markup: String,
    style: String,
    script: String,
}

impl Default for CodePanels {
    fn default() -> Self {
        Self::from_artifact(&GeneratedArtifact::default())
    }
}

impl CodePanels {
    pub fn from_artifact(artifact: &GeneratedArtifact) -> Self {
        let panel = |kind: CodeKind| {
            let text = artifact.field(kind);
            if text.is_empty() {
                kind.placeholder().to_string()
            } else {
                text.to_string()
            }
        };
        Self {
            markup: panel(CodeKind::Markup),
            style: panel(CodeKind::Style),
            script: panel(CodeKind::Script),
        }
    }

    pub fn get(&self, kind: CodeKind) -> &str {
        match kind {
            CodeKind::Markup => &self.markup,
            CodeKind::Style => &self.style,
            CodeKind::Script => &self.script,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    artifact: GeneratedArtifact,
    transcript: Vec<TranscriptEntry>,
    generating: bool,
    panels: CodePanels,
    theme: ThemeState,
    input: String,
}

impl SessionState {
    pub fn artifact(&self) -> &GeneratedArtifact {
        &self.artifact
    }

    /// Append-only; insertion order is display order.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Single-flight flag; also drives the loading indicator.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn panels(&self) -> &CodePanels {
        &self.panels
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

pub struct SessionController {
    state: SessionState,
    notifications: NotificationCenter,
    component_type: ComponentType,
    export_filename: String,
}

impl SessionController {
    pub fn new(settings: &ClientSettings) -> Self {
        Self {
            state: SessionState::default(),
            notifications: NotificationCenter::new(settings.toast_duration()),
            component_type: settings.component_type,
            export_filename: settings.export_filename.clone(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.state.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.push(message, severity)
    }

    /// Validates the input and performs every pre-request effect.
    ///
    /// Returns the request to issue, or `None` when the submission was
    /// rejected (empty prompt or a generation already outstanding).
    pub fn begin_submit(&mut self) -> Option<GenerateUiRequest> {
        let prompt = self.state.input.trim().to_string();
        if prompt.is_empty() {
            self.notify("Please enter a prompt!", Severity::Warning);
            return None;
        }
        if self.state.generating {
            self.notify("A generation is already in progress", Severity::Warning);
            return None;
        }

        self.state.transcript.push(TranscriptEntry::user(prompt.clone()));
        self.state.input.clear();
        self.state.generating = true;
        debug!(prompt_len = prompt.len(), "generation request started");
        Some(GenerateUiRequest::new(prompt, self.component_type))
    }

    /// Applies the outcome of the request issued by [`begin_submit`].
    ///
    /// [`begin_submit`]: SessionController::begin_submit
    pub fn finish_submit(
        &mut self,
        outcome: Result<GeneratedArtifact, ClientError>,
        preview: &mut dyn PreviewSurface,
    ) {
        if !self.state.generating {
            warn!("generation outcome arrived with no request outstanding; ignoring");
            return;
        }
        self.state.generating = false;

        match outcome {
            Ok(artifact) => {
                self.state.artifact = artifact;
                self.state.panels = CodePanels::from_artifact(&self.state.artifact);
                self.render_preview(preview);
                self.state
                    .transcript
                    .push(TranscriptEntry::system(GENERATION_SUCCEEDED));
                self.notify("UI generated successfully!", Severity::Success);
            }
            Err(err) => {
                error!(error = %err, "ui generation failed");
                self.state
                    .transcript
                    .push(TranscriptEntry::system(GENERATION_FAILED));
                self.notify(format!("Error: {err}"), Severity::Danger);
            }
        }
    }

    pub async fn submit<B>(&mut self, prompt: &str, backend: &B, preview: &mut dyn PreviewSurface)
    where
        B: GenerationBackend + ?Sized,
    {
        self.set_input(prompt);
        self.submit_input(backend, preview).await;
    }

    pub async fn submit_input<B>(&mut self, backend: &B, preview: &mut dyn PreviewSurface)
    where
        B: GenerationBackend + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = backend.generate(&request).await;
        self.finish_submit(outcome, preview);
    }

    /// Places a canned prompt in the input. Returns false for an unknown index.
    pub fn select_quick_prompt(&mut self, index: usize) -> bool {
        match quick_prompt(index) {
            Some(quick) => {
                self.set_input(quick.prompt);
                true
            }
            None => {
                self.notify("Unknown quick prompt", Severity::Warning);
                false
            }
        }
    }

    pub async fn submit_quick_prompt<B>(
        &mut self,
        index: usize,
        backend: &B,
        preview: &mut dyn PreviewSurface,
    ) where
        B: GenerationBackend + ?Sized,
    {
        if self.select_quick_prompt(index) {
            self.submit_input(backend, preview).await;
        }
    }

    /// Re-renders the preview surface. Returns true when a document was assigned.
    pub fn render_preview(&mut self, preview: &mut dyn PreviewSurface) -> bool {
        if self.state.artifact.is_empty() {
            self.notify("No code to preview yet!", Severity::Warning);
            return false;
        }

        let doc = document::preview_document(&self.state.artifact);
        match preview.load_document(&doc) {
            Ok(()) => {
                self.notify("Preview updated!", Severity::Info);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load preview document");
                self.notify(format!("Failed to update preview: {err}"), Severity::Danger);
                false
            }
        }
    }

    pub fn copy(&mut self, kind: CodeKind, clipboard: &mut dyn ClipboardSink) -> bool {
        if self.state.artifact.field(kind).is_empty() {
            self.notify("No code to copy!", Severity::Warning);
            return false;
        }

        match clipboard.write_text(self.state.artifact.field(kind)) {
            Ok(()) => {
                self.notify(format!("{kind} copied to clipboard!"), Severity::Success);
                true
            }
            Err(err) => {
                error!(kind = %kind, error = %err, "clipboard write failed");
                self.notify("Failed to copy!", Severity::Danger);
                false
            }
        }
    }

    pub fn export_document(&mut self, sink: &mut dyn DownloadSink) -> bool {
        if self.state.artifact.is_empty() {
            self.notify("No code to export!", Severity::Warning);
            return false;
        }

        let download = Download {
            filename: self.export_filename.clone(),
            mime_type: document::HTML_MIME_TYPE,
            contents: document::export_document(&self.state.artifact).into_bytes(),
        };
        match sink.deliver(&download) {
            Ok(()) => {
                info!(filename = %download.filename, "exported generated component");
                self.notify("Code exported successfully!", Severity::Success);
                true
            }
            Err(err) => {
                error!(filename = %download.filename, error = %err, "export failed");
                self.notify(format!("Failed to export: {err}"), Severity::Danger);
                false
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme.toggle();
        debug!(dark = self.state.theme.is_dark(), "theme toggled");
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
