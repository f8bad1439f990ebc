use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use arboard::Clipboard;
use chrono::Local;
use client_core::document::preview_document;
use client_core::{
    ClientError, ClientSettings, ClipboardSink, DirectoryDownloadSink, FilePreviewSurface,
    SessionController, QUICK_PROMPTS,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{CodeKind, Origin, Severity};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{
    classify_health_failure, err_label, UiError, UiErrorContext, UiEvent,
};
use crate::controller::orchestration::dispatch_backend_command;

const IDLE_REPAINT: Duration = Duration::from_millis(100);
const TOAST_SPACING: f32 = 52.0;
const WELCOME_MESSAGE: &str = "Welcome to FlexiUI AI Generator!";

/// Filesystem locations the desktop app writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub preview_path: PathBuf,
    pub download_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve(data_dir: Option<&Path>) -> Self {
        let data_root = data_dir
            .map(Path::to_path_buf)
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("flexiui")))
            .unwrap_or_else(|| std::env::temp_dir().join("flexiui"));
        let download_dir = dirs::download_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            preview_path: data_root.join("preview.html"),
            download_dir,
        }
    }
}

#[derive(Default)]
struct ArboardClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClientError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|err| ClientError::Clipboard(err.to_string()))?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(|err| ClientError::Clipboard(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkspaceTab {
    Preview,
    Code(CodeKind),
}

pub struct FlexiUiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    session: SessionController,
    preview: FilePreviewSurface,
    downloads: DirectoryDownloadSink,
    clipboard: ArboardClipboard,
    export_filename: String,
    endpoint: String,
    status: String,
    status_banner: Option<UiError>,
    tab: WorkspaceTab,
    applied_dark: Option<bool>,
    /// Preview document text, rebuilt only when a new artifact arrives.
    preview_source: Option<String>,
}

impl FlexiUiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &ClientSettings,
        paths: AppPaths,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            session: SessionController::new(settings),
            preview: FilePreviewSurface::new(paths.preview_path),
            downloads: DirectoryDownloadSink::new(paths.download_dir),
            clipboard: ArboardClipboard::default(),
            export_filename: settings.export_filename.clone(),
            endpoint: settings.api_url.clone(),
            status: "Starting...".to_string(),
            status_banner: None,
            tab: WorkspaceTab::Preview,
            applied_dark: None,
            preview_source: None,
        };
        app.session.notify(WELCOME_MESSAGE, Severity::Info);
        let _ = dispatch_backend_command(&app.cmd_tx, BackendCommand::CheckHealth, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::BackendReady { endpoint } => {
                    self.status = format!("Ready: {endpoint}");
                    self.endpoint = endpoint;
                }
                UiEvent::GenerationFinished(outcome) => {
                    let succeeded = outcome.is_ok();
                    if let Err(err) = &outcome {
                        self.status_banner =
                            Some(UiError::from_client_error(UiErrorContext::Generate, err));
                    }
                    self.session.finish_submit(outcome, &mut self.preview);
                    if succeeded {
                        self.status_banner = None;
                        self.status = "Generation complete".to_string();
                        let artifact = self.session.state().artifact();
                        self.preview_source =
                            (!artifact.is_empty()).then(|| preview_document(artifact));
                        if self.preview_source.is_some() {
                            self.tab = WorkspaceTab::Preview;
                        }
                    } else {
                        self.status = "Generation failed".to_string();
                    }
                }
                UiEvent::HealthChecked(Ok(health)) => {
                    self.status = format!(
                        "Generator {} (model key {})",
                        health.status,
                        if health.groq_api_configured { "configured" } else { "missing" }
                    );
                    if !health.is_healthy() {
                        self.session.notify(
                            format!("Generator reported status '{}'", health.status),
                            Severity::Warning,
                        );
                    }
                }
                UiEvent::HealthChecked(Err(message)) => {
                    self.status = classify_health_failure(&message);
                    self.session.notify(self.status.clone(), Severity::Warning);
                    self.status_banner =
                        Some(UiError::from_message(UiErrorContext::HealthCheck, message));
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status = format!("{}: {}", err_label(err.category()), err.message());
                    if err.context() == UiErrorContext::BackendStartup
                        && self.session.state().is_generating()
                    {
                        self.session.finish_submit(
                            Err(ClientError::Unavailable(err.message().to_string())),
                            &mut self.preview,
                        );
                    }
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn try_submit(&mut self) {
        let Some(request) = self.session.begin_submit() else {
            return;
        };
        let cmd = BackendCommand::Generate { request };
        if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status).is_err() {
            let reason = self.status.clone();
            self.status_banner = Some(UiError::from_message(UiErrorContext::Generate, reason.clone()));
            self.session
                .finish_submit(Err(ClientError::Unavailable(reason)), &mut self.preview);
        }
    }

    fn refresh_preview(&mut self, open: bool) {
        if self.session.render_preview(&mut self.preview) && open {
            self.open_preview();
        }
    }

    fn open_preview(&mut self) {
        if let Err(err) = open_in_browser(self.preview.path()) {
            self.session
                .notify(format!("Failed to open browser: {err}"), Severity::Danger);
        }
    }

    fn export(&mut self) {
        if self.session.export_document(&mut self.downloads) {
            self.status = format!(
                "Saved {}",
                self.downloads.path_for(&self.export_filename).display()
            );
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let dark = self.session.state().theme().is_dark();
        if self.applied_dark == Some(dark) {
            return;
        }
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.applied_dark = Some(dark);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("FlexiUI AI Generator");
                ui.separator();
                ui.small(&self.endpoint);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = if self.session.state().theme().is_dark() {
                        "☀ Light"
                    } else {
                        "☾ Dark"
                    };
                    if ui.button(theme_label).clicked() {
                        self.session.toggle_theme();
                    }
                    if ui.button("Export").clicked() {
                        self.export();
                    }
                    if ui.button("Refresh preview").clicked() {
                        self.refresh_preview(true);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(&self.status);
                if self.session.state().is_generating() {
                    ui.spinner();
                }
            });
        });
    }

    fn show_chat_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("chat_panel")
            .resizable(true)
            .default_width(380.0)
            .min_width(300.0)
            .show(ctx, |ui| {
                egui::TopBottomPanel::bottom("composer_panel")
                    .resizable(false)
                    .show_inside(ui, |ui| self.show_composer(ui));
                egui::CentralPanel::default().show_inside(ui, |ui| {
                    ui.heading("Chat");
                    ui.separator();
                    self.show_transcript(ui);
                });
            });
    }

    fn show_transcript(&self, ui: &mut egui::Ui) {
        let text_color = egui::Color32::from_rgb(33, 37, 41);
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let transcript = self.session.state().transcript();
                if transcript.is_empty() {
                    ui.weak("Describe a component, or pick a quick prompt below.");
                }
                for entry in transcript {
                    let (fill, author) = match entry.origin {
                        Origin::User => (egui::Color32::from_rgb(207, 226, 255), "You"),
                        Origin::System => (egui::Color32::from_rgb(226, 227, 229), "FlexiUI"),
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(author).strong().color(text_color));
                                ui.label(
                                    egui::RichText::new(
                                        entry.at.with_timezone(&Local).format("%H:%M").to_string(),
                                    )
                                    .small()
                                    .color(egui::Color32::from_gray(110)),
                                );
                            });
                            ui.label(egui::RichText::new(&entry.text).color(text_color));
                        });
                    ui.add_space(6.0);
                }
            });
    }

    fn show_composer(&mut self, ui: &mut egui::Ui) {
        let generating = self.session.state().is_generating();
        let mut submit = false;
        let mut quick = None;

        ui.add_space(4.0);
        ui.add_enabled_ui(!generating, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
                    if ui
                        .small_button(prompt.label)
                        .on_hover_text(prompt.prompt)
                        .clicked()
                    {
                        quick = Some(index);
                    }
                }
            });
            let response = ui.add(
                egui::TextEdit::multiline(self.session.input_mut())
                    .hint_text("Describe the UI component you want... (Ctrl+Enter to send)")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            let send_shortcut =
                ui.input(|input| input.modifiers.command && input.key_pressed(egui::Key::Enter));
            if response.has_focus() && send_shortcut {
                submit = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Send").clicked() {
                    submit = true;
                }
            });
        });
        ui.add_space(4.0);

        if let Some(index) = quick {
            submit = self.session.select_quick_prompt(index);
        }
        if submit {
            self.try_submit();
        }
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, WorkspaceTab::Preview, "Preview");
                for kind in CodeKind::ALL {
                    ui.selectable_value(&mut self.tab, WorkspaceTab::Code(kind), kind.label());
                }
            });
            ui.separator();
            match self.tab {
                WorkspaceTab::Preview => self.show_preview_tab(ui),
                WorkspaceTab::Code(kind) => self.show_code_tab(ui, kind),
            }
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = &self.status_banner else {
            return;
        };
        let mut dismiss = false;
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(248, 215, 218))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} error: {}",
                            err_label(banner.category()),
                            banner.message()
                        ))
                        .color(egui::Color32::from_rgb(88, 21, 28)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            dismiss = true;
                        }
                    });
                });
            });
        if dismiss {
            self.status_banner = None;
        }
        ui.add_space(6.0);
    }

    fn show_preview_tab(&mut self, ui: &mut egui::Ui) {
        let Some(document) = &self.preview_source else {
            ui.weak("Nothing to preview yet. Send a prompt to generate a component.");
            return;
        };
        let mut open = false;
        let mut refresh = false;
        ui.horizontal(|ui| {
            if ui.button("Open in browser").clicked() {
                open = true;
            }
            if ui.button("Re-render").clicked() {
                refresh = true;
            }
            ui.small(self.preview.path().display().to_string());
        });
        ui.separator();

        let mut view = document.as_str();
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut view)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });

        if refresh {
            self.refresh_preview(false);
        }
        if open {
            self.open_preview();
        }
    }

    fn show_code_tab(&mut self, ui: &mut egui::Ui, kind: CodeKind) {
        let mut copy = false;
        ui.horizontal(|ui| {
            ui.strong(format!("{kind} source"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy").clicked() {
                    copy = true;
                }
            });
        });
        if copy {
            self.session.copy(kind, &mut self.clipboard);
        }

        let mut view = self.session.state().panels().get(kind);
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut view)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn show_loading_overlay(&self, ctx: &egui::Context) {
        if !self.session.state().is_generating() {
            return;
        }
        egui::Window::new("generating")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating your UI component...");
                });
            });
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        self.session.notifications_mut().expire(Instant::now());

        let mut dismissed = Vec::new();
        for (slot, note) in self.session.notifications().active().iter().rev().enumerate() {
            let (fill, text) = toast_colors(note.severity);
            egui::Area::new(egui::Id::new(("toast", note.id)))
                .order(egui::Order::Foreground)
                .anchor(
                    egui::Align2::RIGHT_BOTTOM,
                    egui::vec2(-16.0, -36.0 - slot as f32 * TOAST_SPACING),
                )
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(340.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&note.message).color(text));
                                if ui.small_button("✕").clicked() {
                                    dismissed.push(note.id);
                                }
                            });
                        });
                });
        }
        for id in dismissed {
            self.session.notifications_mut().dismiss(id);
        }
    }
}

impl eframe::App for FlexiUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.show_top_bar(ctx);
        self.show_chat_panel(ctx);
        self.show_workspace(ctx);
        self.show_loading_overlay(ctx);
        self.show_toasts(ctx);

        let wake = self
            .session
            .notifications()
            .next_expiry(Instant::now())
            .map_or(IDLE_REPAINT, |remaining| remaining.min(IDLE_REPAINT));
        ctx.request_repaint_after(wake);
    }
}

fn toast_colors(severity: Severity) -> (egui::Color32, egui::Color32) {
    let light_text = egui::Color32::WHITE;
    let dark_text = egui::Color32::from_rgb(33, 37, 41);
    match severity {
        Severity::Info => (egui::Color32::from_rgb(13, 202, 240), dark_text),
        Severity::Success => (egui::Color32::from_rgb(25, 135, 84), light_text),
        Severity::Warning => (egui::Color32::from_rgb(255, 193, 7), dark_text),
        Severity::Danger => (egui::Color32::from_rgb(220, 53, 69), light_text),
    }
}

fn open_in_browser(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", "", &path.to_string_lossy()])
        .spawn();

    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(path).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let result = std::process::Command::new("xdg-open").arg(path).spawn();

    result.map(|_| ())
}
