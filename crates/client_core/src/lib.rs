pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod notifications;
pub mod quick_prompts;
pub mod session;
pub mod surfaces;
pub mod theme;

pub use client::{GenerationBackend, GenerationClient};
pub use config::ClientSettings;
pub use error::ClientError;
pub use notifications::{Notification, NotificationCenter, NotificationId};
pub use quick_prompts::{QuickPrompt, QUICK_PROMPTS};
pub use session::{CodePanels, SessionController, SessionState};
pub use surfaces::{
    ClipboardSink, DirectoryDownloadSink, Download, DownloadSink, FilePreviewSurface,
    PreviewSurface,
};
pub use theme::ThemeState;
