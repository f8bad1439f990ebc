//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{ClientSettings, GenerationBackend, GenerationClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. It owns a tokio runtime and the HTTP
/// client, and runs commands one at a time until the UI drops its sender.
pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match GenerationClient::new(&settings) {
            Ok(client) => client,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_client_error(
                    UiErrorContext::BackendStartup,
                    &err,
                )));
                tracing::error!("failed to build generation client: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::BackendReady {
            endpoint: client.generate_url().to_string(),
        });

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Generate { request } => {
                        let outcome = client.generate(&request).await;
                        if ui_tx.send(UiEvent::GenerationFinished(outcome)).is_err() {
                            break;
                        }
                    }
                    BackendCommand::CheckHealth => {
                        let outcome = client.health().await.map_err(|err| err.to_string());
                        let _ = ui_tx.try_send(UiEvent::HealthChecked(outcome));
                    }
                }
            }
            tracing::info!("backend command channel closed; worker exiting");
        });
    });
}
