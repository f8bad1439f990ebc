//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. On failure the reason is written
/// to `status` and the command is returned to the caller.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), BackendCommand> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(cmd)
        }
        Err(TrySendError::Disconnected(cmd)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            Err(cmd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::{domain::ComponentType, protocol::GenerateUiRequest};

    #[test]
    fn queues_command_when_worker_is_listening() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::CheckHealth, &mut status)
            .expect("queue accepts command");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::CheckHealth)));
        assert!(status.is_empty());
    }

    #[test]
    fn returns_command_when_worker_is_gone() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        let cmd = BackendCommand::Generate {
            request: GenerateUiRequest::new("navbar", ComponentType::General),
        };
        let returned = dispatch_backend_command(&tx, cmd, &mut status);
        assert!(matches!(returned, Err(BackendCommand::Generate { .. })));
        assert!(status.contains("disconnected"));
    }
}
