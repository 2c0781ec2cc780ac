//! # ember-client
//!
//! Friends list, add-friend form and main-window wiring for the Ember
//! desktop client.
//!
//! This crate has no binary of its own. The embedding frontend calls
//! [`init_tracing`], loads a [`ClientConfig`] with
//! [`ClientConfig::from_env`], and hands [`run`] a constructor for its
//! [`Core`] together with the two ends of the UI channel pair.

pub mod add_friend;
pub mod config;
pub mod controller;
pub mod core_bridge;
pub mod events;
pub mod state;
pub mod window;

use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{BootstrapNode, ClientConfig};
use crate::core_bridge::{spawn_core, Core};
use crate::events::UiEvent;
use crate::state::OurUserItem;
use crate::window::{MainWindow, UiAction};

/// Install the global tracing subscriber. Respects `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ember_client=debug,ember_roster=debug,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Start the core built by `make_core` and run the main window until the
/// user quits, then stop the core.
///
/// Fails before starting anything if no bootstrap node is configured.
pub async fn run<C, F>(
    config: ClientConfig,
    make_core: F,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    actions: mpsc::UnboundedReceiver<UiAction>,
) -> anyhow::Result<()>
where
    C: Core,
    F: FnOnce(&BootstrapNode) -> C,
{
    let bootstrap = config.require_bootstrap()?;
    info!(
        user_id = %bootstrap.user_id,
        ip = %bootstrap.ip,
        port = bootstrap.port,
        "Starting Ember client"
    );

    let (core, notifications) = spawn_core(make_core(bootstrap));
    let window = MainWindow::new(&config, OurUserItem::new(), ui_tx, core.commands());

    window.run(notifications, actions).await;
    core.shutdown().await
}

#[cfg(test)]
mod tests {
    use futures::future::BoxFuture;

    use ember_shared::protocol::{CoreCommand, CoreNotification};
    use ember_shared::types::PeerId;

    use super::*;

    /// Announces the bootstrap id as the local id, then records commands.
    struct RecordingCore {
        local_id: PeerId,
        seen: mpsc::UnboundedSender<CoreCommand>,
    }

    impl Core for RecordingCore {
        fn run(
            self,
            mut commands: mpsc::UnboundedReceiver<CoreCommand>,
            notifications: mpsc::Sender<CoreNotification>,
        ) -> BoxFuture<'static, ()> {
            Box::pin(async move {
                let _ = notifications
                    .send(CoreNotification::LocalUserIdGenerated { id: self.local_id })
                    .await;
                while let Some(command) = commands.recv().await {
                    let stop = command == CoreCommand::Shutdown;
                    let _ = self.seen.send(command);
                    if stop {
                        break;
                    }
                }
            })
        }
    }

    #[tokio::test]
    async fn test_run_requires_bootstrap() {
        let (ui_tx, _ui_rx) = mpsc::unbounded_channel();
        let (_action_tx, action_rx) = mpsc::unbounded_channel();
        let (seen_tx, _seen_rx) = mpsc::unbounded_channel();

        let result = run(
            ClientConfig::default(),
            |_| RecordingCore {
                local_id: PeerId::new("me"),
                seen: seen_tx,
            },
            ui_tx,
            action_rx,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let config = ClientConfig {
            bootstrap: Some(BootstrapNode::parse("BOOT", "127.0.0.1", "33445").unwrap()),
            ..ClientConfig::default()
        };
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        let client = tokio::spawn(run(
            config,
            |node| RecordingCore {
                local_id: node.user_id.clone(),
                seen: seen_tx,
            },
            ui_tx,
            action_rx,
        ));

        assert_eq!(
            ui_rx.recv().await.unwrap(),
            UiEvent::LocalUserIdGenerated {
                id: PeerId::new("BOOT")
            }
        );

        action_tx
            .send(UiAction::SendMessage {
                id: PeerId::new("a"),
                message: "hi".into(),
            })
            .unwrap();
        action_tx.send(UiAction::Quit).unwrap();

        client.await.unwrap().unwrap();

        assert_eq!(
            seen_rx.recv().await.unwrap(),
            CoreCommand::MessageSent {
                id: PeerId::new("a"),
                message: "hi".into()
            }
        );
        assert_eq!(seen_rx.recv().await.unwrap(), CoreCommand::Shutdown);
    }
}
