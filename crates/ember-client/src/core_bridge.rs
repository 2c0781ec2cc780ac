//! Runs the networking core on its own task.
//!
//! The core never touches roster state. It receives [`CoreCommand`]s and
//! reports [`CoreNotification`]s over channels; the window loop drains the
//! notification channel and applies each one on its own task, so every
//! roster mutation happens in one place.

use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use ember_shared::constants::CORE_NOTIFICATION_CAPACITY;
use ember_shared::protocol::{CoreCommand, CoreNotification};

/// The peer-to-peer networking engine.
pub trait Core: Send + 'static {
    /// Serve commands until [`CoreCommand::Shutdown`] arrives or the command
    /// channel closes.
    fn run(
        self,
        commands: mpsc::UnboundedReceiver<CoreCommand>,
        notifications: mpsc::Sender<CoreNotification>,
    ) -> BoxFuture<'static, ()>;
}

/// Handle to a spawned core task.
pub struct CoreHandle {
    commands: mpsc::UnboundedSender<CoreCommand>,
    task: JoinHandle<()>,
}

/// Spawn `core` on a background tokio task.
///
/// Returns the handle used to command and stop it, plus the receiving end
/// of its notifications.
pub fn spawn_core<C: Core>(core: C) -> (CoreHandle, mpsc::Receiver<CoreNotification>) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (notif_tx, notif_rx) = mpsc::channel(CORE_NOTIFICATION_CAPACITY);

    let task = tokio::spawn(core.run(cmd_rx, notif_tx));
    info!("Core task started");

    (
        CoreHandle {
            commands: cmd_tx,
            task,
        },
        notif_rx,
    )
}

impl CoreHandle {
    pub fn commands(&self) -> mpsc::UnboundedSender<CoreCommand> {
        self.commands.clone()
    }

    /// Ask the core to stop and wait for its task to finish.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        if self.commands.send(CoreCommand::Shutdown).is_err() {
            warn!("Core already stopped before shutdown");
        }
        drop(self.commands);
        self.task.await?;
        info!("Core task stopped");
        Ok(())
    }
}
