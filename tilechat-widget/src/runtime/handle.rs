use tilechat_core::{CarouselViewer, ViewerConfig, ViewerEvent, ViewerMessage};
use tilechat_model::Item;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::driver::{self, Driver, ViewerCommand};
use super::snapshot::ViewerSnapshot;

/// A mounted viewer running on its own task.
///
/// Dropping the handle aborts the task; [`unmount`](Self::unmount) does the
/// same but waits for the final snapshot to be published.
#[derive(Debug)]
pub struct ViewerHandle {
    commands: mpsc::UnboundedSender<ViewerCommand>,
    snapshots: watch::Receiver<ViewerSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl ViewerHandle {
    /// Mount `items` and start driving the viewer. Must be called from
    /// within a tokio runtime.
    ///
    /// `visibility` carries intersection ratios; pass `None` when the host
    /// cannot observe them and the viewer will treat itself as on screen.
    pub fn mount(
        items: Vec<Item>,
        config: ViewerConfig,
        visibility: Option<watch::Receiver<f32>>,
        events: mpsc::UnboundedSender<ViewerEvent>,
    ) -> Self {
        let viewer = CarouselViewer::mount(items, config, driver::now());
        let (snapshots_tx, snapshots_rx) =
            watch::channel(ViewerSnapshot::capture(&viewer));
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();

        log::debug!(
            "Mounting viewer with {} items (page_size={}, tick={:?})",
            viewer.items().len(),
            config.page_size,
            config.tick_interval()
        );

        let task = tokio::spawn(
            Driver {
                viewer,
                commands: commands_rx,
                visibility,
                snapshots: snapshots_tx,
                events,
            }
            .run(),
        );

        Self {
            commands: commands_tx,
            snapshots: snapshots_rx,
            task: Some(task),
        }
    }

    /// Queue a message. Returns false once the viewer has been torn down.
    pub fn send(&self, message: ViewerMessage) -> bool {
        self.commands.send(ViewerCommand::Message(message)).is_ok()
    }

    pub fn next(&self) -> bool {
        self.send(ViewerMessage::Next)
    }

    pub fn previous(&self) -> bool {
        self.send(ViewerMessage::Previous)
    }

    pub fn go_to(&self, index: usize) -> bool {
        self.send(ViewerMessage::GoTo(index))
    }

    pub fn toggle_play(&self) -> bool {
        self.send(ViewerMessage::TogglePlay)
    }

    pub fn set_playing(&self, playing: bool) -> bool {
        self.send(ViewerMessage::SetPlaying(playing))
    }

    pub fn wheel(&self, delta_x: f32, delta_y: f32) -> bool {
        self.send(ViewerMessage::Wheel { delta_x, delta_y })
    }

    pub fn load_more(&self) -> bool {
        self.send(ViewerMessage::LoadMore)
    }

    pub fn change_category(&self) -> bool {
        self.send(ViewerMessage::ChangeCategory)
    }

    pub fn open_details(&self) -> bool {
        self.send(ViewerMessage::OpenDetails)
    }

    /// Show a different item list (new category or size).
    pub fn replace_items(&self, items: Vec<Item>) -> bool {
        self.commands.send(ViewerCommand::ReplaceItems(items)).is_ok()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ViewerSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewerSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Tear the viewer down and wait for its task to finish.
    pub async fn unmount(mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        if self.commands.send(ViewerCommand::Unmount).is_err() {
            task.abort();
        }
        if let Err(err) = task.await
            && !err.is_cancelled()
        {
            log::warn!("Viewer task ended abnormally: {err}");
        }
    }
}

impl Drop for ViewerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
