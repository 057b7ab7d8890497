use std::future::pending;
use std::time::Instant;

use tilechat_core::{CarouselViewer, ViewerEvent, ViewerMessage};
use tilechat_model::Item;
use tokio::sync::{mpsc, watch};

use super::snapshot::ViewerSnapshot;

#[derive(Debug)]
pub(crate) enum ViewerCommand {
    Message(ViewerMessage),
    ReplaceItems(Vec<Item>),
    Unmount,
}

pub(crate) struct Driver {
    pub viewer: CarouselViewer<Item>,
    pub commands: mpsc::UnboundedReceiver<ViewerCommand>,
    pub visibility: Option<watch::Receiver<f32>>,
    pub snapshots: watch::Sender<ViewerSnapshot>,
    pub events: mpsc::UnboundedSender<ViewerEvent>,
}

/// Virtual-time aware "now" for the core.
pub(crate) fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl Driver {
    pub async fn run(mut self) {
        self.connect_visibility();
        self.publish();

        loop {
            let deadline = self.viewer.next_deadline();
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(ViewerCommand::Message(message)) => {
                        let events = self.viewer.update(message, now());
                        self.forward(events);
                    }
                    Some(ViewerCommand::ReplaceItems(items)) => {
                        let events = self.viewer.replace_items(items, now());
                        self.forward(events);
                    }
                    Some(ViewerCommand::Unmount) | None => break,
                },

                ratio = next_ratio(&mut self.visibility) => {
                    let message = match ratio {
                        Some(ratio) => ViewerMessage::Intersection { ratio },
                        None => {
                            log::debug!(
                                "Visibility source closed, assuming visible"
                            );
                            self.visibility = None;
                            ViewerMessage::VisibilityUnsupported
                        }
                    };
                    let events = self.viewer.update(message, now());
                    self.forward(events);
                }

                () = sleep_until(deadline) => {
                    let events = self.viewer.poll(now());
                    self.forward(events);
                }
            }

            self.publish();
        }

        self.viewer.unmount();
        self.publish();
    }

    fn connect_visibility(&mut self) {
        let message = match self.visibility.as_mut() {
            Some(rx) => ViewerMessage::Intersection {
                ratio: *rx.borrow_and_update(),
            },
            None => ViewerMessage::VisibilityUnsupported,
        };
        let events = self.viewer.update(message, now());
        self.forward(events);
    }

    fn forward(&self, events: Vec<ViewerEvent>) {
        for event in events {
            log::debug!("Viewer event: {event:?}");
            if self.events.send(event).is_err() {
                log::debug!("Viewer event receiver dropped");
                break;
            }
        }
    }

    fn publish(&self) {
        let snapshot = ViewerSnapshot::capture(&self.viewer);
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

async fn next_ratio(
    visibility: &mut Option<watch::Receiver<f32>>,
) -> Option<f32> {
    match visibility {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(*rx.borrow_and_update()),
            Err(_) => None,
        },
        None => pending().await,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            let deadline = tokio::time::Instant::from_std(deadline);
            tokio::time::sleep_until(deadline).await
        }
        None => pending().await,
    }
}
