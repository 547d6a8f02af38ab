use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use notify::event::{Event, EventKind};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, trace, warn};

use super::{WatchError, WatchEvent, WatchEventKind};
use crate::seq::{Cursor, ExhaustedError};

enum Message {
    Event(notify::Result<Event>),
    Interrupt,
}

/// A handle which ends the wait of the [`Watch`] it was taken from. It can be cloned and sent to
/// other threads.
#[derive(Debug, Clone)]
pub struct Interrupter {
    sender: Sender<Message>,
}

impl Interrupter {
    /// Wakes the watch, which then closes and reports no more events. Interrupting a watch that
    /// has already closed does nothing.
    pub fn interrupt(&self) {
        let _ = self.sender.send(Message::Interrupt);
    }
}

/// A blocking [`Cursor`] over the events in a set of directories. See [`watch_directories`].
pub struct Watch {
    watcher: Option<RecommendedWatcher>,
    receiver: Receiver<Message>,
    sender: Sender<Message>,
    directories: Vec<PathBuf>,
    kinds: Vec<WatchEventKind>,
    pending: VecDeque<WatchEvent>,
    interrupted: bool,
}

/// Starts watching the direct children of each of `directories` for events of the given `kinds`,
/// or of every kind if `kinds` is empty.
///
/// # Errors
/// Returns a [`WatchError`] if a directory can't be resolved or registered.
pub fn watch_directories<P: AsRef<Path>>(
    kinds: &[WatchEventKind],
    directories: impl IntoIterator<Item = P>,
) -> Result<Watch, WatchError> {
    let (sender, receiver) = mpsc::channel();
    let events = sender.clone();
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
        let _ = events.send(Message::Event(event));
    })?;

    let mut watched = Vec::new();
    for directory in directories {
        let directory = fs::canonicalize(directory)?;
        watcher.watch(&directory, RecursiveMode::NonRecursive)?;
        debug!(directory = %directory.display(), "watching directory");
        watched.push(directory);
    }

    let kinds = if kinds.is_empty() {
        WatchEventKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };

    Ok(Watch {
        watcher: Some(watcher),
        receiver,
        sender,
        directories: watched,
        kinds,
        pending: VecDeque::new(),
        interrupted: false,
    })
}

/// Watches `directories` like [`watch_directories`], handing every event to `callback` until the
/// watch is interrupted or every directory is gone.
pub fn watch_directories_with<P, F>(
    kinds: &[WatchEventKind],
    directories: impl IntoIterator<Item = P>,
    mut callback: F,
) -> Result<(), WatchError>
where
    P: AsRef<Path>,
    F: FnMut(WatchEvent, &Interrupter),
{
    let watch = watch_directories(kinds, directories)?;
    let interrupter = watch.interrupter();
    for event in watch.iter() {
        callback(event, &interrupter);
    }
    Ok(())
}

fn classify(kind: &EventKind) -> Option<WatchEventKind> {
    match kind {
        EventKind::Create(_) => Some(WatchEventKind::Create),
        EventKind::Remove(_) => Some(WatchEventKind::Delete),
        EventKind::Modify(_) => Some(WatchEventKind::Modify),
        EventKind::Other => Some(WatchEventKind::Invalidate),
        EventKind::Access(_) | EventKind::Any => None,
    }
}

impl Watch {
    pub fn interrupter(&self) -> Interrupter {
        Interrupter {
            sender: self.sender.clone(),
        }
    }

    /// Whether waiting was ended by an [`Interrupter`].
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    fn close(&mut self) {
        if self.watcher.take().is_some() {
            debug!(interrupted = self.interrupted, "closing watch");
        }
    }

    fn invalidate(&mut self) {
        for directory in &self.directories {
            self.pending.push_back(WatchEvent {
                kind: WatchEventKind::Invalidate,
                directory: directory.clone(),
                path: PathBuf::new(),
            });
        }
    }

    fn accept(&mut self, event: Event) {
        trace!(?event, "received event");
        let kind = if event.need_rescan() {
            WatchEventKind::Invalidate
        } else {
            match classify(&event.kind) {
                Some(kind) => kind,
                None => return,
            }
        };

        if kind.is_invalidate() {
            self.invalidate();
            return;
        }

        for path in event.paths {
            let Some(directory) = self.directories.iter().find(|directory| path.starts_with(directory)).cloned() else {
                continue;
            };
            let relative = path.strip_prefix(&directory).map(Path::to_path_buf).unwrap_or_default();

            if relative.as_os_str().is_empty() {
                // The watched directory itself went away.
                if kind.is_delete() {
                    debug!(directory = %directory.display(), "watched directory removed");
                    if let Some(watcher) = self.watcher.as_mut() {
                        let _ = watcher.unwatch(&directory);
                    }
                    self.directories.retain(|watched| *watched != directory);
                }
                continue;
            }

            if self.kinds.contains(&kind) {
                self.pending.push_back(WatchEvent {
                    kind,
                    directory,
                    path: relative,
                });
            }
        }

        if self.directories.is_empty() {
            self.close();
        }
    }
}

impl Cursor for Watch {
    type Item = WatchEvent;

    /// Blocks until an event is available, the watch is interrupted or nothing is left to watch.
    fn has_more(&mut self) -> bool {
        loop {
            if !self.pending.is_empty() {
                return true;
            }
            if self.interrupted || self.watcher.is_none() {
                return false;
            }
            match self.receiver.recv() {
                Ok(Message::Interrupt) => {
                    self.interrupted = true;
                    self.close();
                },
                Ok(Message::Event(Ok(event))) => self.accept(event),
                Ok(Message::Event(Err(error))) => warn!(%error, "watch backend error"),
                Err(_) => self.close(),
            }
        }
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.has_more() {
            return Err(ExhaustedError);
        }
        self.pending.pop_front().ok_or(ExhaustedError)
    }
}
