use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_more::{Display, IsVariant};

use super::InvalidEventTypeError;

/// What happened to a watched entry.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum WatchEventKind {
    #[display("create")]
    Create,
    #[display("delete")]
    Delete,
    #[display("modify")]
    Modify,
    /// Events may have been lost, anything cached about the directory should be discarded. Always
    /// reported, whichever kinds were asked for.
    #[display("invalidate")]
    Invalidate,
}

impl WatchEventKind {
    pub const ALL: [WatchEventKind; 3] = [WatchEventKind::Create, WatchEventKind::Delete, WatchEventKind::Modify];
}

impl FromStr for WatchEventKind {
    type Err = InvalidEventTypeError;

    /// Accepts `create`, `delete` and `modify`, ignoring case. Invalidation can't be asked for.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(WatchEventKind::Create),
            "delete" => Ok(WatchEventKind::Delete),
            "modify" => Ok(WatchEventKind::Modify),
            _ => Err(InvalidEventTypeError {
                name: s.to_owned(),
            }),
        }
    }
}

/// Parses a list of event type names, see [`WatchEventKind::from_str`].
pub fn parse_kinds<S: AsRef<str>>(names: &[S]) -> Result<Vec<WatchEventKind>, InvalidEventTypeError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchEvent {
    pub kind: WatchEventKind,
    /// The watched directory the event was observed in.
    pub directory: PathBuf,
    /// The affected entry, relative to `directory`. Empty for invalidations.
    pub path: PathBuf,
}

impl WatchEvent {
    pub fn origin(&self) -> (&Path, &Path) {
        (&self.directory, &self.path)
    }
}
