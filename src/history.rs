//! Navigation history.
//!
//! Two halves live here:
//!
//! - [`HistoryStack`]: the resolver's own record of visited paths and the
//!   cursor into it. Pushing drops any forward entries, replacing overwrites
//!   the entry under the cursor.
//! - [`HistoryHost`]: the seam to the embedding environment (the browser's
//!   history API in production). The resolver mirrors every committed entry
//!   into the host and the host reports back/forward traversals through the
//!   [`Navigator`] it was subscribed with.
//!
//! [`MemoryHistory`] is an in-process host used by tests and non-browser
//! embeddings. It delivers traversal events synchronously.

use crate::navigator::Navigator;
use crate::path::canonical_path;
use crate::{debug_log, NavigationDirection};
use std::cmp::Ordering;
use thiserror::Error;

// ============================================================================
// Host contract
// ============================================================================

/// An entry written to the host history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Path shown in the address bar.
    pub path: String,
    /// Position of the entry in the resolver's [`HistoryStack`].
    pub position: usize,
}

/// A back/forward traversal reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    /// Path of the entry the host moved to.
    pub path: String,
    /// Position stored with the entry, when the host kept it.
    pub position: Option<usize>,
}

impl HistoryEvent {
    /// Traversal to a path with a known position.
    pub fn at(path: impl Into<String>, position: usize) -> Self {
        Self {
            path: path.into(),
            position: Some(position),
        }
    }

    /// Traversal to a path whose position the host did not keep.
    pub fn to_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            position: None,
        }
    }
}

/// The host refused a history write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Back/forward history provided by the embedding environment.
pub trait HistoryHost {
    /// Add an entry after the current one, discarding forward entries.
    fn push(&mut self, entry: &HistoryEntry) -> Result<(), HostError>;

    /// Overwrite the current entry.
    fn replace(&mut self, entry: &HistoryEntry) -> Result<(), HostError>;

    /// Ask the host to move `delta` entries through its history.
    ///
    /// The host answers by delivering a [`HistoryEvent`] to the subscribed
    /// navigator, possibly later. Moves past either end are ignored.
    fn go(&mut self, delta: isize);

    /// Register the navigator that receives traversal events.
    fn subscribe(&mut self, navigator: Navigator);
}

// ============================================================================
// HistoryStack
// ============================================================================

/// Visited paths plus a cursor to the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path under the cursor, `None` before the first navigation.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// All recorded paths, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a new entry after the cursor and move onto it.
    pub fn push(&mut self, path: String) -> usize {
        if self.entries.is_empty() {
            self.entries.push(path);
            self.cursor = 0;
        } else {
            // Remove forward history when pushing
            self.entries.truncate(self.cursor + 1);
            self.entries.push(path);
            self.cursor += 1;
        }
        self.cursor
    }

    /// Overwrite the entry under the cursor, or record the first one.
    pub fn replace(&mut self, path: String) -> usize {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = path,
            None => {
                self.entries.push(path);
                self.cursor = self.entries.len() - 1;
            }
        }
        self.cursor
    }

    /// Find the entry a host traversal points at.
    ///
    /// The stored position is trusted when it points at an entry with the
    /// same path. Otherwise the neighbouring entries are tried, back first.
    /// Paths compare in canonical form, so `/video-frames/` finds an entry
    /// recorded as `/video-frames`.
    pub fn locate(&self, event: &HistoryEvent) -> Option<usize> {
        let path = canonical_path(&event.path);
        let same = |entry: Option<&str>| entry.is_some_and(|e| canonical_path(e) == path);

        event
            .position
            .filter(|&p| same(self.entries.get(p).map(String::as_str)))
            .or_else(|| {
                if same(self.peek_back()) {
                    Some(self.cursor - 1)
                } else if same(self.peek_forward()) {
                    Some(self.cursor + 1)
                } else {
                    None
                }
            })
    }

    /// Move the cursor to match a host traversal.
    ///
    /// Returns `None`, leaving the cursor alone, when the event matches no
    /// recorded entry.
    pub fn traverse(&mut self, event: &HistoryEvent) -> Option<NavigationDirection> {
        let target = self.locate(event)?;
        let direction = match target.cmp(&self.cursor) {
            Ordering::Less => NavigationDirection::Back,
            Ordering::Greater => NavigationDirection::Forward,
            Ordering::Equal => NavigationDirection::Replace,
        };
        self.cursor = target;
        Some(direction)
    }

    /// Check if there is an entry before the cursor
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there is an entry after the cursor
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Path one entry back, without moving.
    pub fn peek_back(&self) -> Option<&str> {
        if self.can_go_back() {
            Some(&self.entries[self.cursor - 1])
        } else {
            None
        }
    }

    /// Path one entry forward, without moving.
    pub fn peek_forward(&self) -> Option<&str> {
        if self.can_go_forward() {
            Some(&self.entries[self.cursor + 1])
        } else {
            None
        }
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// In-process [`HistoryHost`].
///
/// Traversals requested with [`go`](HistoryHost::go) are delivered to the
/// subscribed navigator immediately, so a resolver sees them on its next
/// [`process_pending`](crate::Resolver::process_pending).
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    subscriber: Option<Navigator>,
    reject_writes: Option<String>,
}

impl MemoryHistory {
    /// Create an empty host history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in host order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry the host currently shows.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Make every following push/replace fail with `message`.
    pub fn reject_writes(&mut self, message: impl Into<String>) {
        self.reject_writes = Some(message.into());
    }

    /// Accept writes again.
    pub fn accept_writes(&mut self) {
        self.reject_writes = None;
    }

    fn check_writable(&self) -> Result<(), HostError> {
        match &self.reject_writes {
            Some(message) => Err(HostError::new(message.clone())),
            None => Ok(()),
        }
    }
}

impl HistoryHost for MemoryHistory {
    fn push(&mut self, entry: &HistoryEntry) -> Result<(), HostError> {
        self.check_writable()?;
        if self.entries.is_empty() {
            self.cursor = 0;
        } else {
            self.entries.truncate(self.cursor + 1);
            self.cursor += 1;
        }
        self.entries.push(entry.clone());
        Ok(())
    }

    fn replace(&mut self, entry: &HistoryEntry) -> Result<(), HostError> {
        self.check_writable()?;
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = entry.clone(),
            None => {
                self.entries.push(entry.clone());
                self.cursor = self.entries.len() - 1;
            }
        }
        Ok(())
    }

    fn go(&mut self, delta: isize) {
        let Some(target) = self.cursor.checked_add_signed(delta) else {
            return;
        };
        let Some(entry) = self.entries.get(target) else {
            return;
        };
        if delta == 0 {
            return;
        }
        self.cursor = target;
        debug_log!("Host history moved {} to '{}'", delta, entry.path);
        if let Some(navigator) = &self.subscriber {
            navigator.history_changed(HistoryEvent::at(entry.path.clone(), entry.position));
        }
    }

    fn subscribe(&mut self, navigator: Navigator) {
        self.subscriber = Some(navigator);
    }
}
