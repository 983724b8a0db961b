//! Circular playlist
//!
//! Ordered, non-empty list of track identifiers with a selected index.
//! Navigation wraps in both directions.

use crate::error::{PlaybackError, Result};
use crate::types::TrackId;

/// Playlist with a current position
///
/// Structure:
/// ```text
///   0: Track A
///   1: Track B   <- current
///   2: Track C
///   next() from C wraps to A, previous() from A wraps to C
/// ```
///
/// The playlist knows nothing about playback state; resetting the play
/// intent on track change is the controller's job.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Tracks in play order
    tracks: Vec<TrackId>,

    /// Current position (always < tracks.len())
    index: usize,
}

impl Playlist {
    /// Create a playlist positioned on the first track
    pub fn new(tracks: Vec<TrackId>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        Ok(Self { tracks, index: 0 })
    }

    /// Advance to the next track, wrapping to the start past the end
    pub fn next(&mut self) -> &TrackId {
        self.index = (self.index + 1) % self.tracks.len();
        self.current()
    }

    /// Go back one track, wrapping to the end from the start
    pub fn previous(&mut self) -> &TrackId {
        self.index = if self.index == 0 {
            self.tracks.len() - 1
        } else {
            self.index - 1
        };
        self.current()
    }

    /// Jump to a specific position
    pub fn select(&mut self, index: usize) -> Result<&TrackId> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.index = index;
        Ok(self.current())
    }

    /// Current track
    pub fn current(&self) -> &TrackId {
        &self.tracks[self.index]
    }

    /// Current position
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
