use thiserror::Error;

/// Collaborator-facing audio transport and loudness sampler.
///
/// `play` rebinds the loudness sampler to the given track and starts it from
/// the beginning; `resume` continues a previously paused track. Both are
/// expected to be synchronous, bounded-time calls.
pub trait AudioDeck {
    fn is_playing(&self) -> bool;
    fn play(&mut self, track: usize);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Running average loudness of the bound track for this frame.
    fn average_loudness(&self) -> f32;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("playlist needs at least one track")]
    Empty,
}

/// Round-robin track selection gated by the music-control trigger.
#[derive(Debug)]
pub struct Playlist {
    track_count: usize,
    next_track: usize,
    paused: bool,
}

impl Playlist {
    pub fn new(track_count: usize) -> Result<Self, PlaylistError> {
        if track_count == 0 {
            return Err(PlaylistError::Empty);
        }
        Ok(Self {
            track_count,
            next_track: 0,
            paused: false,
        })
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Track that the next fresh start will play.
    pub fn next_track(&self) -> usize {
        self.next_track
    }

    /// One press of the music control: pause what is playing, resume what was
    /// paused, or start the next track in order (wrapping to the first) when
    /// nothing is in flight.
    pub fn toggle(&mut self, deck: &mut impl AudioDeck) {
        if deck.is_playing() {
            deck.pause();
            self.paused = true;
            log::info!("[playlist] paused");
        } else if self.paused {
            deck.resume();
            self.paused = false;
            log::info!("[playlist] resumed");
        } else {
            let track = self.next_track;
            deck.play(track);
            self.next_track = (track + 1) % self.track_count;
            log::info!("[playlist] playing track {}", track);
        }
    }
}
