//! Layout measurement bookkeeping
//!
//! The host reports sizes for the container, the track, and the thumb
//! through separate layout callbacks, in any order and any number of times.
//! Nothing position-dependent is computed until all three are known.

use glide_core::Size;

/// Which element a layout callback measured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureTarget {
    Container,
    Track,
    Thumb,
}

/// Tracker state; moves from `Pending` to `Ready` once and stays there
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasureState {
    #[default]
    Pending,
    Ready,
}

/// Result of recording a measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureOutcome {
    /// Same size as already stored; nothing downstream needs to change
    Unchanged,
    /// Stored a new size
    Updated,
    /// Stored a new size and this completed the set
    Ready,
}

impl MeasureOutcome {
    pub fn is_changed(self) -> bool {
        !matches!(self, MeasureOutcome::Unchanged)
    }
}

/// Latest measured sizes of the slider's parts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementTracker {
    container: Option<Size>,
    track: Option<Size>,
    thumb: Option<Size>,
    state: MeasureState,
}

impl MeasurementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a measured size
    ///
    /// Sizes are taken as given; negative or zero sizes are not rejected.
    pub fn record(&mut self, target: MeasureTarget, size: Size) -> MeasureOutcome {
        let slot = match target {
            MeasureTarget::Container => &mut self.container,
            MeasureTarget::Track => &mut self.track,
            MeasureTarget::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            return MeasureOutcome::Unchanged;
        }
        *slot = Some(size);
        tracing::trace!(?target, width = size.width, height = size.height, "measured");

        if self.state == MeasureState::Pending
            && self.container.is_some()
            && self.track.is_some()
            && self.thumb.is_some()
        {
            self.state = MeasureState::Ready;
            tracing::debug!(
                container = ?self.container,
                track = ?self.track,
                thumb = ?self.thumb,
                "MeasurementTracker: all parts measured"
            );
            return MeasureOutcome::Ready;
        }
        MeasureOutcome::Updated
    }

    pub fn state(&self) -> MeasureState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == MeasureState::Ready
    }

    /// Latest size for `target`, if it has been measured
    pub fn size(&self, target: MeasureTarget) -> Option<Size> {
        match target {
            MeasureTarget::Container => self.container,
            MeasureTarget::Track => self.track,
            MeasureTarget::Thumb => self.thumb,
        }
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn track(&self) -> Option<Size> {
        self.track
    }

    pub fn thumb(&self) -> Option<Size> {
        self.thumb
    }

    /// Distance the thumb can travel, `container.width - thumb.width`
    ///
    /// `None` until the tracker is ready.
    pub fn track_length(&self) -> Option<f32> {
        if !self.is_ready() {
            return None;
        }
        Some(self.container?.width - self.thumb?.width)
    }
}
