//! Renderer-owned marker handles.
//!
//! The map renderer places one marker per stop and must remove them all
//! before placing a new set. [`MarkerSet`] holds the handles keyed by stop
//! index so nothing outside the renderer needs to reach into them.

use std::collections::BTreeMap;

use crate::labels::StopLabel;

/// The map layer markers are placed on.
pub trait MarkerLayer {
    type Handle;

    fn place(&mut self, label: &StopLabel) -> Self::Handle;

    fn remove(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct MarkerSet<H> {
    handles: BTreeMap<usize, H>,
}

impl<H> Default for MarkerSet<H> {
    fn default() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }
}

impl<H> MarkerSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.handles.get(&index)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Remove every marker from `layer`.
    pub fn clear<L>(&mut self, layer: &mut L)
    where
        L: MarkerLayer<Handle = H>,
    {
        for (_, handle) in std::mem::take(&mut self.handles) {
            layer.remove(handle);
        }
    }

    /// Replace the current markers with one per label.
    pub fn repopulate<L>(&mut self, layer: &mut L, labels: &[StopLabel])
    where
        L: MarkerLayer<Handle = H>,
    {
        self.clear(layer);
        for label in labels {
            let handle = layer.place(label);
            if let Some(previous) = self.handles.insert(label.index, handle) {
                layer.remove(previous);
            }
        }
    }
}
