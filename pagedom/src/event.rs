use std::collections::{HashSet, VecDeque};

use crate::document::NodeId;

/// Handle for a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Events produced by the document for registered listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A click, delivered once per listening element on the bubble path.
    Click {
        target: NodeId,
        current_target: NodeId,
    },
    /// The viewport changed size.
    Resize { width: u32, height: u32 },
    /// A previously requested animation frame is due.
    AnimationFrame { id: FrameId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Window,
    Node(NodeId),
}

/// Registered (target, kind) pairs.
///
/// Registering the same pair twice yields a single delivery, like adding the
/// same handler twice with `addEventListener`.
#[derive(Debug, Default)]
pub struct Listeners {
    registered: HashSet<(EventTarget, EventKind)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the listener was not registered before.
    pub fn add(&mut self, target: EventTarget, kind: EventKind) -> bool {
        self.registered.insert((target, kind))
    }

    pub fn contains(&self, target: EventTarget, kind: EventKind) -> bool {
        self.registered.contains(&(target, kind))
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

/// Pending animation frame requests, in request order.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameId>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push_back(id);
        id
    }

    /// Take every request made so far. Requests made while the returned
    /// frames are being handled wait for the next frame.
    pub fn drain(&mut self) -> Vec<FrameId> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
