pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod layout;
pub mod scroll;
pub mod selector;
pub mod text;
pub mod types;

pub use document::{Document, NodeId};
pub use element::Element;
pub use event::{Event, EventKind, EventTarget, FrameId};
pub use focus::{collect_tabbable, FocusState};
pub use layout::Viewport;
pub use scroll::ScrollState;
pub use selector::{Selector, SelectorError};
pub use types::*;
