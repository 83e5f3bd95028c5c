//! Lifecycle hooks.

use std::fmt;
use std::rc::Rc;

use crate::accordion::Accordion;
use crate::dom::Dom;

/// What a hook is told about the item it fires for.
pub struct CallbackArgs<'a, D: Dom> {
    pub item: &'a D::Node,
    pub bundle: &'a D::Node,
    pub accordion: &'a Accordion<D>,
}

pub type Callback<D> = Rc<dyn Fn(&CallbackArgs<'_, D>)>;

/// Identifies one hook slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    OpenBefore,
    OpenAfter,
    CloseBefore,
    CloseAfter,
    InitializeAfter,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpenBefore => "open.before",
            Self::OpenAfter => "open.after",
            Self::CloseBefore => "close.before",
            Self::CloseAfter => "close.after",
            Self::InitializeAfter => "item.initialize.after",
        };
        f.write_str(name)
    }
}

/// A before/after pair.
pub struct Hooks<D: Dom> {
    pub before: Option<Callback<D>>,
    pub after: Option<Callback<D>>,
}

pub struct InitializeHooks<D: Dom> {
    pub after: Option<Callback<D>>,
}

pub struct ItemHooks<D: Dom> {
    pub initialize: InitializeHooks<D>,
}

/// Every hook an accordion can fire. All slots start empty.
pub struct Callbacks<D: Dom> {
    pub open: Hooks<D>,
    pub close: Hooks<D>,
    pub item: ItemHooks<D>,
}

impl<D: Dom> Callbacks<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hook: Hook) -> Option<&Callback<D>> {
        match hook {
            Hook::OpenBefore => self.open.before.as_ref(),
            Hook::OpenAfter => self.open.after.as_ref(),
            Hook::CloseBefore => self.close.before.as_ref(),
            Hook::CloseAfter => self.close.after.as_ref(),
            Hook::InitializeAfter => self.item.initialize.after.as_ref(),
        }
    }

    /// Fill the slot for `hook`, replacing any previous callback.
    pub fn on(mut self, hook: Hook, callback: impl Fn(&CallbackArgs<'_, D>) + 'static) -> Self {
        let callback: Callback<D> = Rc::new(callback);
        let slot = match hook {
            Hook::OpenBefore => &mut self.open.before,
            Hook::OpenAfter => &mut self.open.after,
            Hook::CloseBefore => &mut self.close.before,
            Hook::CloseAfter => &mut self.close.after,
            Hook::InitializeAfter => &mut self.item.initialize.after,
        };
        *slot = Some(callback);
        self
    }

    pub fn on_open_before(self, callback: impl Fn(&CallbackArgs<'_, D>) + 'static) -> Self {
        self.on(Hook::OpenBefore, callback)
    }

    pub fn on_open_after(self, callback: impl Fn(&CallbackArgs<'_, D>) + 'static) -> Self {
        self.on(Hook::OpenAfter, callback)
    }

    pub fn on_close_before(self, callback: impl Fn(&CallbackArgs<'_, D>) + 'static) -> Self {
        self.on(Hook::CloseBefore, callback)
    }

    pub fn on_close_after(self, callback: impl Fn(&CallbackArgs<'_, D>) + 'static) -> Self {
        self.on(Hook::CloseAfter, callback)
    }

    pub fn on_item_initialize_after(
        self,
        callback: impl Fn(&CallbackArgs<'_, D>) + 'static,
    ) -> Self {
        self.on(Hook::InitializeAfter, callback)
    }
}

impl<D: Dom> Default for Callbacks<D> {
    fn default() -> Self {
        Self {
            open: Hooks {
                before: None,
                after: None,
            },
            close: Hooks {
                before: None,
                after: None,
            },
            item: ItemHooks {
                initialize: InitializeHooks { after: None },
            },
        }
    }
}

impl<D: Dom> Clone for Callbacks<D> {
    fn clone(&self) -> Self {
        Self {
            open: Hooks {
                before: self.open.before.clone(),
                after: self.open.after.clone(),
            },
            close: Hooks {
                before: self.close.before.clone(),
                after: self.close.after.clone(),
            },
            item: ItemHooks {
                initialize: InitializeHooks {
                    after: self.item.initialize.after.clone(),
                },
            },
        }
    }
}

impl<D: Dom> fmt::Debug for Callbacks<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<String> = [
            Hook::OpenBefore,
            Hook::OpenAfter,
            Hook::CloseBefore,
            Hook::CloseAfter,
            Hook::InitializeAfter,
        ]
        .into_iter()
        .filter(|&hook| self.get(hook).is_some())
        .map(|hook| hook.to_string())
        .collect();
        f.debug_struct("Callbacks").field("set", &set).finish()
    }
}
