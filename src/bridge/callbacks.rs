use crate::domain::Dictionary;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use tracing::debug;

pub type Callback = Box<dyn Fn(&Dictionary) + Send + Sync>;

/// Named callbacks registered by the scripting layer, e.g. `onLocationChanged`.
///
/// Every entry is callable by construction, so no shape check is needed at registration.
#[derive(Default)]
pub struct CallbackSet {
    callbacks: HashMap<String, Callback>,
}

impl CallbackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Dictionary) + Send + Sync + 'static,
    {
        self.register(name, callback);
        self
    }

    /// Registers `callback` under `name`, replacing an earlier registration.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&Dictionary) + Send + Sync + 'static,
    {
        self.callbacks.insert(name.into(), Box::new(callback));
    }

    /// Calls the callback registered under `name`. Returns `false` if there is none.
    pub fn invoke(&self, name: &str, argument: &Dictionary) -> bool {
        match self.callbacks.get(name) {
            Some(callback) => {
                callback(argument);
                true
            }
            None => {
                debug!("No callback registered for '{}'", name);
                false
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = self.callbacks.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl Debug for CallbackSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSet").field("callbacks", &self.names()).finish()
    }
}
