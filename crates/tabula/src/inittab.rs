// Tabula™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::builtin::{Builtin, Init};
use crate::registry;
use smol_str::SmolStr;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no builtin module named {0}")]
    Unknown(SmolStr),
    #[error("builtin module {0} initializes with the runtime core")]
    SelfRegistering(SmolStr),
}

/// Outcome of a successful lookup. Absence of the entry is `None` on
/// [`Inittab::lookup`]; neither variant here is a fault.
#[derive(Clone, Copy, Debug)]
pub enum Resolved {
    /// Entry with its own initializer.
    Init(Init),
    /// Entry listed for enumeration only, initialized during core bootstrap.
    Core,
}

// I N I T T A B

/// Accumulation phase of the table. Entries keep insertion order; nothing
/// is deduplicated or sorted, the producer of the entries is trusted.
#[derive(Default)]
pub struct InittabBuilder {
    entries: Vec<Builtin>,
}

impl InittabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, entry: Builtin) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append a generated entry block, typically a `static` table.
    pub fn extend(mut self, entries: &[Builtin]) -> Self {
        self.entries.extend_from_slice(entries);
        self
    }

    /// Append every entry that separately compiled units registered through
    /// [`registry::BUILTINS`]. Order within the block is link order.
    pub fn with_linked(self) -> Self {
        self.extend(&registry::BUILTINS)
    }

    /// Seal the table. The name index keeps the first occurrence of each
    /// name, so lookups resolve the way a front-to-back scan would.
    pub fn build(self) -> Inittab {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (at, entry) in self.entries.iter().enumerate() {
            index.entry(entry.name()).or_insert(at);
        }
        tracing::debug!(modules = self.entries.len(), "builtin table sealed");
        Inittab {
            entries: self.entries,
            index,
        }
    }
}

/// Sealed directory of builtin modules: name to initializer, in the order
/// the entries were produced. Never mutated after [`InittabBuilder::build`],
/// so any number of threads may read it without locking.
pub struct Inittab {
    entries: Vec<Builtin>,
    index: HashMap<&'static str, usize>,
}

impl Inittab {
    /// Table over a single generated entry block.
    pub fn from_entries(entries: &[Builtin]) -> Self {
        InittabBuilder::new().extend(entries).build()
    }

    pub fn lookup(&self, name: &str) -> Option<Resolved> {
        let at = *self.index.get(name)?;
        let entry = self.entries.get(at)?;
        match entry.init() {
            Some(init) => Some(Resolved::Init(init)),
            None => Some(Resolved::Core),
        }
    }

    /// Run the initializer of `name`. The two non-runnable outcomes map onto
    /// [`InitError`]; which of them is user-visible is the importer's call.
    pub fn initialize(&self, name: &str) -> Result<(), InitError> {
        match self.lookup(name) {
            Some(Resolved::Init(init)) => {
                init();
                Ok(())
            }
            Some(Resolved::Core) => {
                tracing::trace!(name, "builtin initializes with the core");
                Err(InitError::SelfRegistering(SmolStr::new(name)))
            }
            None => {
                tracing::trace!(name, "unknown builtin");
                Err(InitError::Unknown(SmolStr::new(name)))
            }
        }
    }

    /// Names in table order, the importer's answer to "which modules are
    /// built in."
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(Builtin::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Builtin> {
        self.entries.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
