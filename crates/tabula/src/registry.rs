// Tabula™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT
//
// registry.rs:

use crate::builtin::Builtin;
use linkme::distributed_slice;

/// Entries contributed by separately compiled units. Which units show up
/// here is decided by what the build links in; the slice order is link
/// order. A unit registers itself once:
///
/// ```
/// use linkme::distributed_slice;
/// use tabula::builtin::Builtin;
/// use tabula::registry::BUILTINS;
///
/// fn init() {}
///
/// #[distributed_slice(BUILTINS)]
/// static UNIT: Builtin = Builtin::new("unit", init);
/// ```
#[distributed_slice]
pub static BUILTINS: [Builtin];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inittab::{Inittab, InittabBuilder, Resolved};
    use linkme::distributed_slice;

    fn init_fs() {}

    fn init_net() {}

    #[distributed_slice(BUILTINS)]
    static FS_UNIT: Builtin = Builtin::new("fs", init_fs);

    #[distributed_slice(BUILTINS)]
    static NET_UNIT: Builtin = Builtin::new("net", init_net);

    #[test]
    fn linked_units_resolve() {
        let tab: Inittab = InittabBuilder::new().with_linked().build();
        assert!(matches!(tab.lookup("fs"), Some(Resolved::Init(_))));
        assert!(matches!(tab.lookup("net"), Some(Resolved::Init(_))));
        assert_eq!(tab.len(), BUILTINS.len());
    }

    #[test]
    fn linked_block_follows_explicit_entries() {
        let tab = InittabBuilder::new()
            .push(Builtin::core("sys"))
            .with_linked()
            .build();

        let names: Vec<_> = tab.names().collect();
        assert_eq!(names[0], "sys");

        let linked: Vec<_> = BUILTINS.iter().map(Builtin::name).collect();
        assert_eq!(&names[1..], linked.as_slice());
    }
}
