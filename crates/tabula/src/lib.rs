// Tabula™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT
//
// lib.rs:

pub mod builtin;
pub mod inittab;
pub mod registry;
