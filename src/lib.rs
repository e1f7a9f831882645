// SPDX-FileCopyrightText: 2026 jnibook-link Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! jnibook-link: bootstrap shim for the `jnibookrs` native library.
//!
//! Loads the library at most once per process and exposes a guarded surface
//! that either performs the native call or re-surfaces the captured load
//! failure on every later call. A failed load is permanent for the process
//! lifetime; the only recourse is restarting the process after fixing the
//! library search path.

pub mod error;
pub mod link;
pub mod loader;

pub use error::LinkError;
pub use link::LinkGuard;
pub use loader::{DlOpenLoader, LibraryLoader, NativeBindings};

use lazy_static::lazy_static;

/// Bare identifier of the native library, resolved through the platform's
/// standard search mechanism (no path, no extension).
pub const NATIVE_LIBRARY: &str = "jnibookrs";

lazy_static! {
    static ref LINK: LinkGuard = LinkGuard::new(NATIVE_LIBRARY, Box::new(DlOpenLoader));
}

/// Fails with the captured load error if `jnibookrs` is unavailable;
/// returns normally once it is loaded.
pub fn check_availability() -> Result<(), LinkError> {
    LINK.check_availability()
}

/// Verifies the native link end to end and returns the native result
/// unchanged. Checks availability first, so a missing library surfaces as
/// the load diagnostic rather than a native call failure.
pub fn verify_link() -> Result<i32, LinkError> {
    LINK.verify_link()
}
