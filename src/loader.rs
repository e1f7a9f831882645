// SPDX-FileCopyrightText: 2026 jnibook-link Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FFI boundary: the only module that touches native symbols.
//!
//! `LibraryLoader` is the seam between the guard and the platform's dynamic
//! linker; `DlOpenLoader` is the production implementation over `libloading`.
//! No other module may depend on native bindings directly.

use libloading::Library;
use std::sync::Arc;
use tracing::debug;

use crate::error::{BoxError, LinkError};

/// Signature of the native `verify_link` entry point.
type VerifyLinkFn = unsafe extern "C" fn() -> i32;

/// The narrow native surface this crate binds.
pub trait NativeBindings: Send + Sync {
    /// Calls the native `verify_link()` entry point and returns its result
    /// unchanged. Only reachable after a successful load.
    fn verify_link(&self) -> i32;
}

/// Loads a native library named by a bare identifier (no path, no
/// extension), resolved through the platform's standard search mechanism.
pub trait LibraryLoader: Send + Sync {
    fn load(&self, library: &str) -> Result<Box<dyn NativeBindings>, BoxError>;
}

/// Production loader over the platform dynamic linker.
pub struct DlOpenLoader;

impl LibraryLoader for DlOpenLoader {
    fn load(&self, library: &str) -> Result<Box<dyn NativeBindings>, BoxError> {
        let filename = libloading::library_filename(library);
        debug!(library, ?filename, "loading native library");

        // SAFETY: loading a library runs its platform initializers; this
        // crate assumes nothing beyond the symbols resolved below.
        let lib = unsafe { Library::new(&filename) }.map_err(|source| LinkError::Load {
            library: library.to_string(),
            source: Arc::new(source),
        })?;

        // Resolve eagerly: an unresolved symbol is a load failure, not a
        // call-time failure. The symbol borrow must end before `lib` moves
        // into the bindings, so only the copied fn pointer escapes the block.
        let verify_link = {
            // SAFETY: the symbol is declared `extern "C" fn() -> i32` on the
            // native side; the signature must match or the call is UB.
            let symbol = unsafe { lib.get::<VerifyLinkFn>(b"verify_link\0") }.map_err(
                |source| LinkError::Load {
                    library: library.to_string(),
                    source: Arc::new(source),
                },
            )?;
            *symbol
        };

        Ok(Box::new(DlOpenBindings {
            verify_link,
            _library: lib,
        }))
    }
}

/// Bindings backed by a loaded library. The `Library` is held for the
/// lifetime of the bindings so the copied fn pointer stays valid.
struct DlOpenBindings {
    verify_link: VerifyLinkFn,
    _library: Library,
}

impl NativeBindings for DlOpenBindings {
    fn verify_link(&self) -> i32 {
        // SAFETY: the pointer was resolved from `_library`, which is still
        // mapped because it lives in this struct.
        unsafe { (self.verify_link)() }
    }
}
