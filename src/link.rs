// SPDX-FileCopyrightText: 2026 jnibook-link Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The link guard: a load-once state machine over the FFI boundary.
//!
//! State machine: `Uninitialized -> {Loaded, Failed}`. The transition runs
//! exactly once per guard regardless of caller count or concurrency, and
//! both outcomes are terminal for the life of the guard. A failed load is
//! never retried; every later call surfaces the same captured cause.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::LinkError;
use crate::loader::{LibraryLoader, NativeBindings};

/// Guards a native library behind one-time initialization.
pub struct LinkGuard {
    library: String,
    loader: Box<dyn LibraryLoader>,
    state: OnceLock<Result<Box<dyn NativeBindings>, LinkError>>,
}

impl LinkGuard {
    /// Creates a guard for `library`. Nothing is loaded until the first
    /// guarded call.
    pub fn new(library: impl Into<String>, loader: Box<dyn LibraryLoader>) -> Self {
        LinkGuard {
            library: library.into(),
            loader,
            state: OnceLock::new(),
        }
    }

    /// Name of the guarded library.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Fails with the captured load error if the library is unavailable;
    /// returns normally, with no side effects, once it is loaded.
    pub fn check_availability(&self) -> Result<(), LinkError> {
        self.bindings().map(|_| ())
    }

    /// Calls the native `verify_link` entry point and returns its result
    /// unchanged.
    ///
    /// The availability check runs first: a missing library must surface as
    /// the captured load diagnostic, never as a raw symbol-resolution error
    /// from the native call itself.
    pub fn verify_link(&self) -> Result<i32, LinkError> {
        self.check_availability()?;
        Ok(self.bindings()?.verify_link())
    }

    fn bindings(&self) -> Result<&dyn NativeBindings, LinkError> {
        let state = self.state.get_or_init(|| {
            debug!(library = %self.library, "initializing native link");
            match self.loader.load(&self.library) {
                Ok(bindings) => {
                    debug!(library = %self.library, "native library loaded");
                    Ok(bindings)
                }
                Err(cause) => {
                    let err = LinkError::from_load_cause(&self.library, cause);
                    warn!(library = %self.library, error = %err, "native library load failed");
                    Err(err)
                }
            }
        });
        match state {
            Ok(bindings) => Ok(bindings.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }
}
