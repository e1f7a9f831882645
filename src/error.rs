// SPDX-FileCopyrightText: 2026 jnibook-link Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the link boundary.
//!
//! Every load-time failure collapses into one tagged enum with a single
//! boundary decision: a cause the loader already classified is surfaced as
//! captured, anything else is wrapped exactly once with the library name so
//! callers and logs can still reach the root failure.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed error crossing the loader seam.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Failure captured while loading the native library.
///
/// Cloning is cheap: the root cause lives behind an `Arc`, so every guarded
/// call after a failed load surfaces the same captured cause.
#[derive(Debug, Clone)]
pub enum LinkError {
    /// The dynamic loader failed: library not found, unresolved symbol, or
    /// the platform refused the mapping.
    Load {
        library: String,
        source: Arc<libloading::Error>,
    },
    /// A load-time cause that is not itself a link-layer error, wrapped once
    /// with the library name for context.
    Wrapped {
        library: String,
        source: Arc<dyn Error + Send + Sync>,
    },
}

impl LinkError {
    /// Classifies a cause captured at load time.
    ///
    /// A cause that is already a `LinkError` is surfaced unchanged
    /// (identity-preserving); anything else is wrapped. Classification
    /// happens once, here, never per call.
    pub(crate) fn from_load_cause(library: &str, cause: BoxError) -> Self {
        match cause.downcast::<LinkError>() {
            Ok(raw) => *raw,
            Err(other) => LinkError::Wrapped {
                library: library.to_string(),
                source: Arc::from(other),
            },
        }
    }

    /// Name of the library whose load failed.
    pub fn library(&self) -> &str {
        match self {
            LinkError::Load { library, .. } | LinkError::Wrapped { library, .. } => library,
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { library, source } => {
                write!(f, "native library `{library}` failed to load: {source}")
            }
            Self::Wrapped { library, source } => {
                write!(f, "native library `{library}` is unavailable: {source}")
            }
        }
    }
}

impl Error for LinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source.as_ref()),
            Self::Wrapped { source, .. } => {
                let source: &(dyn Error + 'static) = &**source;
                Some(source)
            }
        }
    }
}
