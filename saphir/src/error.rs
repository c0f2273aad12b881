//! Error types for Saphir
//!
//! This module defines the error type shared by declarations, shaders,
//! stage wiring and the shader generator.

use std::fmt;

/// Result type for Saphir operations
pub type Result<T> = std::result::Result<T, Error>;

/// Saphir errors
///
/// Every variant carries a human readable message. The message is also
/// sent to the logger at ERROR severity when the error is raised through
/// `saphir_bail!` or `saphir_err!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A declaration failed its own validity check (empty name, bad type, ...)
    InvalidDeclaration(String),

    /// A declaration with the same name already exists in the target bucket
    DuplicateDeclaration(String),

    /// The requested variable has no synthesis routine
    UnsupportedSyntheticVariable(String),

    /// The upstream shader has not produced its source code yet
    UpstreamNotGenerated(String),

    /// The upstream shader declares neither stage outputs nor output blocks
    UpstreamHasNoOutputs(String),

    /// The upstream stage cannot feed the downstream stage
    IncompatibleStages(String),

    /// Source code assembly or synthesis failed
    GenerationFailed(String),

    /// A program already holds a shader for this stage
    ShaderAlreadyInitialized(String),

    /// A program holds no shader for this stage
    ShaderNotInitialized(String),

    /// Loading or writing shader source code failed
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDeclaration(msg) => write!(f, "Invalid declaration: {}", msg),
            Error::DuplicateDeclaration(msg) => write!(f, "Duplicate declaration: {}", msg),
            Error::UnsupportedSyntheticVariable(msg) => {
                write!(f, "Unsupported synthetic variable: {}", msg)
            }
            Error::UpstreamNotGenerated(msg) => write!(f, "Upstream shader not generated: {}", msg),
            Error::UpstreamHasNoOutputs(msg) => {
                write!(f, "Upstream shader has no outputs: {}", msg)
            }
            Error::IncompatibleStages(msg) => write!(f, "Incompatible stages: {}", msg),
            Error::GenerationFailed(msg) => write!(f, "Generation failed: {}", msg),
            Error::ShaderAlreadyInitialized(msg) => {
                write!(f, "Shader already initialized: {}", msg)
            }
            Error::ShaderNotInitialized(msg) => write!(f, "Shader not initialized: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error, logging it at ERROR severity with file:line information
///
/// # Example
///
/// ```no_run
/// use saphir::Error;
///
/// let error =
///     saphir::saphir_err!("saphir::Shader", Error::GenerationFailed, "Missing '{}'", "main");
/// ```
#[macro_export]
macro_rules! saphir_err {
    ($source:expr, $variant:path, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::Saphir::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $variant(message)
    }};
}

/// Log an error and return it from the current function
///
/// # Example
///
/// ```no_run
/// use saphir::{Error, Result};
///
/// fn check(name: &str) -> Result<()> {
///     if name.is_empty() {
///         saphir::saphir_bail!("saphir::Shader", Error::InvalidDeclaration, "Empty name");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! saphir_bail {
    ($source:expr, $variant:path, $($arg:tt)*) => {
        return Err($crate::saphir_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
