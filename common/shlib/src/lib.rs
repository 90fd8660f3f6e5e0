use std::ffi::c_void;
use std::path::PathBuf;

pub mod library;

/// Placeholder reported when the platform loader has no diagnostic string.
pub const NO_DIAGNOSTIC: &str = "NULL";

/// An open shared library. Owns the loader handle; dropping (or calling
/// [`SharedLibrary::close`]) releases it exactly once.
#[derive(Debug)]
pub struct SharedLibrary {
    path: PathBuf,
    inner: libloading::Library,
}

/// The address a symbol resolved to. Opaque; its only guarantee is that it
/// is non-null.
#[derive(Debug, Clone, Copy)]
pub struct SymbolAddress(*mut c_void);

#[derive(Debug)]
pub struct LoadError {
    pub path: String,
    pub diagnostic: String,
}

#[derive(Debug)]
pub struct ResolveError {
    pub symbol: String,
    pub diagnostic: String,
}
