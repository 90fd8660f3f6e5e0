use std::ffi::c_void;
use std::fmt::{Display, Formatter};
use std::io::{Error, ErrorKind};
use std::path::Path;

use crate::{LoadError, ResolveError, SharedLibrary, SymbolAddress, NO_DIAGNOSTIC};

// Lazy binding keeps one unresolvable dependency of the library from
// failing the whole load; unresolved names surface per lookup instead.
#[cfg(unix)]
fn platform_open(path: &Path) -> Result<libloading::Library, libloading::Error> {
    use libloading::os::unix::{Library, RTLD_LAZY};
    let library = unsafe { Library::open(Some(path), RTLD_LAZY) }?;
    return Ok(library.into());
}

#[cfg(windows)]
fn platform_open(path: &Path) -> Result<libloading::Library, libloading::Error> {
    use libloading::os::windows::Library;
    let library = unsafe { Library::new(path) }?;
    return Ok(library.into());
}

fn diagnostic(error: &libloading::Error) -> String {
    return match error {
        libloading::Error::DlOpenUnknown
        | libloading::Error::DlSymUnknown
        | libloading::Error::DlCloseUnknown
        | libloading::Error::LoadLibraryExWUnknown
        | libloading::Error::GetProcAddressUnknown
        | libloading::Error::FreeLibraryUnknown => String::from(NO_DIAGNOSTIC),
        other => other.to_string(),
    };
}

impl SharedLibrary {
    pub fn open<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        return match platform_open(path) {
            Ok(inner) => Ok(Self {
                path: path.to_path_buf(),
                inner,
            }),
            Err(error) => Err(LoadError {
                path: String::from(path.to_string_lossy()),
                diagnostic: diagnostic(&error),
            }),
        };
    }

    pub fn path(&self) -> &Path {
        return &self.path;
    }

    /// Looks up `name` in this library. A symbol that does not resolve is an
    /// ordinary outcome, reported as `Err` with the loader's diagnostic.
    pub fn resolve(&self, name: &str) -> Result<SymbolAddress, ResolveError> {
        let address = unsafe { self.inner.get::<*mut c_void>(name.as_bytes()) };
        return match address {
            Ok(symbol) if !symbol.is_null() => Ok(SymbolAddress(*symbol)),
            Ok(_) => Err(ResolveError {
                symbol: String::from(name),
                diagnostic: String::from(NO_DIAGNOSTIC),
            }),
            Err(error) => Err(ResolveError {
                symbol: String::from(name),
                diagnostic: diagnostic(&error),
            }),
        };
    }

    /// Releases the loader handle. Dropping the value has the same effect;
    /// this form surfaces unload failures.
    pub fn close(self) -> Result<(), Error> {
        return self
            .inner
            .close()
            .map_err(|error| Error::new(ErrorKind::Other, diagnostic(&error)));
    }
}

impl SymbolAddress {
    pub fn as_ptr(&self) -> *const c_void {
        return self.0;
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "cannot load library: '{}', dlerror: {}",
            self.path, self.diagnostic
        ))
    }
}

impl std::error::Error for LoadError {}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "cannot resolve symbol: '{}', dlerror: {}",
            self.symbol, self.diagnostic
        ))
    }
}

impl std::error::Error for ResolveError {}
