pub mod export;
pub mod run;

/// Path value meaning "do not check this library in this run".
pub const SKIP_SENTINEL: &str = "-";

pub trait Verify<R> {
    fn verify<F>(&self, resolve: &F) -> R
    where
        F: Fn(&str) -> Result<(), String>;
}

pub trait VerifyResult {
    fn is_good(&self) -> bool;
}

/// True when the request set contains nothing to verify.
pub fn all_skipped<'a, I>(paths: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    return paths.into_iter().all(|path| path == SKIP_SENTINEL);
}
