use serde::Serialize;

use shlib_lib::LoadError;

use crate::export::LibraryVerifyResult;
use crate::VerifyResult;

/// A library that could not be opened at all. Recorded alongside the
/// per-library results so one bad library never hides the others.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFailure {
    pub path: String,
    pub diagnostic: String,
}

/// Everything one invocation produced. The run succeeds only when every
/// requested library opened and every requested symbol resolved.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub results: Vec<LibraryVerifyResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load_failures: Vec<LoadFailure>,
}

impl From<LoadError> for LoadFailure {
    fn from(error: LoadError) -> Self {
        return Self {
            path: error.path,
            diagnostic: error.diagnostic,
        };
    }
}

impl RunOutcome {
    pub fn record_result(&mut self, result: LibraryVerifyResult) {
        self.results.push(result);
    }

    pub fn record_load_failure(&mut self, failure: LoadFailure) {
        self.load_failures.push(failure);
    }

    pub fn total_bad(&self) -> usize {
        return self.results.iter().map(|result| result.bad).sum();
    }

    pub fn exit_code(&self) -> i32 {
        return if self.is_good() { 0 } else { 1 };
    }
}

impl VerifyResult for RunOutcome {
    fn is_good(&self) -> bool {
        return self.load_failures.is_empty() && self.total_bad() == 0;
    }
}

#[cfg(test)]
mod tests {
    use shlib_lib::LoadError;

    use crate::export::{ExportCheck, LibraryVerifyResult};
    use crate::run::{LoadFailure, RunOutcome};
    use crate::{all_skipped, Verify, VerifyResult};

    fn result_with_bad(path: &str, bad: usize) -> LibraryVerifyResult {
        let names: Vec<String> = (0..bad).map(|idx| format!("sym_{idx}")).collect();
        let expected: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        let check = ExportCheck {
            path,
            expected: &expected,
        };
        return check.verify(&|name: &str| Err(format!("undefined symbol: {name}")));
    }

    #[test]
    fn test_empty_run_is_good() {
        let outcome = RunOutcome::default();
        assert!(outcome.is_good());
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_good_results_exit_zero() {
        let mut outcome = RunOutcome::default();
        outcome.record_result(result_with_bad("libcrypto.so", 0));
        outcome.record_result(result_with_bad("libssl.so", 0));
        assert!(outcome.is_good());
        assert_eq!(outcome.total_bad(), 0);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_missing_symbols_exit_one() {
        let mut outcome = RunOutcome::default();
        outcome.record_result(result_with_bad("libcrypto.so", 2));
        outcome.record_result(result_with_bad("libssl.so", 0));
        assert!(!outcome.is_good());
        assert_eq!(outcome.total_bad(), 2);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_load_failure_exits_one_and_keeps_other_results() {
        let mut outcome = RunOutcome::default();
        outcome.record_load_failure(LoadFailure::from(LoadError {
            path: String::from("libcrypto.so"),
            diagnostic: String::from("no such file"),
        }));
        outcome.record_result(result_with_bad("libssl.so", 0));
        assert!(!outcome.is_good());
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.load_failures.len(), 1);
        assert_eq!(outcome.load_failures[0].path, "libcrypto.so");
        assert_eq!(outcome.load_failures[0].diagnostic, "no such file");
    }

    #[test]
    fn test_all_skipped() {
        let no_paths: [&str; 0] = [];
        assert!(all_skipped(["-", "-"]));
        assert!(all_skipped(no_paths));
        assert!(!all_skipped(["-", "/usr/lib/libssl.so"]));
        assert!(!all_skipped(["/usr/lib/libz.so"]));
    }
}
