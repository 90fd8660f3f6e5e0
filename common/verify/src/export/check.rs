use crate::export::{ExportCheck, LibraryVerifyResult, MissingSymbol};
use crate::{Verify, VerifyResult};

impl<'a> Verify<LibraryVerifyResult> for ExportCheck<'a> {
    fn verify<F>(&self, resolve: &F) -> LibraryVerifyResult
    where
        F: Fn(&str) -> Result<(), String>,
    {
        let mut result = LibraryVerifyResult::new(self.path);
        for name in self.expected {
            if name.is_empty() {
                // Table terminator. Entries past it are never read.
                break;
            }
            result.checked += 1;
            match resolve(name) {
                Ok(()) => result.good += 1,
                Err(diagnostic) => {
                    result.bad += 1;
                    result.missing.push(MissingSymbol {
                        name: String::from(*name),
                        diagnostic,
                    });
                }
            }
        }
        return result;
    }
}

impl LibraryVerifyResult {
    pub fn new<N: AsRef<str>>(path: N) -> Self {
        return Self {
            path: String::from(path.as_ref()),
            checked: 0,
            good: 0,
            bad: 0,
            missing: Default::default(),
        };
    }
}

impl VerifyResult for LibraryVerifyResult {
    fn is_good(&self) -> bool {
        return self.bad == 0;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::export::{table_len, ExportCheck};
    use crate::{Verify, VerifyResult};

    fn resolve_in<'a>(exported: &'a [&'a str]) -> impl Fn(&str) -> Result<(), String> + 'a {
        return move |name: &str| {
            if exported.contains(&name) {
                return Ok(());
            }
            return Err(format!("undefined symbol: {name}"));
        };
    }

    #[test]
    fn test_all_symbols_resolve() {
        let check = ExportCheck {
            path: "libsample.so",
            expected: &["init", "encrypt", "decrypt"],
        };
        let result = check.verify(&resolve_in(&["init", "encrypt", "decrypt"]));
        assert_eq!(result.path, "libsample.so");
        assert_eq!(result.checked, 3);
        assert_eq!(result.good, 3);
        assert_eq!(result.bad, 0);
        assert!(result.missing.is_empty());
        assert!(result.is_good());
    }

    #[test]
    fn test_missing_symbol_counted_and_named() {
        let check = ExportCheck {
            path: "libsample.so",
            expected: &["init", "encrypt", "decrypt"],
        };
        let result = check.verify(&resolve_in(&["init", "decrypt"]));
        assert_eq!(result.checked, 3);
        assert_eq!(result.good, 2);
        assert_eq!(result.bad, 1);
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].name, "encrypt");
        assert_eq!(result.missing[0].diagnostic, "undefined symbol: encrypt");
        assert!(!result.is_good());
    }

    #[test]
    fn test_missing_symbols_keep_table_order() {
        let check = ExportCheck {
            path: "libsample.so",
            expected: &["a", "b", "c", "d", "e"],
        };
        let result = check.verify(&resolve_in(&["b", "d"]));
        let names: Vec<&str> = result.missing.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "e"]);
        assert_eq!(result.good + result.bad, result.checked);
    }

    #[test]
    fn test_duplicate_names_checked_independently() {
        let check = ExportCheck {
            path: "libsample.so",
            expected: &["init", "init", "gone", "gone"],
        };
        let result = check.verify(&resolve_in(&["init"]));
        assert_eq!(result.checked, 4);
        assert_eq!(result.good, 2);
        assert_eq!(result.bad, 2);
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_scan_stops_at_terminator() {
        let seen: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let resolve = |name: &str| {
            seen.borrow_mut().push(String::from(name));
            return Ok(());
        };
        let check = ExportCheck {
            path: "libsample.so",
            expected: &["init", "encrypt", "", "never"],
        };
        let result = check.verify(&resolve);
        assert_eq!(result.checked, 2);
        assert_eq!(result.good, 2);
        assert_eq!(*seen.borrow(), vec!["init", "encrypt"]);
    }

    #[test]
    fn test_empty_table() {
        let check = ExportCheck {
            path: "libsample.so",
            expected: &[],
        };
        let result = check.verify(&resolve_in(&[]));
        assert_eq!(result.checked, 0);
        assert!(result.is_good());
    }

    #[test]
    fn test_table_len_excludes_terminator() {
        assert_eq!(table_len(&["a", "b", ""]), 2);
        assert_eq!(table_len(&["a", "b"]), 2);
        assert_eq!(table_len(&[""]), 0);
        assert_eq!(table_len(&[]), 0);
    }
}
