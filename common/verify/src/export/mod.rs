use serde::Serialize;

mod check;

/// One library to check: the path it was opened from, and the expected
/// export table. Tables produced by the upstream generator end with an
/// empty terminator entry; the scan stops there.
pub struct ExportCheck<'a> {
    pub path: &'a str,
    pub expected: &'a [&'a str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryVerifyResult {
    pub path: String,
    pub checked: usize,
    pub good: usize,
    pub bad: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<MissingSymbol>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSymbol {
    pub name: String,
    pub diagnostic: String,
}

/// Number of real entries in an export table, excluding the terminator.
pub fn table_len(expected: &[&str]) -> usize {
    return expected.iter().take_while(|name| !name.is_empty()).count();
}
