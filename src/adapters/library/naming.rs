//! Name helpers for the library directory

use crate::domain::{LecternError, RecordName, Result};
use regex::Regex;

const CONFLICT_SUFFIX: &str = r"（\d+）$";

/// Last path component of an uploaded file name
///
/// Both separator styles are stripped; an upload may carry a client-side
/// path from any platform.
pub fn upload_file_name(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw).trim()
}

/// First free `base（n）.json` variant of `name`
///
/// An existing trailing `（n）` is removed before numbering restarts at 1,
/// so `课时（1）.json` colliding yields `课时（2）.json` rather than
/// `课时（1）（1）.json`.
pub fn conflict_name(name: &RecordName, exists: impl Fn(&str) -> bool) -> Result<RecordName> {
    let suffix = Regex::new(CONFLICT_SUFFIX)
        .map_err(|e| LecternError::Validation(format!("Invalid conflict pattern: {e}")))?;

    let base = suffix.replace(name.base_name(), "");
    let extension = &name.as_str()[name.base_name().len()..];

    let mut n = 1u32;
    loop {
        let candidate = format!("{base}（{n}）{extension}");
        if !exists(&candidate) {
            return RecordName::new(candidate).map_err(LecternError::Validation);
        }
        n += 1;
    }
}

/// Size with one decimal above a kilobyte: `512 B`, `1.5 KB`, `2.0 MB`
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b < KB => format!("{b} B"),
        b if b < MB => format!("{:.1} KB", b as f64 / KB as f64),
        b if b < GB => format!("{:.1} MB", b as f64 / MB as f64),
        b => format!("{:.1} GB", b as f64 / GB as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case("lesson.json", "lesson.json" ; "plain")]
    #[test_case("C:\\Users\\me\\课时.json", "课时.json" ; "windows path")]
    #[test_case("uploads/unit 3.json", "unit 3.json" ; "posix path")]
    fn test_upload_file_name(raw: &str, expected: &str) {
        assert_eq!(upload_file_name(raw), expected);
    }

    #[test]
    fn test_conflict_name_first_free() {
        let name = RecordName::from_str("课时.json").unwrap();
        let taken = ["课时（1）.json", "课时（2）.json"];
        let next = conflict_name(&name, |c| taken.contains(&c)).unwrap();
        assert_eq!(next.as_str(), "课时（3）.json");
    }

    #[test]
    fn test_conflict_name_strips_existing_counter() {
        let name = RecordName::from_str("课时（1）.json").unwrap();
        let next = conflict_name(&name, |c| c == "课时（1）.json").unwrap();
        assert_eq!(next.as_str(), "课时（2）.json");
    }

    #[test]
    fn test_conflict_name_keeps_extension_case() {
        let name = RecordName::from_str("Plan.JSON").unwrap();
        let next = conflict_name(&name, |_| false).unwrap();
        assert_eq!(next.as_str(), "Plan（1）.JSON");
    }

    #[test_case(0, "0 B")]
    #[test_case(1023, "1023 B")]
    #[test_case(1536, "1.5 KB")]
    #[test_case(5 * 1024 * 1024, "5.0 MB")]
    #[test_case(3 * 1024 * 1024 * 1024, "3.0 GB")]
    fn test_human_size(bytes: u64, expected: &str) {
        assert_eq!(human_size(bytes), expected);
    }
}
