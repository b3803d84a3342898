//! File metadata derived from a `file` node's path.
//!
//! Front ends write their intermediate trees next to the source as
//! `<name>_processed<ext>`. The index reports the original file name and the
//! directory relative to the project root.

use serde::{Serialize, Serializer};

/// Derived file name and project-relative directory, each independently
/// optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMetadata {
    pub file_name: Option<String>,
    pub path: Option<String>,
}

/// Serializes as the pair `[file_name, path]`, `null` where absent.
impl Serialize for FileMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.file_name, &self.path).serialize(serializer)
    }
}

const PROCESSED_MARKER: &str = "_processed.";

/// `dir/model_processed.xml` → `model.xml`.
///
/// Looks only at the last `/`-separated segment. The last `_processed`
/// directly followed by an extension is removed; anything else yields `None`.
pub fn derive_file_name(path: &str) -> Option<String> {
    let file = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = file.rsplit_once(PROCESSED_MARKER)?;
    Some(format!("{stem}.{ext}"))
}

/// Directory of `path` relative to (and including) the project root.
///
/// The run starts at the last `<root>/` whose next character does not occur
/// in `root` itself, and ends before the last `/` that is followed by a word
/// character. For root `delphi`,
/// `/home/u/delphi/translators/for2py/m.xml` gives `delphi/translators/for2py`.
pub fn derive_project_path(path: &str, root: &str) -> Option<String> {
    if root.is_empty() {
        return None;
    }
    let marker = format!("{root}/");
    let starts: Vec<usize> = path.match_indices(&marker).map(|(at, _)| at).collect();

    starts.into_iter().rev().find_map(|start| {
        let after = start + marker.len();
        let first = path[after..].chars().next()?;
        if root.contains(first) {
            return None;
        }
        let body = after + first.len_utf8();
        let end = body + last_slash_before_word(&path[body..])?;
        Some(path[start..end].to_string())
    })
}

/// Byte offset of the last `/` immediately followed by a word character.
fn last_slash_before_word(s: &str) -> Option<usize> {
    s.char_indices()
        .filter(|&(at, c)| {
            c == '/'
                && s[at + 1..]
                    .chars()
                    .next()
                    .is_some_and(|next| next.is_alphanumeric() || next == '_')
        })
        .map(|(at, _)| at)
        .last()
}

#[cfg(test)]
mod tests;
