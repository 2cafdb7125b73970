use serde::Deserialize;

/// Policy bundle for [`ensure`](crate::ensure).
///
/// The defaults create whatever is missing and correct mismatched kinds.
/// Deserializes with `#[serde(default)]`, so a host tool can embed a partial
/// table in its own config file and only spell out the flags it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnsureOptions {
    /// Initial contents written to a newly created file. Ignored when the
    /// requested kind is a directory.
    pub default_contents: Vec<u8>,
    /// Delete and recreate an existing entry whose kind differs from the
    /// requested one. When `false`, mismatched entries are left untouched.
    pub auto_correct_kind: bool,
    /// Never create anything; fail with [`EnsureError::NotFound`] when the
    /// entry does not exist.
    ///
    /// [`EnsureError::NotFound`]: crate::EnsureError::NotFound
    pub must_exist: bool,
    /// Only meaningful with `must_exist`: additionally fail with
    /// [`EnsureError::KindMismatch`] when the entry has the wrong kind.
    ///
    /// [`EnsureError::KindMismatch`]: crate::EnsureError::KindMismatch
    pub verify_kind: bool,
}
impl Default for EnsureOptions {
    fn default() -> Self {
        Self {
            default_contents: Vec::new(),
            auto_correct_kind: true,
            must_exist: false,
            verify_kind: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let options = EnsureOptions::default();

        assert!(options.default_contents.is_empty());
        assert!(options.auto_correct_kind);
        assert!(!options.must_exist);
        assert!(options.verify_kind);
    }

    #[test]
    fn partial_toml_table_fills_in_defaults() {
        let options: EnsureOptions = toml::from_str("must_exist = true").unwrap();

        assert!(options.must_exist);
        assert!(options.auto_correct_kind);
        assert!(options.verify_kind);
        assert!(options.default_contents.is_empty());
    }

    #[test]
    fn default_contents_deserialize_as_bytes() {
        let options: EnsureOptions = toml::from_str("default_contents = [104, 105]").unwrap();

        assert_eq!(options.default_contents, b"hi");
    }
}
