use std::{
    borrow::Cow,
    path::{Component, Path},
};

/// Expands a leading `~` component to the caller's home directory.
///
/// Only the bare `~` marker is recognized; `~user` forms are left alone, as
/// is the whole path when the home directory cannot be resolved.
pub fn expand_user(path: &Path) -> Cow<'_, Path> {
    let mut components = path.components();

    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(mut expanded) => {
                expanded.push(components.as_path());
                Cow::Owned(expanded)
            }
            None => Cow::Borrowed(path),
        },
        _ => Cow::Borrowed(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_leading_tilde_component() {
        let home = dirs::home_dir().expect("a resolvable home directory");

        assert_eq!(expand_user(Path::new("~/sub/f")), home.join("sub/f"));
    }

    #[test]
    fn bare_tilde_resolves_to_home() {
        let home = dirs::home_dir().expect("a resolvable home directory");

        assert_eq!(expand_user(Path::new("~")), home);
    }

    #[test]
    fn tilde_user_form_is_left_alone() {
        assert_eq!(expand_user(Path::new("~other/f")), Path::new("~other/f"));
    }

    #[test]
    fn plain_paths_pass_through_borrowed() {
        assert!(matches!(
            expand_user(Path::new("/etc/hosts")),
            Cow::Borrowed(_)
        ));
        assert!(matches!(expand_user(Path::new("sub/f")), Cow::Borrowed(_)));
    }
}
