use std::borrow::Cow;
use std::env;
use std::path::Path;

/// Derives a human-readable project name from a log directory name
///
/// Claude stores each project's logs under a directory named after the
/// project's filesystem path with separators flattened to dashes
/// (e.g. `-Users-jane-projects-myapp`). For those names the leading
/// `-Users-<username>-` prefix is stripped; anything else is returned
/// unchanged. Directory names that would strip down to nothing keep their
/// raw form so the project never loses its identity.
///
/// # Examples
///
/// ```
/// use ai_prompt_archive::project_display_name;
///
/// assert_eq!(project_display_name("-Users-jane-projects-myapp"), "projects-myapp");
/// assert_eq!(project_display_name("scratch"), "scratch");
/// ```
pub fn project_display_name(dir_name: &str) -> String {
    if dir_name.starts_with("-Users-")
        && let Some(rest) = dir_name.splitn(4, '-').nth(3)
        && !rest.is_empty()
    {
        return rest.to_string();
    }
    dir_name.to_string()
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use ai_prompt_archive::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
