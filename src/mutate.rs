// Windows paths may arrive with either separator, even on other hosts
fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

// does the string name a path rather than a bare file name
pub fn has_separator(
                    path: &str
                ) -> bool
{
    path.contains(is_separator) || path.contains(':')
}

// does the last path segment carry an extension, e.g. "app.exe" but not "C:\my.dir\app"
pub fn has_extension(
                    path: &str
                ) -> bool
{
    image_name(path).contains('.')
}

// final segment of a path, trailing separators ignored
pub fn image_name(
                    path: &str
                ) -> String
{
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

// convert a string plus suffix to a Rust file path
pub fn push_file_path(
                        path: &str,
                        suffix: &str
                    ) -> std::path::PathBuf
{
    let mut p = path.to_owned();
    p.push_str(suffix);
    std::path::PathBuf::from(p)
}

// case-insensitive prefix test that never slices through a multi-byte char
pub fn starts_with_ignore_case(
                    text: &str,
                    prefix: &str
                ) -> bool
{
    text.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_name() {
        assert_eq!(image_name(r"C:\Windows\System32\svchost.exe"), "svchost.exe");
        assert_eq!(image_name("/opt/tools/agent"), "agent");
        assert_eq!(image_name(r"C:\Startup\"), "Startup");
        assert_eq!(image_name("notepad.exe"), "notepad.exe");
        assert_eq!(image_name(""), "");
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(r"C:\tools\app.exe"));
        assert!(!has_extension(r"C:\my.dir\app"));
        assert!(!has_extension("notepad"));
    }

    #[test]
    fn test_has_separator() {
        assert!(has_separator(r"bin\app"));
        assert!(has_separator("C:app.exe"));
        assert!(!has_separator("app.exe"));
    }

    #[test]
    fn test_starts_with_ignore_case() {
        assert!(starts_with_ignore_case(r"SYSTEM32\drivers", "system32"));
        assert!(!starts_with_ignore_case("sys", "system32"));
        assert!(!starts_with_ignore_case("ééééé", "abc"));
    }

    #[test]
    fn test_push_file_path() {
        assert_eq!(push_file_path("tool", ".exe"), std::path::PathBuf::from("tool.exe"));
    }
}
