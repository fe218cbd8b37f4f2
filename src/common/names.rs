/// Canonical lookup form of a display name: lowercase, spaces replaced with underscores.
pub fn safe_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::safe_name;

    #[test]
    fn lowercases_and_replaces_spaces() {
        assert_eq!(safe_name("Foo Bar"), "foo_bar");
        assert_eq!(safe_name("  Two  Spaces "), "__two__spaces_");
        assert_eq!(safe_name(""), "");
    }

    #[test]
    fn is_idempotent() {
        for name in ["Foo Bar", "cmyui", "Ünïcode Näme", "already_safe", "MiXeD 123 "] {
            let once = safe_name(name);
            assert_eq!(safe_name(&once), once);
        }
    }

    #[test]
    fn keeps_other_whitespace() {
        assert_eq!(safe_name("Tab\tName"), "tab\tname");
    }
}
