/// Strips the module path from a `std::any::type_name` string.
///
/// Generic arguments are kept as they are: `app::Wrapper<app::Inner>` becomes
/// `Wrapper<app::Inner>`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let path_end = full.find('<').unwrap_or(full.len());
    let start = full[..path_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

#[cfg(test)]
mod tests {
    use super::short_type_name;

    #[test]
    fn test_strips_module_path() {
        assert_eq!(short_type_name("app::events::UserSignedUp"), "UserSignedUp");
    }

    #[test]
    fn test_plain_name_untouched() {
        assert_eq!(short_type_name("UserSignedUp"), "UserSignedUp");
    }

    #[test]
    fn test_generic_arguments_kept() {
        assert_eq!(
            short_type_name("app::Wrapper<app::Inner>"),
            "Wrapper<app::Inner>"
        );
    }
}
