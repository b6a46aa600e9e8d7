//! CLI / template set version compatibility

use semver::Version;

/// Parse a version, accepting a leading `v`
fn parse_version(version: &str) -> Option<Version> {
    Version::parse(version.trim().trim_start_matches('v')).ok()
}

/// Warning text when the template set expects a newer CLI than the running one
///
/// Unparseable versions are not compared.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_version(cli_version)?;
    let required = parse_version(template_version)?;

    (cli < required).then(|| {
        format!(
            "Templates require CLI {} or newer (running {}). Upgrade with: {}",
            required, cli, upgrade_command
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install create-soldexer-pipe --force";

    #[test]
    fn test_older_cli_warns() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE).unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains(UPGRADE));
    }

    #[test]
    fn test_same_or_newer_cli_is_fine() {
        assert!(check_compatibility("0.1.1", "0.1.1", UPGRADE).is_none());
        assert!(check_compatibility("1.0.0", "v0.9.0", UPGRADE).is_none());
    }

    #[test]
    fn test_unparseable_versions_are_skipped() {
        assert!(check_compatibility("dev", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "latest", UPGRADE).is_none());
    }
}
