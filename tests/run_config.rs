// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sequoia_lib::{config::RunConfig, error::LoadError};

    fn test_path(path: &str) -> String {
        std::env::var("CARGO_MANIFEST_DIR").unwrap() + "/tests/" + path
    }

    fn load_str(contents: &str, suffix: &str) -> Result<RunConfig, LoadError> {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        RunConfig::load(file.path().to_str().unwrap())
    }

    #[test]
    fn load() {
        let config = RunConfig::load(&test_path("run.yml")).unwrap();
        assert_eq!(
            config,
            RunConfig {
                client: "172.23.0.2:2375".to_string(),
                scope: "tests/basic.yml".to_string(),
                test: "tests/simple/test_simple.yml".to_string(),
                provider: "file:default.yml".to_string(),
                skip_setup: true,
                skip_test: false,
                skip_teardown: true,
                repeat: 2,
            }
        );
    }

    #[test]
    fn load_toml() {
        let config = load_str("scope = \"scope.toml\"\nskip_test = true\nrepeat = 3\n", ".toml")
            .unwrap();
        assert_eq!(config.scope, "scope.toml");
        assert!(config.skip_test);
        assert!(!config.skip_setup);
        assert_eq!(config.repeat, 3);
        assert_eq!(config.client, "");
    }

    #[test]
    fn omitted_fields() {
        assert_eq!(load_str("", ".yml").unwrap(), RunConfig::default());
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            load_str("repeat: [1, 2", ".yml"),
            Err(LoadError::Yaml { .. })
        ));
        assert!(matches!(
            RunConfig::load(&test_path("missing.yml")),
            Err(LoadError::Io { .. })
        ));
    }
}
