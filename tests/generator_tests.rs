#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;
    use themeshot::config::{Component, GenerationConfig};
    use themeshot::error::Error;
    use themeshot::generator::generate;
    use themeshot::templates::template;

    fn config(
        destination: PathBuf,
        typescript: bool,
        components: Vec<Component>,
    ) -> GenerationConfig {
        GenerationConfig { destination, typescript, components }
    }

    #[test]
    fn generates_typed_provider_and_toggle() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let created = generate(&config(
            out.clone(),
            true,
            vec![Component::ThemeProvider, Component::ThemeToggle],
        ))
        .unwrap();

        assert_eq!(
            created,
            vec![out.join("ThemeProvider.tsx"), out.join("ThemeToggle.tsx")]
        );
        assert_eq!(
            std::fs::read_to_string(out.join("ThemeProvider.tsx")).unwrap(),
            template(Component::ThemeProvider, true)
        );
        assert_eq!(
            std::fs::read_to_string(out.join("ThemeToggle.tsx")).unwrap(),
            template(Component::ThemeToggle, true)
        );
    }

    #[test]
    fn generates_only_the_selected_untyped_component() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let created =
            generate(&config(out.clone(), false, vec![Component::ThemeToggle])).unwrap();

        assert_eq!(created, vec![out.join("ThemeToggle.jsx")]);
        assert!(out.join("ThemeToggle.jsx").exists());
        assert!(!out.join("ThemeToggle.tsx").exists());
        assert!(!out.join("ThemeProvider.jsx").exists());
    }

    #[test]
    fn written_paths_follow_configuration_order() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let created = generate(&config(
            out.clone(),
            true,
            vec![Component::ThemeToggle, Component::ThemeProvider],
        ))
        .unwrap();

        assert_eq!(
            created,
            vec![out.join("ThemeToggle.tsx"), out.join("ThemeProvider.tsx")]
        );
    }

    #[test]
    fn directory_creation_is_idempotent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let config = config(out, true, vec![Component::ThemeProvider]);

        generate(&config).unwrap();
        generate(&config).unwrap();
    }

    #[test]
    fn second_run_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let target = out.join("ThemeProvider.tsx");
        std::fs::write(&target, "stale content").unwrap();

        generate(&config(out, true, vec![Component::ThemeProvider])).unwrap();

        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            template(Component::ThemeProvider, true)
        );
    }

    #[test]
    fn write_failure_leaves_earlier_files_in_place() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        // A directory squatting on the toggle's target path makes its write fail.
        std::fs::create_dir_all(out.join("ThemeToggle.tsx")).unwrap();

        let result = generate(&config(
            out.clone(),
            true,
            vec![Component::ThemeProvider, Component::ThemeToggle],
        ));

        assert!(matches!(result, Err(Error::GenerationError { .. })));
        // No rollback: the provider written before the failure stays on disk.
        assert_eq!(
            std::fs::read_to_string(out.join("ThemeProvider.tsx")).unwrap(),
            template(Component::ThemeProvider, true)
        );
    }

    #[test]
    fn unresolvable_working_directory_is_a_generation_error() {
        let orig = std::env::current_dir().unwrap();
        let dir = tempdir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        std::fs::remove_dir(dir.path()).unwrap();

        // Relative destinations resolve against the (now gone) working directory.
        let result = generate(&config(
            PathBuf::from("out"),
            true,
            vec![Component::ThemeProvider],
        ));

        std::env::set_current_dir(&orig).unwrap();
        assert!(matches!(result, Err(Error::GenerationError { .. })));
    }

    #[test]
    fn empty_destination_fails_validation() {
        let result = generate(&config(
            PathBuf::new(),
            true,
            vec![Component::ThemeProvider],
        ));
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn empty_selection_fails_before_touching_the_filesystem() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("never-created");

        let result = generate(&config(out.clone(), true, vec![]));

        assert!(matches!(result, Err(Error::ValidationError(_))));
        assert!(!out.exists());
    }
}
