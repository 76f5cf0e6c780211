use std::error::Error;
use std::path::{Path, PathBuf};

use watchrun::errors::WatchrunError;
use watchrun::exec::{current_dir_qualified, resolve_command};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn bare_name_is_current_dir_qualified() {
    assert_eq!(current_dir_qualified(Path::new("x")), PathBuf::from("./x"));
}

#[test]
fn paths_with_a_directory_component_are_unchanged() {
    assert_eq!(
        current_dir_qualified(Path::new("scripts/x")),
        PathBuf::from("scripts/x")
    );
    assert_eq!(current_dir_qualified(Path::new("./x")), PathBuf::from("./x"));
    assert_eq!(
        current_dir_qualified(Path::new("/usr/bin/x")),
        PathBuf::from("/usr/bin/x")
    );
}

#[test]
fn interpreter_invocation_prepends_file_and_keeps_arg_order() -> TestResult {
    let extra = vec!["--flag".to_string(), "value".to_string()];
    let cmd = resolve_command(Path::new("script.py"), Some("python3"), &extra)?;

    assert_eq!(cmd.program, PathBuf::from("python3"));
    assert_eq!(cmd.args, vec!["script.py", "--flag", "value"]);

    Ok(())
}

#[cfg(unix)]
mod unix {
    use super::*;

    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use tempfile::tempdir;

    #[test]
    fn direct_execution_requires_the_executable_bit() -> TestResult {
        let dir = tempdir()?;
        let file = dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n")?;
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644))?;

        let err = resolve_command(&file, None, &[]).unwrap_err();
        assert!(matches!(err, WatchrunError::Config(_)));

        Ok(())
    }

    #[test]
    fn executable_file_is_invoked_directly() -> TestResult {
        let dir = tempdir()?;
        let file = dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n")?;
        fs::set_permissions(&file, fs::Permissions::from_mode(0o755))?;

        let extra = vec!["a".to_string(), "b".to_string()];
        let cmd = resolve_command(&file, None, &extra)?;

        // Absolute path already has a directory component, no `./` needed.
        assert_eq!(cmd.program, file);
        assert_eq!(cmd.args, extra);

        Ok(())
    }

    #[test]
    fn non_executable_file_is_fine_with_an_interpreter() -> TestResult {
        let dir = tempdir()?;
        let file = dir.path().join("script.sh");
        fs::write(&file, "echo hi\n")?;
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644))?;

        let cmd = resolve_command(&file, Some("/bin/sh"), &[])?;
        assert_eq!(cmd.program, PathBuf::from("/bin/sh"));
        assert_eq!(cmd.args, vec![file.to_string_lossy().into_owned()]);

        Ok(())
    }

    #[test]
    fn missing_file_without_interpreter_is_a_file_access_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nope.sh");

        let err = resolve_command(&file, None, &[]).unwrap_err();
        assert!(matches!(err, WatchrunError::FileAccess { .. }));
    }
}
