//! Stylesheet installation into the output tree.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use same_file::is_same_file;

/// Copy the stylesheet into the output tree, creating the destination
/// directory.
///
/// When the destination already points at the source file the copy is
/// skipped; otherwise a hard link is attempted before falling back to a byte
/// copy.
pub fn install_stylesheet(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    install_file(source, destination).with_context(|| {
        format!(
            "failed to install stylesheet {} to {}",
            source.display(),
            destination.display()
        )
    })
}

fn install_file(source: &Path, destination: &Path) -> std::io::Result<()> {
    if destination.exists() {
        if is_same_file(source, destination)? {
            return Ok(());
        }
        fs::remove_file(destination)?;
    }

    match fs::hard_link(source, destination) {
        Ok(_) => Ok(()),
        Err(err) => {
            if err.kind() == ErrorKind::AlreadyExists {
                Ok(())
            } else {
                fs::copy(source, destination).map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn installs_into_created_css_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("store.css");
        fs::write(&source, "body { margin: 0; }").unwrap();

        let destination = dir.path().join("bundles/css/store.css");
        install_stylesheet(&source, &destination).unwrap();

        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "body { margin: 0; }"
        );
    }

    #[test]
    fn reinstall_is_idempotent() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("store.css");
        fs::write(&source, "body { margin: 0; }").unwrap();

        let destination = dir.path().join("bundles/css/store.css");
        install_stylesheet(&source, &destination).unwrap();
        install_stylesheet(&source, &destination).unwrap();

        assert!(is_same_file(&source, &destination).unwrap());
    }

    #[test]
    fn replaces_a_stale_destination() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("store.css");
        fs::write(&source, "fresh").unwrap();

        let destination = dir.path().join("bundles/css/store.css");
        fs::create_dir_all(destination.parent().unwrap()).unwrap();
        fs::write(&destination, "stale").unwrap();

        install_stylesheet(&source, &destination).unwrap();
        assert_eq!(fs::read_to_string(&destination).unwrap(), "fresh");
    }

    #[test]
    fn missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let result = install_stylesheet(
            &dir.path().join("absent.css"),
            &dir.path().join("bundles/css/store.css"),
        );
        assert!(result.is_err());
    }
}
