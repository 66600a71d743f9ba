use crate::entry::Entry;
use std::fs;
use std::path::Path;

/// Reads one directory's immediate children, skipping hidden names except
/// the `..` parent reference, sorted ascending by name (byte order).
pub fn read_directory(path: &Path) -> Result<Vec<Entry>, std::io::Error> {
    let read_dir = fs::read_dir(path)?;

    let mut entries = Vec::new();
    for dir_entry in read_dir.flatten() {
        let child = dir_entry.path();
        if let Some(name) = child.file_name() {
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
        }
        if let Some(entry) = Entry::from_path(child) {
            entries.push(entry);
        }
    }

    if let Some(parent) = path.parent() {
        entries.push(Entry::parent(parent.to_path_buf()));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("beta.txt")).unwrap();
        File::create(dir.path().join("alpha.txt")).unwrap();
        File::create(dir.path().join("Zeta.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        fs::create_dir(dir.path().join("music")).unwrap();
        dir
    }

    #[test]
    fn listing_is_sorted_by_name_byte_order() {
        let dir = fixture();
        let entries = read_directory(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        // Uppercase sorts before lowercase under byte comparison.
        assert_eq!(names, vec!["..", "Zeta.txt", "alpha.txt", "beta.txt", "music"]);
    }

    #[test]
    fn hidden_entries_are_excluded_except_parent() {
        let dir = fixture();
        let entries = read_directory(dir.path()).unwrap();
        assert!(entries.iter().all(|e| !e.name.starts_with('.') || e.name == ".."));
        assert!(entries.iter().any(|e| e.name == ".."));
    }

    #[test]
    fn parent_entry_points_at_parent_directory() {
        let dir = fixture();
        let entries = read_directory(dir.path()).unwrap();
        let parent = entries.iter().find(|e| e.name == "..").unwrap();
        assert_eq!(parent.path, dir.path().parent().unwrap());
        assert!(parent.is_dir);
    }

    #[test]
    fn directory_flag_and_size_come_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.bin"), vec![0u8; 123]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = read_directory(dir.path()).unwrap();
        let file = entries.iter().find(|e| e.name == "data.bin").unwrap();
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert!(!file.is_dir);
        assert_eq!(file.size, 123);
        assert!(sub.is_dir);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(read_directory(&missing).is_err());
    }
}
