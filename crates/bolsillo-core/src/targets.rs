use std::path::Path;

/// The auto-hide target list: executable paths whose windows are hidden
/// into the tray as soon as they appear.
///
/// Stored as `targets.txt` — one absolute path per line, UTF-8, blank
/// lines skipped. The file is read fully and rewritten fully on save.
/// Matching is case-insensitive, mirroring how Windows treats paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    paths: Vec<String>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a target list from file contents.
    ///
    /// Lines are trimmed (tolerating CRLF endings); blank lines are
    /// skipped. Order is preserved.
    pub fn parse(contents: &str) -> Self {
        let paths = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { paths }
    }

    /// Loads the list from a file. A missing or unreadable file yields an
    /// empty list — a fresh installation has no targets yet.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::new(),
        }
    }

    /// Serializes the list back to file contents, one path per line.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for path in &self.paths {
            out.push_str(path);
            out.push('\n');
        }
        out
    }

    /// Writes the full list to a file, replacing previous contents.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.serialize())
    }

    /// Returns whether an executable path is on the list (case-insensitive).
    pub fn contains(&self, exe_path: &str) -> bool {
        self.paths.iter().any(|p| p.eq_ignore_ascii_case(exe_path))
    }

    /// Appends a path if it is not already present (case-insensitive).
    ///
    /// Returns `false` without modifying the list when a duplicate exists.
    pub fn add(&mut self, exe_path: &str) -> bool {
        if self.contains(exe_path) {
            return false;
        }
        self.paths.push(exe_path.to_string());
        true
    }

    /// Removes a path (case-insensitive). Returns whether it was present.
    pub fn remove(&mut self, exe_path: &str) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| !p.eq_ignore_ascii_case(exe_path));
        self.paths.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_crlf() {
        // Arrange
        let contents = "C:\\bin\\notes.exe\r\n\r\n  \r\nD:\\tools\\chat.exe\n";

        // Act
        let targets = TargetList::parse(contents);

        // Assert
        assert_eq!(targets.len(), 2);
        assert!(targets.contains("C:\\bin\\notes.exe"));
        assert!(targets.contains("D:\\tools\\chat.exe"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let targets = TargetList::parse("C:\\Apps\\Foo.EXE\n");

        assert!(targets.contains("c:\\apps\\foo.exe"));
        assert!(targets.contains("C:\\APPS\\FOO.exe"));
        assert!(!targets.contains("c:\\apps\\bar.exe"));
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut targets = TargetList::new();

        assert!(targets.add("C:\\bin\\notes.exe"));
        assert!(!targets.add("c:\\BIN\\notes.EXE"));
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut targets = TargetList::parse("C:\\bin\\notes.exe\n");

        assert!(targets.remove("c:\\bin\\NOTES.exe"));
        assert!(targets.is_empty());
        assert!(!targets.remove("c:\\bin\\notes.exe"));
    }

    #[test]
    fn serialize_round_trips_and_preserves_order() {
        let mut targets = TargetList::new();
        targets.add("C:\\bin\\b.exe");
        targets.add("C:\\bin\\a.exe");

        let reparsed = TargetList::parse(&targets.serialize());

        assert_eq!(reparsed, targets);
        assert_eq!(
            reparsed.iter().collect::<Vec<_>>(),
            vec!["C:\\bin\\b.exe", "C:\\bin\\a.exe"]
        );
    }

    #[test]
    fn empty_contents_parse_to_empty_list() {
        assert!(TargetList::parse("").is_empty());
        assert!(TargetList::parse("\n\n").is_empty());
    }
}
