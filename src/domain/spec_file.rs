//! Line-oriented model of an RPM spec file.
//!
//! Anchors are matched against whole lines, exactly and case-sensitively.
//! Only the first occurrence of an anchor is ever touched.

/// An RPM spec file held as a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecFile {
    lines: Vec<String>,
}

impl SpecFile {
    /// Split `text` on `\n`. A trailing newline yields a trailing empty line.
    pub fn parse(text: &str) -> Self {
        Self { lines: text.split('\n').map(str::to_string).collect() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn position(&self, anchor: &str) -> Option<usize> {
        self.lines.iter().position(|line| line == anchor)
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.position(anchor).is_some()
    }

    /// Drop every line before the first `anchor`. Returns `false` and keeps
    /// everything when the anchor is absent.
    pub fn truncate_before(&mut self, anchor: &str) -> bool {
        match self.position(anchor) {
            Some(index) => {
                self.lines.drain(..index);
                true
            }
            None => false,
        }
    }

    pub fn prepend<I, S>(&mut self, block: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let head: Vec<String> = block.into_iter().map(Into::into).collect();
        self.lines.splice(0..0, head);
    }

    pub fn insert_before<I, S>(&mut self, anchor: &str, block: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(index) = self.position(anchor) else {
            return false;
        };
        self.lines.splice(index..index, block.into_iter().map(Into::into));
        true
    }

    /// Replace the first `anchor` line with `block`. An empty block deletes it.
    pub fn replace<I, S>(&mut self, anchor: &str, block: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(index) = self.position(anchor) else {
            return false;
        };
        self.lines.splice(index..=index, block.into_iter().map(Into::into));
        true
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(text: &str) -> SpecFile {
        SpecFile::parse(text)
    }

    #[test]
    fn parse_keeps_trailing_empty_line() {
        let file = spec("a\nb\n");
        assert_eq!(file.lines(), ["a", "b", ""]);
        assert_eq!(file.render(), "a\nb\n");
    }

    #[test]
    fn truncate_drops_lines_before_first_anchor() {
        let mut file = spec("gen1\ngen2\n%if ! 0%{?with_bundled}\nbody\n%if ! 0%{?with_bundled}");
        assert!(file.truncate_before("%if ! 0%{?with_bundled}"));
        assert_eq!(file.lines(), ["%if ! 0%{?with_bundled}", "body", "%if ! 0%{?with_bundled}"]);
    }

    #[test]
    fn truncate_without_anchor_keeps_everything() {
        let mut file = spec("a\nb");
        assert!(!file.truncate_before("missing"));
        assert_eq!(file.lines(), ["a", "b"]);
    }

    #[test]
    fn anchors_match_whole_lines_only() {
        let mut file = spec("  %build\n%build extra\n%build");
        assert_eq!(file.position("%build"), Some(2));
        assert!(file.replace("%build", ["%build", "# set up"]));
        assert_eq!(file.lines(), ["  %build", "%build extra", "%build", "# set up"]);
    }

    #[test]
    fn prepend_places_block_first() {
        let mut file = spec("body");
        file.prepend(["one", "two"]);
        assert_eq!(file.render(), "one\ntwo\nbody");
    }

    #[test]
    fn insert_before_targets_first_match() {
        let mut file = spec("Name: x\n%description\ntext\n%description devel");
        assert!(file.insert_before("%description", ["Provides: a", ""]));
        assert_eq!(
            file.lines(),
            ["Name: x", "Provides: a", "", "%description", "text", "%description devel"]
        );
    }

    #[test]
    fn insert_before_missing_anchor_is_noop() {
        let mut file = spec("a");
        assert!(!file.insert_before("%description", ["x"]));
        assert_eq!(file.lines(), ["a"]);
    }

    #[test]
    fn replace_only_first_occurrence() {
        let mut file = spec("%check\n%check");
        assert!(file.replace("%check", ["# comment", "%check"]));
        assert_eq!(file.lines(), ["# comment", "%check", "%check"]);
    }

    #[test]
    fn replace_with_empty_block_deletes_anchor() {
        let mut file = spec("a\ndrop\nb");
        assert!(file.replace("drop", Vec::<String>::new()));
        assert_eq!(file.lines(), ["a", "b"]);
    }

    #[test]
    fn replace_missing_anchor_leaves_file_untouched() {
        let mut file = spec("first\nsecond");
        assert!(!file.replace("#%{_bindir}/", ["%{_bindir}/kompose"]));
        assert_eq!(file.lines(), ["first", "second"]);
    }
}
