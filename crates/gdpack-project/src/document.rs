//! Raw-text-preserving Godot config documents.
//!
//! `project.godot` and `plugin.cfg` are INI-style files that users edit by
//! hand, so gdpack never reserializes them wholesale. A parsed document is
//! an ordered sequence of line records; reading and writing individual keys
//! re-emits every untouched line verbatim and in original order, keeping
//! comments, blank lines, and unknown sections intact.

use std::fmt;
use std::ops::Range;

/// One physical line of a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// `[section]`
    Section { name: String, raw: String },
    /// `key=value`
    Entry {
        key: String,
        value: String,
        raw: String,
    },
    /// Anything else: comments, blank lines, continuation junk.
    Text { raw: String },
}

impl Line {
    fn raw(&self) -> &str {
        match self {
            Self::Section { raw, .. } | Self::Entry { raw, .. } | Self::Text { raw } => raw,
        }
    }
}

/// An ordered, format-preserving view of a Godot config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<Line>,
}

impl ConfigDocument {
    /// Parse a config file. Never fails: unrecognized lines are preserved
    /// as free text.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| {
                let trimmed = line.trim();
                if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    Line::Section {
                        name: trimmed[1..trimmed.len() - 1].to_string(),
                        raw: line.to_string(),
                    }
                } else if trimmed.starts_with(';') || trimmed.starts_with('#') {
                    Line::Text {
                        raw: line.to_string(),
                    }
                } else if let Some(idx) = line.find('=') {
                    Line::Entry {
                        key: line[..idx].trim().to_string(),
                        value: line[idx + 1..].trim().to_string(),
                        raw: line.to_string(),
                    }
                } else {
                    Line::Text {
                        raw: line.to_string(),
                    }
                }
            })
            .collect();

        Self { lines }
    }

    /// Get the value of `key` in `section` (`None` = the leading global
    /// section).
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        let range = self.section_range(section)?;
        self.lines[range].iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// All `key=value` entries of `section`, in file order.
    pub fn entries(&self, section: Option<&str>) -> Vec<(&str, &str)> {
        let Some(range) = self.section_range(section) else {
            return Vec::new();
        };
        self.lines[range]
            .iter()
            .filter_map(|line| match line {
                Line::Entry { key, value, .. } => Some((key.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Set `key` in `section` to `value`, creating the section and the
    /// entry as needed. Only the touched line is rewritten.
    pub fn set(&mut self, section: Option<&str>, key: &str, value: &str) {
        let range = match self.section_range(section) {
            Some(range) => range,
            None => {
                // Section is absent; append a header at the end of the file.
                let name = section.unwrap_or_default();
                if self
                    .lines
                    .last()
                    .is_some_and(|line| !line.raw().trim().is_empty())
                {
                    self.lines.push(Line::Text { raw: String::new() });
                }
                self.lines.push(Line::Section {
                    name: name.to_string(),
                    raw: format!("[{name}]"),
                });
                let end = self.lines.len();
                end..end
            }
        };

        let existing = self.lines[range.clone()].iter().position(|line| {
            matches!(line, Line::Entry { key: k, .. } if k == key)
        });

        let raw = format!("{key}={value}");
        match existing {
            Some(offset) => {
                self.lines[range.start + offset] = Line::Entry {
                    key: key.to_string(),
                    value: value.to_string(),
                    raw,
                };
            }
            None => {
                // Insert after the section's last entry so trailing blank
                // lines stay at the section boundary.
                let insert_at = self.lines[range.clone()]
                    .iter()
                    .rposition(|line| matches!(line, Line::Entry { .. }))
                    .map_or(range.start, |offset| range.start + offset + 1);
                self.lines.insert(
                    insert_at,
                    Line::Entry {
                        key: key.to_string(),
                        value: value.to_string(),
                        raw,
                    },
                );
            }
        }
    }

    /// Remove `key` from `section`. Returns whether an entry was removed.
    pub fn remove(&mut self, section: Option<&str>, key: &str) -> bool {
        let Some(range) = self.section_range(section) else {
            return false;
        };
        let position = self.lines[range.clone()].iter().position(|line| {
            matches!(line, Line::Entry { key: k, .. } if k == key)
        });
        match position {
            Some(offset) => {
                self.lines.remove(range.start + offset);
                true
            }
            None => false,
        }
    }

    /// Line index range of a section's body (excluding its header).
    fn section_range(&self, section: Option<&str>) -> Option<Range<usize>> {
        let start = match section {
            None => 0,
            Some(name) => {
                self.lines.iter().position(
                    |line| matches!(line, Line::Section { name: n, .. } if n == name),
                )? + 1
            }
        };

        let end = self.lines[start..]
            .iter()
            .position(|line| matches!(line, Line::Section { .. }))
            .map_or(self.lines.len(), |offset| start + offset);

        Some(start..end)
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in &self.lines {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", line.raw())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "; Engine configuration file.\nconfig_version=5\n\n[application]\n\nconfig/name=\"Demo\"\n\n[gdpack]\n\ndependencies=PackedStringArray(\"ui@repo-x@1.0.0\")\n";

    #[test]
    fn round_trips_untouched_input_verbatim() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert_eq!(doc.to_string(), SAMPLE);
    }

    #[test]
    fn gets_global_and_sectioned_keys() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert_eq!(doc.get(None, "config_version"), Some("5"));
        assert_eq!(doc.get(Some("application"), "config/name"), Some("\"Demo\""));
        assert_eq!(
            doc.get(Some("gdpack"), "dependencies"),
            Some("PackedStringArray(\"ui@repo-x@1.0.0\")")
        );
        assert_eq!(doc.get(Some("gdpack"), "exports"), None);
        assert_eq!(doc.get(Some("missing"), "anything"), None);
    }

    #[test]
    fn comment_lines_are_not_entries() {
        let doc = ConfigDocument::parse("; key=value\n# other=thing\nreal=1\n");
        assert_eq!(doc.get(None, "; key"), None);
        assert_eq!(doc.get(None, "real"), Some("1"));
    }

    #[test]
    fn set_updates_in_place_and_preserves_the_rest() {
        let mut doc = ConfigDocument::parse(SAMPLE);
        doc.set(Some("gdpack"), "dependencies", "PackedStringArray()");
        let text = doc.to_string();
        assert!(text.contains("dependencies=PackedStringArray()"));
        assert!(text.starts_with("; Engine configuration file.\n"));
        assert!(text.contains("config/name=\"Demo\""));
    }

    #[test]
    fn set_appends_missing_key_to_existing_section() {
        let mut doc = ConfigDocument::parse(SAMPLE);
        doc.set(Some("gdpack"), "exports", "PackedStringArray(\"ui\")");
        let text = doc.to_string();
        let deps_at = text.find("dependencies=").unwrap();
        let exports_at = text.find("exports=").unwrap();
        assert!(exports_at > deps_at, "new keys land after existing entries");
    }

    #[test]
    fn set_creates_missing_section_at_end() {
        let mut doc = ConfigDocument::parse("config_version=5\n");
        doc.set(Some("gdpack"), "dependencies", "PackedStringArray()");
        assert_eq!(
            doc.to_string(),
            "config_version=5\n\n[gdpack]\ndependencies=PackedStringArray()"
        );
    }

    #[test]
    fn set_on_empty_document() {
        let mut doc = ConfigDocument::parse("");
        doc.set(Some("plugin"), "name", "\"Demo\"");
        assert_eq!(doc.to_string(), "\n[plugin]\nname=\"Demo\"");
    }

    #[test]
    fn remove_deletes_only_the_entry() {
        let mut doc = ConfigDocument::parse(SAMPLE);
        assert!(doc.remove(Some("gdpack"), "dependencies"));
        assert!(!doc.remove(Some("gdpack"), "dependencies"));
        let text = doc.to_string();
        assert!(!text.contains("dependencies="));
        assert!(text.contains("[gdpack]"));
    }

    #[test]
    fn entries_enumerates_a_section_in_order() {
        let doc = ConfigDocument::parse("[dependencies]\nfox=\"fox@repo-y@2.0.0\"\nui=\"ui@repo-x@1.0.0\"\n");
        assert_eq!(
            doc.entries(Some("dependencies")),
            vec![("fox", "\"fox@repo-y@2.0.0\""), ("ui", "\"ui@repo-x@1.0.0\"")]
        );
    }

    #[test]
    fn values_may_contain_equals_signs() {
        let doc = ConfigDocument::parse("run/main_scene=\"res://a=b.tscn\"\n");
        assert_eq!(doc.get(None, "run/main_scene"), Some("\"res://a=b.tscn\""));
    }
}
