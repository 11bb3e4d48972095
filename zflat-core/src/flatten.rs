//! Single-pass flattener: inline `lib/*.zsh` source directives into one file.
//!
//! Each entry-document line is tested against the fixed directive pattern.
//! Non-matching lines pass through verbatim at the same relative position.
//! A matching line becomes a blank line, a named delimiter comment and the
//! module content with one trailing newline stripped. A directive whose
//! module cannot be loaded is kept verbatim and reported as missing; the
//! transform never aborts on input problems.
//!
//! The pass is not recursive: directive lines inside inlined module content
//! are left as-is.

use std::sync::OnceLock;

use regex::Regex;

use crate::layout::raw_artifact_url;
use crate::modules::ModuleSource;

/// Banner rule line used at the top and bottom of the generated header.
const HEADER_RULE: &str =
    "# ============================================================================";

/// Rule segment on each side of a module delimiter line.
const SECTION_RULE: &str = "========================================";

fn directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^source "\$\{0:A:h\}/lib/(.+\.zsh)"$"#).expect("directive pattern is valid")
    })
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The fixed 5-line header prepended to every artifact.
pub fn header_lines(repo_url: &str) -> [String; 5] {
    let raw_url = raw_artifact_url(repo_url);
    [
        HEADER_RULE.to_string(),
        "# This file is AUTO-GENERATED — do not edit.".to_string(),
        format!("# Source: {repo_url}"),
        format!("# Install: fetch -qo ~/.zshrc.truenas {raw_url}"),
        HEADER_RULE.to_string(),
    ]
}

fn delimiter_line(name: &str) -> String {
    format!("# {SECTION_RULE} {name} {SECTION_RULE}")
}

// ---------------------------------------------------------------------------
// Flatten
// ---------------------------------------------------------------------------

/// Result of a flatten pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOutput {
    /// The complete artifact text, ending with a newline.
    pub text: String,
    /// Module names referenced by a directive but not loadable, in entry
    /// order. The original directive lines were kept for these.
    pub missing: Vec<String>,
    /// Number of lines in the artifact.
    pub line_count: usize,
}

/// Flatten `entry` into a single artifact, inlining modules from `modules`.
///
/// Deterministic: identical entry text and module content always produce
/// byte-identical output.
pub fn flatten(entry: &str, repo_url: &str, modules: &impl ModuleSource) -> FlattenOutput {
    let mut out: Vec<String> = header_lines(repo_url).to_vec();
    let mut missing = Vec::new();

    for line in entry.split('\n') {
        let Some(caps) = directive_re().captures(line) else {
            out.push(line.to_string());
            continue;
        };
        let name = &caps[1];
        match modules.load(name) {
            Some(content) => {
                out.push(String::new());
                out.push(delimiter_line(name));
                let trimmed = content.strip_suffix('\n').unwrap_or(content.as_str());
                out.push(trimmed.to_string());
            }
            None => {
                tracing::warn!("lib/{name} not found, keeping source line");
                missing.push(name.to_string());
                out.push(line.to_string());
            }
        }
    }

    let line_count = out.len();
    tracing::info!("Flattened: {line_count} lines");

    FlattenOutput {
        text: out.join("\n") + "\n",
        missing,
        line_count,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const REPO_URL: &str = "https://github.com/owner/repo";

    fn modules(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn body_lines(output: &FlattenOutput) -> Vec<String> {
        output.text.lines().skip(5).map(str::to_string).collect()
    }

    #[test]
    fn header_has_five_lines_with_raw_content_host() {
        let header = header_lines(REPO_URL);
        assert_eq!(header.len(), 5);
        assert_eq!(header[0], HEADER_RULE);
        assert_eq!(header[4], HEADER_RULE);
        assert_eq!(header[2], "# Source: https://github.com/owner/repo");
        assert!(
            header[3].contains("https://raw.githubusercontent.com/owner/repo/flat/truenas.zsh"),
            "install line must point at the raw-content host: {}",
            header[3]
        );
        assert!(
            !header[3].contains("https://github.com/"),
            "install line must not keep the repository host"
        );
    }

    #[test]
    fn single_directive_inlines_blank_line_delimiter_and_content() {
        let entry = "source \"${0:A:h}/lib/foo.zsh\"";
        let mods = modules(&[("foo.zsh", "echo hi\n")]);
        let output = flatten(entry, REPO_URL, &mods);

        let body = body_lines(&output);
        assert_eq!(body[0], "");
        assert_eq!(
            body[1],
            format!("# {SECTION_RULE} foo.zsh {SECTION_RULE}")
        );
        assert_eq!(body[2], "echo hi");
        assert!(output.missing.is_empty());
    }

    #[test]
    fn module_trailing_newline_is_stripped_exactly_once() {
        let entry = "source \"${0:A:h}/lib/foo.zsh\"";
        let mods = modules(&[("foo.zsh", "echo hi\n\n")]);
        let output = flatten(entry, REPO_URL, &mods);
        // Two trailing newlines in the module leave one blank line behind.
        assert!(output.text.ends_with("echo hi\n\n"));
        assert!(!output.text.ends_with("echo hi\n\n\n"));
    }

    #[test]
    fn missing_module_keeps_directive_and_records_one_warning() {
        let entry = "source \"${0:A:h}/lib/bar.zsh\"";
        let mods: HashMap<String, String> = HashMap::new();
        let output = flatten(entry, REPO_URL, &mods);

        let body = body_lines(&output);
        assert_eq!(body, vec![entry.to_string()]);
        assert_eq!(output.missing, vec!["bar.zsh".to_string()]);
    }

    #[test]
    fn non_directive_lines_are_preserved_in_order() {
        let entry = "# comment\nexport PATH=$PATH:/usr/local/bin\n\nsetopt autocd";
        let mods: HashMap<String, String> = HashMap::new();
        let output = flatten(entry, REPO_URL, &mods);

        let body = body_lines(&output);
        assert_eq!(
            body,
            vec![
                "# comment",
                "export PATH=$PATH:/usr/local/bin",
                "",
                "setopt autocd",
            ]
        );
    }

    #[test]
    fn inlined_block_shifts_later_lines_without_changing_them() {
        let entry = "before\nsource \"${0:A:h}/lib/mid.zsh\"\nafter";
        let mods = modules(&[("mid.zsh", "middle\n")]);
        let output = flatten(entry, REPO_URL, &mods);

        let body = body_lines(&output);
        assert_eq!(body[0], "before");
        assert_eq!(body[3], "middle");
        assert_eq!(body[4], "after");
    }

    #[test]
    fn near_miss_lines_are_not_directives() {
        // Indented, wrong dir, wrong extension, trailing text: all verbatim.
        let near_misses = [
            "  source \"${0:A:h}/lib/foo.zsh\"",
            "source \"${0:A:h}/share/foo.zsh\"",
            "source \"${0:A:h}/lib/foo.sh\"",
            "source \"${0:A:h}/lib/foo.zsh\" # comment",
        ];
        let mods = modules(&[("foo.zsh", "echo hi\n")]);
        for line in near_misses {
            let output = flatten(line, REPO_URL, &mods);
            let body = body_lines(&output);
            assert_eq!(body, vec![line.to_string()], "should not inline: {line}");
        }
    }

    #[test]
    fn nested_directives_are_not_expanded() {
        let entry = "source \"${0:A:h}/lib/outer.zsh\"";
        let mods = modules(&[
            ("outer.zsh", "source \"${0:A:h}/lib/inner.zsh\"\n"),
            ("inner.zsh", "echo inner\n"),
        ]);
        let output = flatten(entry, REPO_URL, &mods);
        assert!(
            output.text.contains("source \"${0:A:h}/lib/inner.zsh\""),
            "inner directive must stay verbatim inside inlined content"
        );
        assert!(!output.text.contains("echo inner"));
    }

    #[test]
    fn flatten_is_idempotent_for_identical_inputs() {
        let entry = "# top\nsource \"${0:A:h}/lib/a.zsh\"\nsource \"${0:A:h}/lib/b.zsh\"\n";
        let mods = modules(&[("a.zsh", "echo a\n")]);
        let first = flatten(entry, REPO_URL, &mods);
        let second = flatten(entry, REPO_URL, &mods);
        assert_eq!(first.text, second.text);
        assert_eq!(first.missing, second.missing);
    }

    #[test]
    fn line_count_matches_emitted_lines() {
        let entry = "one\ntwo";
        let mods: HashMap<String, String> = HashMap::new();
        let output = flatten(entry, REPO_URL, &mods);
        // 5 header lines + 2 entry lines.
        assert_eq!(output.line_count, 7);
    }

    #[test]
    fn output_always_ends_with_a_newline() {
        let mods: HashMap<String, String> = HashMap::new();
        for entry in ["no newline", "with newline\n"] {
            let output = flatten(entry, REPO_URL, &mods);
            assert!(output.text.ends_with('\n'));
        }
    }
}
