//! Text patch for `tailwind.config.{ts,js}`
//!
//! The config is TypeScript/JavaScript source, so it is patched as text:
//! the typography plugin is added to the `plugins` list and the content
//! globs left over from the `pages/` layout are rewritten for the root
//! `app/` directory. Once the plugin marker is present the patch is a no-op,
//! which makes repeated application safe.

/// Substring whose presence means the patch was already applied
pub const TYPOGRAPHY_MARKER: &str = "@tailwindcss/typography";

const TYPOGRAPHY_PLUGIN: &str = "require('@tailwindcss/typography')";

const PLUGIN_LIST: &str = "plugins: [";

/// Candidate config file names, in lookup order
pub const CONFIG_FILES: &[&str] = &["tailwind.config.ts", "tailwind.config.js"];

/// What happens to a legacy glob literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobAction {
    Replace(&'static str),
    /// Drop the entry together with its trailing comma
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobRule {
    pub legacy: &'static str,
    pub action: GlobAction,
}

pub const GLOB_RULES: [GlobRule; 3] = [
    GlobRule {
        legacy: "\"./src/pages/**/*.{js,ts,jsx,tsx,mdx}\"",
        action: GlobAction::Replace("\"./app/**/*.{ts,tsx,mdx}\""),
    },
    GlobRule {
        legacy: "\"./src/components/**/*.{js,ts,jsx,tsx,mdx}\"",
        action: GlobAction::Replace("\"./src/**/*.{ts,tsx,mdx}\""),
    },
    GlobRule {
        legacy: "\"./src/app/**/*.{js,ts,jsx,tsx,mdx}\"",
        action: GlobAction::Remove,
    },
];

/// Patch a tailwind config source. Returns the input unchanged when the
/// typography plugin is already referenced.
pub fn patch_config(source: &str) -> String {
    if source.contains(TYPOGRAPHY_MARKER) {
        return source.to_string();
    }

    let rewritten = rewrite_globs(source);

    append_to_plugin_list(&rewritten)
        .or_else(|| insert_plugin_list(&rewritten))
        .unwrap_or(rewritten)
}

/// Apply every glob rule until none matches. Each application shortens
/// the text, so this terminates.
pub fn rewrite_globs(source: &str) -> String {
    let mut text = source.to_string();
    loop {
        let before = text.len();
        for rule in &GLOB_RULES {
            text = apply_rule(&text, rule);
        }
        if text.len() == before {
            return text;
        }
    }
}

/// Apply one rule to every occurrence of its literal
pub fn apply_rule(source: &str, rule: &GlobRule) -> String {
    if !source.contains(rule.legacy) {
        return source.to_string();
    }

    match rule.action {
        GlobAction::Replace(replacement) => source.replace(rule.legacy, replacement),
        GlobAction::Remove => {
            let mut text = source.to_string();
            while let Some(start) = text.find(rule.legacy) {
                text = remove_entry(&text, start, rule.legacy.len());
            }
            text
        }
    }
}

/// Remove `len` bytes at `start` plus a directly following comma. When the
/// entry sat alone on its line the whole line goes.
fn remove_entry(text: &str, start: usize, len: usize) -> String {
    let mut end = start + len;
    if text[end..].starts_with(',') {
        end += 1;
    }

    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[end..].find('\n').map(|i| end + i);

    let alone_on_line = text[line_start..start].trim().is_empty()
        && text[end..line_end.unwrap_or(text.len())].trim().is_empty();

    if alone_on_line {
        match line_end {
            Some(newline) => format!("{}{}", &text[..line_start], &text[newline + 1..]),
            None => text[..line_start].to_string(),
        }
    } else {
        format!("{}{}", &text[..start], &text[end..])
    }
}

/// Add the plugin to the first `plugins: [...]` list
fn append_to_plugin_list(source: &str) -> Option<String> {
    let open = source.find(PLUGIN_LIST)? + PLUGIN_LIST.len() - 1;
    let close = matching_bracket(source, open)?;

    let inner = &source[open + 1..close];
    let body = inner.trim_end();
    let tail = &inner[body.len()..];

    let new_inner = if body.trim().is_empty() {
        format!("{}{}", TYPOGRAPHY_PLUGIN, tail)
    } else {
        let trailing_comma = body.ends_with(',');
        let items = body.strip_suffix(',').unwrap_or(body);
        let separator = if body.contains('\n') {
            let last_line = body.rsplit('\n').next().unwrap_or("");
            let indent = &last_line[..last_line.len() - last_line.trim_start().len()];
            format!("\n{}", indent)
        } else {
            " ".to_string()
        };
        format!(
            "{},{}{}{}{}",
            items,
            separator,
            TYPOGRAPHY_PLUGIN,
            if trailing_comma { "," } else { "" },
            tail
        )
    };

    Some(format!(
        "{}{}{}",
        &source[..open + 1],
        new_inner,
        &source[close..]
    ))
}

/// Index of the `]` closing the `[` at `open`
fn matching_bracket(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in source[open..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Add a `plugins` property before the final closing brace
fn insert_plugin_list(source: &str) -> Option<String> {
    if source.contains(PLUGIN_LIST) {
        return None;
    }

    let brace = source.rfind('}')?;
    let before = source[..brace].trim_end();
    let needs_comma = !before.is_empty() && !before.ends_with(',') && !before.ends_with('{');

    Some(format!(
        "{}{}\n  plugins: [{}],\n{}",
        before,
        if needs_comma { "," } else { "" },
        TYPOGRAPHY_PLUGIN,
        &source[brace..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GENERATED: &str = r#"import type { Config } from "tailwindcss";

const config: Config = {
  content: [
    "./src/pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/components/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/app/**/*.{js,ts,jsx,tsx,mdx}",
  ],
  theme: {
    extend: {
      colors: {
        background: "var(--background)",
        foreground: "var(--foreground)",
      },
    },
  },
  plugins: [],
};
export default config;
"#;

    #[test]
    fn test_generated_config() {
        let patched = patch_config(GENERATED);

        assert!(patched.contains("plugins: [require('@tailwindcss/typography')],"));
        assert!(patched.contains(
            "  content: [\n    \"./app/**/*.{ts,tsx,mdx}\",\n    \"./src/**/*.{ts,tsx,mdx}\",\n  ],"
        ));
        assert!(!patched.contains("./src/app/"));
        assert!(patched.contains("foreground: \"var(--foreground)\""));
    }

    #[test]
    fn test_appends_after_animate_plugin() {
        let source = "const config = {\n  plugins: [require(\"tailwindcss-animate\")],\n};\n";
        assert_eq!(
            patch_config(source),
            "const config = {\n  plugins: [require(\"tailwindcss-animate\"), require('@tailwindcss/typography')],\n};\n"
        );
    }

    #[test]
    fn test_appends_to_multiline_list() {
        let source = "export default {\n  plugins: [\n    require(\"tailwindcss-animate\"),\n  ],\n};\n";
        assert_eq!(
            patch_config(source),
            "export default {\n  plugins: [\n    require(\"tailwindcss-animate\"),\n    require('@tailwindcss/typography'),\n  ],\n};\n"
        );
    }

    #[test]
    fn test_inserts_missing_plugin_list() {
        let source = "const config = {\n  theme: {}\n};\nexport default config;\n";
        assert_eq!(
            patch_config(source),
            "const config = {\n  theme: {},\n  plugins: [require('@tailwindcss/typography')],\n};\nexport default config;\n"
        );
    }

    #[test]
    fn test_already_patched_is_unchanged() {
        let source = "module.exports = { plugins: [require('@tailwindcss/typography')] };";
        assert_eq!(patch_config(source), source);

        let with_legacy = format!("{}\n{}", source, GLOB_RULES[0].legacy);
        assert_eq!(patch_config(&with_legacy), with_legacy);
    }

    #[test]
    fn test_unbalanced_list_leaves_text() {
        let source = "{ plugins: [require(\"a\") }";
        assert_eq!(patch_config(source), source);
    }

    #[test]
    fn test_rules_ignore_text_without_literal() {
        let source = "content: [\"./src/**/*.{ts,tsx}\", \"./app/**/*.{ts,tsx}\"],";
        for rule in &GLOB_RULES {
            assert_eq!(apply_rule(source, rule), source);
        }
    }

    #[test]
    fn test_remove_inline_entry() {
        let source = "content: [\"./src/app/**/*.{js,ts,jsx,tsx,mdx}\", \"./x\"]";
        assert_eq!(apply_rule(source, &GLOB_RULES[2]), "content: [ \"./x\"]");
    }

    #[test]
    fn test_patch_twice_equals_once() {
        let once = patch_config(GENERATED);
        assert_eq!(patch_config(&once), once);
    }

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(GLOB_RULES[0].legacy.to_string()),
            Just(GLOB_RULES[1].legacy.to_string()),
            Just(GLOB_RULES[2].legacy.to_string()),
            Just("plugins: [".to_string()),
            Just("require(\"tailwindcss-animate\")".to_string()),
            Just(",".to_string()),
            Just("\n  ".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just("[".to_string()),
            Just("]".to_string()),
            "[a-z: \"./*]{0,6}",
        ]
    }

    proptest! {
        #[test]
        fn prop_patch_is_idempotent(parts in prop::collection::vec(fragment(), 0..16)) {
            let source = parts.concat();
            let once = patch_config(&source);
            prop_assert_eq!(patch_config(&once), once);
        }

        #[test]
        fn prop_rules_without_literal_are_identity(source in "[a-z{}\\[\\]\",./* \n]{0,40}") {
            for rule in &GLOB_RULES {
                if !source.contains(rule.legacy) {
                    prop_assert_eq!(apply_rule(&source, rule), source.clone());
                }
            }
        }
    }
}
