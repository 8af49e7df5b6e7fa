//! Key-path merges for JSON config files
//!
//! A [`JsonPatch`] is a list of `(path, value)` assignments. Applying it
//! overwrites exactly those keys and leaves everything else, including key
//! order, untouched. Missing intermediate objects are created and any
//! non-object found on the way is replaced by an object, so a merge never
//! fails.

use crate::product::Author;
use serde_json::{json, Map, Value};

/// Ordered set of key-path assignments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPatch {
    entries: Vec<(Vec<String>, Value)>,
}

impl JsonPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` at `path` (e.g. `["scripts", "lint"]`)
    pub fn set<I, S>(mut self, path: I, value: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((path.into_iter().map(Into::into).collect(), value));
        self
    }

    /// Merge into a copy of `existing`
    pub fn apply(&self, existing: &Value) -> Value {
        let mut merged = existing.clone();
        for (path, value) in &self.entries {
            set_path(&mut merged, path, value.clone());
        }
        merged
    }
}

/// Assign `value` at `path`, creating objects along the way
fn set_path(root: &mut Value, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return;
    };

    let mut current = root;
    for key in parents {
        current = object_mut(current)
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    object_mut(current).insert(last.clone(), value);
}

fn object_mut(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}

/// Scripts added to `package.json`
pub const SCRIPTS: &[(&str, &str)] = &[
    ("lint", "next lint"),
    ("format", "prettier app/ src/ --write"),
    ("type-check", "tsc --noEmit"),
    ("postbuild", "next-sitemap"),
    ("vercel-build", "next build"),
];

/// Scripts and author block for `package.json`
pub fn package_json(author: &Author) -> JsonPatch {
    let patch = SCRIPTS.iter().fold(JsonPatch::new(), |patch, (name, command)| {
        patch.set(["scripts", *name], json!(command))
    });
    patch.set(["author"], serde_json::to_value(author).unwrap_or(Value::Null))
}

/// `@locales/*` path alias for `tsconfig.json`
pub fn tsconfig_locales() -> JsonPatch {
    JsonPatch::new().set(
        ["compilerOptions", "paths", "@locales/*"],
        json!(["./locales/*"]),
    )
}

/// Point shadcn at the relocated global stylesheet in `components.json`
pub fn components_css() -> JsonPatch {
    JsonPatch::new().set(["tailwind", "css"], json!("app/globals.css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            name: "Jane Doe",
            email: "jane@example.com",
            url: "https://example.com",
        }
    }

    #[test]
    fn test_preserves_untargeted_keys() {
        let patch = JsonPatch::new().set(["scripts", "a"], json!(1));
        let merged = patch.apply(&json!({"x": 1}));
        assert_eq!(merged, json!({"x": 1, "scripts": {"a": 1}}));
    }

    #[test]
    fn test_overwrites_only_targeted_script() {
        let existing = json!({
            "name": "app",
            "scripts": {"dev": "next dev", "lint": "eslint ."}
        });
        let merged = package_json(&author()).apply(&existing);

        assert_eq!(merged["name"], "app");
        assert_eq!(merged["scripts"]["dev"], "next dev");
        assert_eq!(merged["scripts"]["lint"], "next lint");
        assert_eq!(merged["scripts"]["postbuild"], "next-sitemap");
        assert_eq!(merged["author"]["email"], "jane@example.com");
    }

    #[test]
    fn test_key_order_is_preserved() {
        let existing = json!({"name": "app", "version": "0.1.0", "private": true});
        let merged = package_json(&author()).apply(&existing);
        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "version", "private", "scripts", "author"]);
    }

    #[test]
    fn test_tsconfig_keeps_existing_paths() {
        let existing = json!({
            "compilerOptions": {"strict": true, "paths": {"@/*": ["./src/*"]}}
        });
        let merged = tsconfig_locales().apply(&existing);

        assert_eq!(merged["compilerOptions"]["strict"], true);
        assert_eq!(merged["compilerOptions"]["paths"]["@/*"], json!(["./src/*"]));
        assert_eq!(
            merged["compilerOptions"]["paths"]["@locales/*"],
            json!(["./locales/*"])
        );
    }

    #[test]
    fn test_missing_intermediates_are_created() {
        let merged = tsconfig_locales().apply(&json!({}));
        assert_eq!(
            merged,
            json!({"compilerOptions": {"paths": {"@locales/*": ["./locales/*"]}}})
        );
    }

    #[test]
    fn test_non_object_on_path_is_replaced() {
        let merged = components_css().apply(&json!({"tailwind": "broken"}));
        assert_eq!(merged, json!({"tailwind": {"css": "app/globals.css"}}));

        let merged = components_css().apply(&json!([1, 2]));
        assert_eq!(merged, json!({"tailwind": {"css": "app/globals.css"}}));
    }

    #[test]
    fn test_components_css_keeps_siblings() {
        let existing = json!({"tailwind": {"config": "tailwind.config.ts", "css": "src/app/globals.css"}});
        let merged = components_css().apply(&existing);
        assert_eq!(merged["tailwind"]["config"], "tailwind.config.ts");
        assert_eq!(merged["tailwind"]["css"], "app/globals.css");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let existing = json!({"scripts": {"dev": "next dev"}});
        let patch = package_json(&author());
        let once = patch.apply(&existing);
        assert_eq!(patch.apply(&once), once);
    }
}
