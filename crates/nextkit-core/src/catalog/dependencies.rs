//! Packages installed for each feature selection

use crate::config::{Database, DateUtility};

/// Runtime and development packages installed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySet {
    pub base: &'static [&'static str],
    pub dev: &'static [&'static str],
}

pub const BASE: DependencySet = DependencySet {
    base: &[
        "@hookform/resolvers",
        "zod",
        "@mantine/hooks",
        "lucide-react",
        "next-safe-action",
        "next-sitemap",
        "next-themes",
        "react-hook-form",
        "sonner",
    ],
    dev: &[
        "prettier-plugin-tailwindcss",
        "prettier",
        "eslint-plugin-check-file",
        "eslint-config-prettier",
        "eslint-config-next",
        "@trivago/prettier-plugin-sort-imports",
        "@next/eslint-plugin-next",
        "@total-typescript/ts-reset",
        "@tailwindcss/typography",
    ],
};

pub const MAIL: DependencySet = DependencySet {
    base: &[
        "resend",
        "@react-email/components",
        "@react-email/render",
        "@react-email/tailwind",
    ],
    dev: &[],
};

pub const I18N: DependencySet = DependencySet {
    base: &["next-international"],
    dev: &[],
};

pub const MDX: DependencySet = DependencySet {
    base: &["@mdx-js/loader", "@mdx-js/react", "@next/mdx", "gray-matter"],
    dev: &[],
};

/// Packages for the chosen date utility
pub fn date(utility: DateUtility) -> Option<DependencySet> {
    match utility {
        DateUtility::DateFns => Some(DependencySet {
            base: &["date-fns"],
            dev: &[],
        }),
        DateUtility::Moment => Some(DependencySet {
            base: &["moment"],
            dev: &[],
        }),
        DateUtility::None => None,
    }
}

/// Packages for the chosen database toolkit
pub fn database(database: Database) -> Option<DependencySet> {
    match database {
        Database::Prisma => Some(DependencySet {
            base: &["prisma"],
            dev: &[],
        }),
        Database::Drizzle => Some(DependencySet {
            base: &["drizzle-orm", "pg"],
            dev: &["drizzle-kit"],
        }),
        Database::None => None,
    }
}

/// Components added with the shadcn CLI after `shadcn init`
pub const SHADCN_COMPONENTS: &[&str] = &[
    "input",
    "select",
    "dropdown-menu",
    "drawer",
    "dialog",
    "skeleton",
    "card",
    "sheet",
    "form",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typography_plugin_is_installed() {
        assert!(BASE.dev.contains(&"@tailwindcss/typography"));
    }

    #[test]
    fn test_date_mapping() {
        assert_eq!(date(DateUtility::Moment).unwrap().base, &["moment"]);
        assert_eq!(date(DateUtility::DateFns).unwrap().base, &["date-fns"]);
        assert!(date(DateUtility::None).is_none());
    }

    #[test]
    fn test_database_mapping() {
        let drizzle = database(Database::Drizzle).unwrap();
        assert_eq!(drizzle.base, &["drizzle-orm", "pg"]);
        assert_eq!(drizzle.dev, &["drizzle-kit"]);
        assert_eq!(database(Database::Prisma).unwrap().base, &["prisma"]);
        assert!(database(Database::None).is_none());
    }
}
