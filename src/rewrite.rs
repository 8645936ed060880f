//! Import path rewriting for installed component sources.
//!
//! Component sources in the registry import the shared utility module and
//! sibling components through registry-internal paths. Before a file is
//! written, those specifiers are replaced with the project's configured
//! aliases.
//!
//! [`PatternRewriter`] is a line-agnostic regex transform. It only touches
//! string literals directly following `from`, `import`, `import(` or
//! `require(`, so unusually formatted source (e.g. a specifier split across
//! a comment) is left alone.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Aliases;

/// Utility module specifiers: `@/lib/utils`, `./lib/utils`, `../../lib/utils`.
static UTILS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<lead>\bfrom\s+|\bimport\s+|\bimport\s*\(\s*|\brequire\s*\(\s*)(?P<open>['"])(?:@/|\./|(?:\.\./)+)lib/utils(?P<close>['"])"#,
    )
    .expect("UTILS_IMPORT must compile")
});

/// Sibling component specifiers: `@/components/ui/X`, `../../components/ui/X`.
static COMPONENT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<lead>\bfrom\s+|\bimport\s+|\bimport\s*\(\s*|\brequire\s*\(\s*)(?P<open>['"])(?P<spec>(?:@/|\./|(?:\.\./)+)components/ui/(?P<rest>[^'"\s]+))(?P<close>['"])"#,
    )
    .expect("COMPONENT_IMPORT must compile")
});

/// Rewrites registry-internal import specifiers to project aliases.
pub trait ImportRewriter {
    /// Return `content` with internal specifiers replaced.
    ///
    /// Must be idempotent and must not change text outside matched
    /// specifiers.
    fn rewrite(&self, content: &str, aliases: &Aliases) -> String;
}

/// Regex-based [`ImportRewriter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRewriter;

impl ImportRewriter for PatternRewriter {
    fn rewrite(&self, content: &str, aliases: &Aliases) -> String {
        let utils_alias = aliases.utils.trim_end_matches('/');
        let components_alias = aliases.components.trim_end_matches('/');
        let components_prefix = format!("{}/", components_alias);

        let step = UTILS_IMPORT.replace_all(content, |caps: &Captures| {
            format!(
                "{}{}{}{}",
                &caps["lead"], &caps["open"], utils_alias, &caps["close"]
            )
        });

        let out = COMPONENT_IMPORT.replace_all(&step, |caps: &Captures| {
            // Already aliased (alias may itself look like an internal path).
            if caps["spec"].starts_with(&components_prefix) {
                return caps[0].to_string();
            }
            format!(
                "{}{}{}{}{}",
                &caps["lead"], &caps["open"], components_prefix, &caps["rest"], &caps["close"]
            )
        });

        out.into_owned()
    }
}

/// Rewrite with the default [`PatternRewriter`].
pub fn rewrite_imports(content: &str, aliases: &Aliases) -> String {
    PatternRewriter.rewrite(content, aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(components: &str, utils: &str) -> Aliases {
        Aliases {
            components: components.to_string(),
            utils: utils.to_string(),
        }
    }

    #[test]
    fn rewrites_relative_utils_import() {
        let src = "import { cn } from '../../lib/utils';\n";
        let out = rewrite_imports(src, &aliases("~/ui", "~/lib/cn"));
        assert_eq!(out, "import { cn } from '~/lib/cn';\n");
    }

    #[test]
    fn rewrites_root_alias_utils_import_preserving_quotes() {
        let src = r#"import { cn } from "@/lib/utils";"#;
        let out = rewrite_imports(src, &aliases("@/components/ui", "$lib/utils"));
        assert_eq!(out, r#"import { cn } from "$lib/utils";"#);
    }

    #[test]
    fn rewrites_component_imports() {
        let src = "import { Tooltip } from '@/components/ui/Tooltip';\n\
                   import { Separator } from '../../components/ui/Separator/Separator';\n";
        let out = rewrite_imports(src, &aliases("~/widgets", "~/lib/utils"));
        assert_eq!(
            out,
            "import { Tooltip } from '~/widgets/Tooltip';\n\
             import { Separator } from '~/widgets/Separator/Separator';\n"
        );
    }

    #[test]
    fn rewrites_dynamic_import_and_require() {
        let src = "const a = import('@/components/ui/Toast');\nconst u = require(\"../lib/utils\");\n";
        let out = rewrite_imports(src, &aliases("@/ui", "@/u"));
        assert_eq!(
            out,
            "const a = import('@/ui/Toast');\nconst u = require(\"@/u\");\n"
        );
    }

    #[test]
    fn leaves_unrelated_text_untouched() {
        let src = "import * as React from 'react';\n\
                   // see @/lib/utils for cn\n\
                   export { Button } from './Button';\n\
                   const path = \"../../lib/utils\";\n";
        let out = rewrite_imports(src, &aliases("~/ui", "~/lib/cn"));
        assert_eq!(out, src);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let src = "import { cn } from '../../lib/utils';\n\
                   import { Tooltip } from '@/components/ui/Tooltip';\n";
        for a in [
            aliases("@/components/ui", "@/lib/utils"),
            aliases("~/ui", "~/lib/cn"),
            aliases("@/components/ui/chadcn", "@/lib/utils"),
        ] {
            let once = rewrite_imports(src, &a);
            let twice = rewrite_imports(&once, &a);
            assert_eq!(once, twice, "not idempotent for {:?}", a);
        }
    }

    #[test]
    fn nested_alias_is_not_applied_twice() {
        let a = aliases("@/components/ui/chadcn", "@/lib/utils");
        let src = "import { Tooltip } from '@/components/ui/Tooltip';\n";
        let once = rewrite_imports(src, &a);
        assert_eq!(once, "import { Tooltip } from '@/components/ui/chadcn/Tooltip';\n");
    }

    #[test]
    fn trailing_slash_in_alias_is_ignored() {
        let src = "import { Tooltip } from '@/components/ui/Tooltip';";
        let out = rewrite_imports(src, &aliases("~/ui/", "~/lib/utils"));
        assert_eq!(out, "import { Tooltip } from '~/ui/Tooltip';");
    }

    #[test]
    fn embedded_sources_lose_relative_utils_imports() {
        let src = crate::embedded::component_file("Button/Button.tsx").unwrap();
        let out = rewrite_imports(src, &aliases("@/components/ui", "@/lib/utils"));
        assert!(!out.contains("../../lib/utils"));
        assert!(out.contains("from '@/lib/utils'"));
    }
}
