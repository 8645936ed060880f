//! Placeholder content for component files that could not be obtained.

/// Package users can install instead of copying sources.
const UPSTREAM_PACKAGE: &str = "@chadcn/ui";

/// Build a placeholder for a missing component file.
///
/// The result names the file, tells the user where to get it, and ends
/// with an empty export so the module still parses.
pub fn placeholder(file: &str) -> String {
    format!(
        "// {file}\n\
         // Copy this file from {pkg}/src/components/{file}\n\
         // Or install {pkg} directly: npm install {pkg}\n\
         \n\
         export {{}};\n",
        file = file,
        pkg = UPSTREAM_PACKAGE,
    )
}

/// Whether `content` was produced by [`placeholder`].
pub fn is_placeholder(content: &str) -> bool {
    content.contains(&format!("Or install {} directly", UPSTREAM_PACKAGE))
        && content.trim_end().ends_with("export {};")
}
