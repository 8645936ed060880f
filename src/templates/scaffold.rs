//! Files written by `chadcn init` besides the theme CSS.

use crate::embedded;
use crate::error::{ChadcnError, Result};

/// Contents of the `cn` utility module.
pub fn utils_module(typescript: bool) -> Result<&'static str> {
    scaffold(if typescript { "utils.ts" } else { "utils.js" })
}

/// Contents of the Tailwind v3 config file.
pub fn tailwind_config(typescript: bool) -> Result<&'static str> {
    scaffold(if typescript {
        "tailwind.config.ts"
    } else {
        "tailwind.config.js"
    })
}

/// Default tailwind config file name for the project language.
pub fn tailwind_config_name(typescript: bool) -> &'static str {
    if typescript {
        "tailwind.config.ts"
    } else {
        "tailwind.config.js"
    }
}

fn scaffold(name: &str) -> Result<&'static str> {
    embedded::scaffold_file(name).ok_or_else(|| ChadcnError::CatalogError {
        message: format!("scaffold template '{}' is not embedded", name),
    })
}
