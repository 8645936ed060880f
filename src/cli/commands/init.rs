//! Init command implementation.
//!
//! The `chadcn init` command writes `chadcn.json`, the theme CSS, the
//! Tailwind config (v3 only) and the `cn` utility module, and creates the
//! components directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::InitArgs;
use crate::config::{
    components_dir, utils_file, Aliases, ConfigStore, ProjectConfig,
    TailwindConfig, TailwindVersion, CONFIG_FILE_NAME,
};
use crate::detection::{PackageManager, ProjectDetector, ProjectSignals};
use crate::error::Result;
use crate::materialize::write_atomic;
use crate::registry::Registry;
use crate::templates::{tailwind_config, tailwind_config_name, theme_css, utils_module};
use crate::ui::theme::ChadcnTheme;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

const DEFAULT_THEME: &str = "photoshop";

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

/// A file written by init, with a short description for the summary.
struct CreatedFile {
    path: String,
    description: &'static str,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn skip_prompts(&self) -> bool {
        self.args.defaults || self.args.yes
    }

    /// Config built from detected signals without asking anything.
    fn default_config(&self, signals: &ProjectSignals) -> ProjectConfig {
        let version = signals.tailwind.version;
        ProjectConfig {
            theme: self
                .args
                .theme
                .clone()
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
            tailwind: TailwindConfig {
                config: version
                    .uses_config_file()
                    .then(|| tailwind_config_name(signals.has_tsconfig).to_string()),
                css: signals.default_css_path(),
                version: Some(version),
                ..TailwindConfig::default()
            },
            aliases: Aliases::default(),
            typescript: signals.has_tsconfig,
            ..ProjectConfig::default()
        }
    }

    fn prompt_config(
        &self,
        registry: &Registry,
        signals: &ProjectSignals,
        ui: &mut dyn UserInterface,
    ) -> Result<ProjectConfig> {
        let version_answer = ui.prompt(&Prompt {
            key: "tailwind_version".to_string(),
            question: "Which Tailwind CSS version are you using?".to_string(),
            prompt_type: PromptType::Select {
                options: vec![
                    PromptOption {
                        label: "Tailwind CSS v4 - CSS-first config with @theme".to_string(),
                        value: "4".to_string(),
                    },
                    PromptOption {
                        label: "Tailwind CSS v3 - JavaScript config file".to_string(),
                        value: "3".to_string(),
                    },
                ],
            },
            default: Some(signals.tailwind.version.to_string()),
        })?;
        let version = if version_answer.as_string() == "4" {
            TailwindVersion::V4
        } else {
            TailwindVersion::V3
        };

        let mut theme_options = Vec::new();
        for (category, themes) in registry.themes_by_category() {
            for theme in themes {
                theme_options.push(PromptOption {
                    label: format!(
                        "{} - {} ({})",
                        theme.label,
                        theme.description,
                        category.label()
                    ),
                    value: theme.name.clone(),
                });
            }
        }
        let theme = ui
            .prompt(&Prompt {
                key: "theme".to_string(),
                question: "Which default theme would you like to use?".to_string(),
                prompt_type: PromptType::Select {
                    options: theme_options,
                },
                default: Some(
                    self.args
                        .theme
                        .clone()
                        .unwrap_or_else(|| DEFAULT_THEME.to_string()),
                ),
            })?
            .as_string();

        let config_file = if version.uses_config_file() {
            let default = signals
                .tailwind
                .config_path
                .clone()
                .unwrap_or_else(|| tailwind_config_name(signals.has_tsconfig).to_string());
            let answer = ui
                .prompt(&Prompt::input(
                    "tailwind_config",
                    "Where is your tailwind.config file?",
                    &default,
                ))?
                .as_string();
            Some(answer).filter(|a| !a.is_empty())
        } else {
            None
        };

        let css = ui
            .prompt(&Prompt::input(
                "tailwind_css",
                "Where is your global CSS file?",
                &signals.default_css_path(),
            ))?
            .as_string();

        let defaults = Aliases::default();
        let components = ui
            .prompt(&Prompt::input(
                "components_alias",
                "Configure the import alias for components:",
                &defaults.components,
            ))?
            .as_string();
        let utils = ui
            .prompt(&Prompt::input(
                "utils_alias",
                "Configure the import alias for utilities:",
                &defaults.utils,
            ))?
            .as_string();

        let typescript = ui
            .prompt(&Prompt::confirm(
                "typescript",
                "Are you using TypeScript?",
                signals.has_tsconfig,
            ))?
            .as_bool()
            .unwrap_or(signals.has_tsconfig);

        Ok(ProjectConfig {
            theme,
            tailwind: TailwindConfig {
                config: config_file,
                css,
                version: Some(version),
                ..TailwindConfig::default()
            },
            aliases: Aliases { components, utils },
            typescript,
            ..ProjectConfig::default()
        })
    }

    /// Write every file and return them in creation order.
    fn write_files(&self, registry: &Registry, config: &ProjectConfig) -> Result<Vec<CreatedFile>> {
        let root = &self.project_root;
        let version = config.tailwind.version.unwrap_or_default();
        let mut created = Vec::new();

        ConfigStore::new(root).save(config)?;
        created.push(CreatedFile {
            path: CONFIG_FILE_NAME.to_string(),
            description: "Configuration",
        });

        let css = theme_css(registry.themes(), &config.theme, version);
        write_atomic(&root.join(&config.tailwind.css), &css)?;
        created.push(CreatedFile {
            path: config.tailwind.css.clone(),
            description: match version {
                TailwindVersion::V4 => "CSS with @theme config",
                TailwindVersion::V3 => "Theme CSS variables",
            },
        });

        if let (true, Some(config_file)) = (version.uses_config_file(), &config.tailwind.config) {
            write_atomic(&root.join(config_file), tailwind_config(config.typescript)?)?;
            created.push(CreatedFile {
                path: config_file.clone(),
                description: "Tailwind configuration",
            });
        }

        let utils_path = utils_file(root, config);
        write_atomic(&utils_path, utils_module(config.typescript)?)?;
        created.push(CreatedFile {
            path: display_relative(root, &utils_path),
            description: "Utility functions",
        });

        let components = components_dir(root, config, None);
        fs::create_dir_all(&components).with_context(|| {
            format!(
                "Failed to create components directory {}",
                components.display()
            )
        })?;

        Ok(created)
    }

    fn show_summary(
        &self,
        registry: &Registry,
        config: &ProjectConfig,
        created: &[CreatedFile],
        ui: &mut dyn UserInterface,
    ) {
        let theme = ChadcnTheme::detect();
        let version = config.tailwind.version.unwrap_or_default();

        ui.message("");
        ui.success(&format!(
            "chadcn has been initialized with the {} theme (Tailwind v{})",
            config.theme, version
        ));
        ui.message("");
        ui.message("Created files:");
        for file in created {
            ui.message(&format!(
                "  • {} {}",
                file.path,
                theme.dim.apply_to(format!("- {}", file.description))
            ));
        }

        let baseline = registry.baseline_packages();
        ui.message("");
        ui.message(&format!(
            "{}",
            theme.highlight.apply_to("Install required dependencies:")
        ));
        ui.message("");
        ui.message(&format!(
            "  {}",
            theme
                .info
                .apply_to(PackageManager::Npm.install_command(baseline))
        ));
        ui.show_hint("# or");
        ui.message(&format!(
            "  {}",
            theme
                .info
                .apply_to(PackageManager::Pnpm.install_command(baseline))
        ));

        ui.message("");
        ui.message(&format!("{}", theme.highlight.apply_to("Next steps:")));
        ui.message("");
        ui.message("  1. Install the base dependencies above");
        ui.message(&format!(
            "  2. Add components with {}",
            theme.info.apply_to("chadcn add <component>")
        ));
        ui.message(&format!(
            "  3. Or add all components with {}",
            theme.info.apply_to("chadcn add --all")
        ));

        ui.message("");
        ui.message(&format!(
            "{} {}",
            theme.highlight.apply_to("Available components"),
            theme.dim.apply_to(format!("({} total)", registry.all().len()))
        ));
        ui.message("");
        for (category, components) in registry.by_category() {
            let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
            ui.message(&format!(
                "  {}",
                theme.dim.apply_to(format!("{}:", category.label))
            ));
            ui.message(&format!("    {}", names.join(", ")));
        }
        ui.message("");
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = Registry::builtin()?;
        let store = ConfigStore::new(&self.project_root);

        ui.show_header("chadcn");
        ui.show_hint("Hyper-dense UI components for professional tools");

        if store.load().is_some() && !self.args.yes {
            let proceed = ui
                .prompt(&Prompt::confirm(
                    "reconfigure",
                    "chadcn is already initialized. Do you want to reconfigure?",
                    false,
                ))?
                .as_bool()
                .unwrap_or(false);
            if !proceed {
                ui.message("Configuration cancelled.");
                return Ok(CommandResult::success());
            }
        }

        let signals = ProjectDetector::detect(&self.project_root);
        if !signals.has_package_json {
            ui.warning("No package.json found. Make sure you're in the right directory.");
        }
        ui.message(&format!("  Detected: {}", describe_tailwind(&signals)));
        ui.message("");

        let config = if self.skip_prompts() {
            self.default_config(&signals)
        } else {
            self.prompt_config(&registry, &signals, ui)?
        };

        if registry.theme(&config.theme).is_none() {
            ui.warning(&format!(
                "Unknown theme '{}'. Run `chadcn list` to see available themes.",
                config.theme
            ));
        }

        let mut spinner = ui.start_spinner("Initializing chadcn...");
        let created = match self.write_files(&registry, &config) {
            Ok(created) => {
                spinner.finish_success("Initialization complete!");
                created
            }
            Err(e) => {
                spinner.finish_error("Initialization failed");
                return Err(e);
            }
        };

        self.show_summary(&registry, &config, &created, ui);
        Ok(CommandResult::success())
    }
}

fn describe_tailwind(signals: &ProjectSignals) -> String {
    let tailwind = &signals.tailwind;
    match tailwind.version {
        TailwindVersion::V4 if tailwind.has_vite_plugin => "Tailwind CSS v4 (Vite plugin)".to_string(),
        TailwindVersion::V4 => "Tailwind CSS v4".to_string(),
        TailwindVersion::V3 => match &tailwind.config_path {
            Some(path) => format!("Tailwind CSS v3 ({})", path),
            None => "Tailwind CSS v3".to_string(),
        },
    }
}

/// `path` relative to `root` with forward slashes, for display.
fn display_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &str) {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    fn yes() -> InitArgs {
        InitArgs {
            yes: true,
            ..Default::default()
        }
    }

    fn ts_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "package.json", r#"{"name":"app"}"#);
        write(temp.path(), "tsconfig.json", "{}");
        fs::create_dir(temp.path().join("src")).unwrap();
        temp
    }

    #[test]
    fn yes_writes_all_files_for_v3_typescript() {
        let temp = ts_project();
        let mut ui = MockUI::new();

        let result = InitCommand::new(temp.path(), yes())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let root = temp.path();
        assert!(root.join("chadcn.json").exists());
        assert!(root.join("tailwind.config.ts").exists());
        assert!(root.join("src/lib/utils.ts").exists());
        assert!(root.join("src/components/ui").is_dir());

        let css = fs::read_to_string(root.join("src/index.css")).unwrap();
        assert!(css.starts_with("@tailwind base;"));
        assert!(css.contains("[data-theme=\"photoshop\"]"));

        let config = ConfigStore::new(root).load().unwrap();
        assert_eq!(config.theme, "photoshop");
        assert!(config.typescript);
        assert_eq!(config.tailwind.config.as_deref(), Some("tailwind.config.ts"));
        assert_eq!(config.tailwind.version, Some(TailwindVersion::V3));
    }

    #[test]
    fn summary_lists_files_and_components() {
        let temp = ts_project();
        let mut ui = MockUI::new();

        InitCommand::new(temp.path(), yes())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_success("initialized with the photoshop theme (Tailwind v3)"));
        assert!(ui.has_message("• chadcn.json"));
        assert!(ui.has_message("• src/lib/utils.ts"));
        assert!(ui.has_message("npm install clsx tailwind-merge class-variance-authority"));
        assert!(ui.has_message("(28 total)"));
    }

    #[test]
    fn v4_project_gets_v4_css_and_no_tailwind_config() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "package.json",
            r#"{"devDependencies":{"tailwindcss":"^4.0.0","@tailwindcss/vite":"^4.0.0"}}"#,
        );
        let mut ui = MockUI::new();

        InitCommand::new(temp.path(), yes())
            .execute(&mut ui)
            .unwrap();

        let root = temp.path();
        assert!(ui.has_message("Tailwind CSS v4 (Vite plugin)"));
        let css = fs::read_to_string(root.join("index.css")).unwrap();
        assert!(css.starts_with("@import \"tailwindcss\";"));
        assert!(!root.join("tailwind.config.js").exists());
        assert!(!root.join("tailwind.config.ts").exists());
        assert!(root.join("lib/utils.js").exists());

        let config = ConfigStore::new(root).load().unwrap();
        assert_eq!(config.tailwind.config, None);
        assert!(!config.typescript);
    }

    #[test]
    fn missing_package_json_warns() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        InitCommand::new(temp.path(), yes())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("No package.json found"));
    }

    #[test]
    fn theme_flag_is_used() {
        let temp = ts_project();
        let mut ui = MockUI::new();
        let args = InitArgs {
            theme: Some("nord".into()),
            ..yes()
        };

        InitCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        let config = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.theme, "nord");
        let css = fs::read_to_string(temp.path().join("src/index.css")).unwrap();
        assert!(css.contains("/* Default theme: nord */"));
    }

    #[test]
    fn unknown_theme_warns_but_is_kept() {
        let temp = ts_project();
        let mut ui = MockUI::new();
        let args = InitArgs {
            theme: Some("neon".into()),
            ..yes()
        };

        InitCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(ui.has_warning("Unknown theme 'neon'"));
        assert_eq!(ConfigStore::new(temp.path()).load().unwrap().theme, "neon");
    }

    #[test]
    fn existing_config_prompts_and_can_cancel() {
        let temp = ts_project();
        ConfigStore::new(temp.path())
            .save(&ProjectConfig {
                theme: "dracula".into(),
                ..ProjectConfig::default()
            })
            .unwrap();
        let mut ui = MockUI::new();

        let args = InitArgs {
            defaults: true,
            ..Default::default()
        };
        let result = InitCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.was_prompted("reconfigure"));
        assert!(ui.has_message("Configuration cancelled."));
        assert_eq!(
            ConfigStore::new(temp.path()).load().unwrap().theme,
            "dracula"
        );
    }

    #[test]
    fn yes_reconfigures_without_prompting() {
        let temp = ts_project();
        ConfigStore::new(temp.path())
            .save(&ProjectConfig {
                theme: "dracula".into(),
                ..ProjectConfig::default()
            })
            .unwrap();
        let mut ui = MockUI::new();

        InitCommand::new(temp.path(), yes()).execute(&mut ui).unwrap();

        assert!(!ui.was_prompted("reconfigure"));
        assert_eq!(
            ConfigStore::new(temp.path()).load().unwrap().theme,
            "photoshop"
        );
    }

    #[test]
    fn interactive_answers_shape_the_config() {
        let temp = ts_project();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("tailwind_version", "4");
        ui.set_prompt_response("theme", "win95");
        ui.set_prompt_response("tailwind_css", "app/globals.css");
        ui.set_prompt_response("components_alias", "@/ui");
        ui.set_prompt_response("utils_alias", "@/utils/cn");
        ui.set_prompt_response("typescript", "yes");

        InitCommand::new(temp.path(), InitArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!ui.was_prompted("tailwind_config"));
        let config = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.theme, "win95");
        assert_eq!(config.tailwind.version, Some(TailwindVersion::V4));
        assert_eq!(config.tailwind.config, None);
        assert_eq!(config.aliases.components, "@/ui");
        assert!(temp.path().join("app/globals.css").exists());
        assert!(temp.path().join("src/utils/cn.ts").exists());
        assert!(temp.path().join("src/ui").is_dir());
    }

    #[test]
    fn v3_prompts_for_tailwind_config_path() {
        let temp = ts_project();
        let mut ui = MockUI::new();
        ui.set_prompt_response("tailwind_version", "3");
        ui.set_prompt_response("tailwind_config", "config/tailwind.config.ts");

        InitCommand::new(temp.path(), InitArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.was_prompted("tailwind_config"));
        assert!(temp.path().join("config/tailwind.config.ts").exists());
    }

    #[test]
    fn describe_tailwind_mentions_config_path() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "tailwind.config.js", "module.exports = {}");
        let signals = ProjectDetector::detect(temp.path());
        assert_eq!(
            describe_tailwind(&signals),
            "Tailwind CSS v3 (tailwind.config.js)"
        );
    }
}
