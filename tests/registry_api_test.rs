//! Integration tests for the registry, install and rewrite public APIs.

use chadcn::config::Aliases;
use chadcn::install::{plan, InstallOptions, Installer};
use chadcn::registry::{DependencyResolver, Registry};
use chadcn::rewrite::rewrite_imports;
use chadcn::templates::TemplateProvider;
use chadcn::ChadcnError;
use tempfile::TempDir;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn builtin_catalog_is_complete() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(registry.all().len(), 28);
    assert_eq!(registry.themes().len(), 17);
    assert!(registry.theme("photoshop").is_some());
}

#[test]
fn every_dependency_precedes_its_dependent() {
    let registry = Registry::builtin().unwrap();
    let all: Vec<String> = registry
        .component_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let resolved = DependencyResolver::new(&registry).expand(&all);

    assert_eq!(resolved.len(), all.len());
    for (index, name) in resolved.iter().enumerate() {
        for dep in &registry.lookup(name).unwrap().dependencies {
            let dep_index = resolved.iter().position(|n| n == dep).unwrap();
            assert!(dep_index < index, "{dep} should precede {name}");
        }
    }
}

#[test]
fn expansion_is_deduplicated() {
    let registry = Registry::builtin().unwrap();
    let resolved =
        DependencyResolver::new(&registry).expand(&names(&["toolbar", "tooltip", "toolbar"]));
    assert_eq!(resolved.names(), &names(&["tooltip", "toolbar"])[..]);
}

#[test]
fn unknown_names_are_all_reported() {
    let registry = Registry::builtin().unwrap();
    let err = plan(&registry, &names(&["button", "nope", "nada"])).unwrap_err();

    match err {
        ChadcnError::InvalidComponentName { names } => assert_eq!(names, ["nope", "nada"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rewriting_is_idempotent() {
    let aliases = Aliases {
        components: "~/ui".into(),
        utils: "~/utils/cn".into(),
    };
    let source = "import { cn } from '../../lib/utils';\nimport { Tooltip } from '../Tooltip';\nimport { Icon } from '@/components/ui/Icon';\n";

    let once = rewrite_imports(source, &aliases);
    assert_eq!(rewrite_imports(&once, &aliases), once);
    assert!(once.contains("'~/utils/cn'"));
    assert!(once.contains("'~/ui/Icon'"));
    assert!(once.contains("'../Tooltip'"));
}

#[test]
fn installing_twice_is_stable() {
    let temp = TempDir::new().unwrap();
    let registry = Registry::builtin().unwrap();
    let provider = TemplateProvider::offline();
    let plan = plan(&registry, &names(&["status-bar"])).unwrap();
    let options = InstallOptions::new(temp.path());
    let installer = Installer::new(&registry, &provider);

    let first = installer.run(&plan, &Aliases::default(), &options).unwrap();
    let second = installer.run(&plan, &Aliases::default(), &options).unwrap();

    assert!(!first.files.added.is_empty());
    assert!(second.files.added.is_empty());
    assert_eq!(second.files.skipped.len(), first.files.added.len());
}
