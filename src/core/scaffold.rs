//! Component scaffolding: template instantiation, registry patching, and
//! thumbnail duplication.
//!
//! One scaffolding run, in order: normalize the name, write the component
//! file, patch the three registry files, copy the thumbnail. Steps are not
//! transactional; a failure partway through leaves earlier writes in
//! place and surfaces a single error.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::{self, StagehandConfig};
use crate::error::{Error, Result};
use crate::log_status;
use crate::names::ComponentName;
use crate::patch::{self, PatchRecord, RegistryPatch};
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

/// Embedded component boilerplate. `{{component}}` is replaced with the
/// capitalized name; a file from `scaffold.template_file` overrides this.
const COMPONENT_TEMPLATE: &str = "import { useEffect, useRef, useState } from 'react';\n\nexport default function {{component}}() {\n\n}\n";

// Markers expected in the registry files. The registry structure is a
// contract this tool consumes but does not define.
const IMPORTS_MARKER: &str = "// End of Imports";
const CONTENT_MARKER: &str = "// End of content section";
const SIDE_SQUARES_MARKER: &str = "// End of side squares";
const ROUTES_MARKER: &str = "// End of illusion slugs";

#[derive(Debug, Serialize)]
pub struct ScaffoldOutput {
    pub command: &'static str,
    pub name: String,
    pub component: String,
    pub slug: String,
    pub component_file: String,
    pub patches: Vec<PatchRecord>,
    pub thumbnail: ThumbnailOutput,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailOutput {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Serialize)]
pub struct ComponentListOutput {
    pub command: &'static str,
    pub components_dir: String,
    pub components: Vec<String>,
}

/// Scaffold a new component in the current working directory.
pub fn create(cfg: &StagehandConfig, raw_name: &str, force: bool) -> Result<ScaffoldOutput> {
    create_in(Path::new("."), cfg, raw_name, force)
}

/// Scaffold a new component with configured paths resolved against `base`.
pub fn create_in(
    base: &Path,
    cfg: &StagehandConfig,
    raw_name: &str,
    force: bool,
) -> Result<ScaffoldOutput> {
    let name = ComponentName::parse(raw_name)?;

    let component_file = write_component_file(base, cfg, &name, force)?;
    log_status!("scaffold", "Created {}", component_file.display());

    let mut patches = Vec::new();
    for (registry, file_patches) in registry_plan(cfg, &name) {
        let path = config::resolve(base, registry);
        let records = patch::apply_to_file(&path, &file_patches)?;
        let applied = records.iter().filter(|r| r.applied).count();
        if applied > 0 {
            log_status!("scaffold", "Patched {} ({} insertion(s))", path.display(), applied);
        }
        patches.extend(records);
    }

    let thumbnail = copy_thumbnail(base, cfg, &name, force)?;

    Ok(ScaffoldOutput {
        command: "component.create",
        name: name.raw.clone(),
        component: name.component.clone(),
        slug: name.slug.clone(),
        component_file: component_file.display().to_string(),
        patches,
        thumbnail,
    })
}

/// List scaffolded component files in the configured components directory.
pub fn list(cfg: &StagehandConfig) -> Result<ComponentListOutput> {
    list_in(Path::new("."), cfg)
}

pub fn list_in(base: &Path, cfg: &StagehandConfig) -> Result<ComponentListOutput> {
    let dir = config::resolve(base, &cfg.scaffold.components_dir);

    let mut components = Vec::new();
    if dir.exists() {
        let entries = fs::read_dir(&dir).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("list {}", dir.display())))
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "tsx") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    components.push(stem.to_string());
                }
            }
        }
    }
    components.sort();

    Ok(ComponentListOutput {
        command: "component.list",
        components_dir: dir.display().to_string(),
        components,
    })
}

fn write_component_file(
    base: &Path,
    cfg: &StagehandConfig,
    name: &ComponentName,
    force: bool,
) -> Result<std::path::PathBuf> {
    let boilerplate = match &cfg.scaffold.template_file {
        Some(file) => io::read_file(&config::resolve(base, file), "read component template")?,
        None => COMPONENT_TEMPLATE.to_string(),
    };
    let content = template::render(&boilerplate, &[(TemplateVars::COMPONENT, &name.component)]);

    let dir = config::resolve(base, &cfg.scaffold.components_dir);
    io::ensure_dir(&dir, "create components directory")?;

    let path = dir.join(format!("{}.tsx", name.component));
    if path.exists() && !force {
        return Err(Error::scaffold_component_exists(path.display().to_string()));
    }
    io::write_file(&path, &content, "write component file")?;

    Ok(path)
}

/// The five patches of a scaffolding run, grouped by registry file.
fn registry_plan<'a>(
    cfg: &'a StagehandConfig,
    name: &ComponentName,
) -> Vec<(&'a str, Vec<RegistryPatch>)> {
    vec![
        (
            cfg.scaffold.central_registry.as_str(),
            vec![import_patch(name), content_patch(name)],
        ),
        (
            cfg.scaffold.view_registry.as_str(),
            vec![import_patch(name), side_square_patch(name)],
        ),
        (cfg.scaffold.routes_registry.as_str(), vec![route_patch(name)]),
    ]
}

fn import_patch(name: &ComponentName) -> RegistryPatch {
    let import = format!(
        "import {c} from './illusions/{c}';",
        c = name.component
    );
    RegistryPatch {
        label: "import",
        marker: IMPORTS_MARKER,
        probe: import.clone(),
        insert: format!("{}\n", import),
    }
}

fn content_patch(name: &ComponentName) -> RegistryPatch {
    RegistryPatch {
        label: "content",
        marker: CONTENT_MARKER,
        probe: format!("if(props.slug?.toLowerCase() == \"{}\")", name.slug),
        insert: format!(
            "if(props.slug?.toLowerCase() == \"{}\") \n    content = <{} />\n  ",
            name.slug, name.component
        ),
    }
}

fn side_square_patch(name: &ComponentName) -> RegistryPatch {
    RegistryPatch {
        label: "tile",
        marker: SIDE_SQUARES_MARKER,
        probe: format!("<SideSquare link=\"/{}\"", name.slug),
        insert: format!(
            "<SideSquare link=\"/{s}\" title=\"{c}\" imageName=\"thumbnails/{s} thumbnail.jpg\"/>\n        ",
            s = name.slug,
            c = name.component
        ),
    }
}

fn route_patch(name: &ComponentName) -> RegistryPatch {
    RegistryPatch {
        label: "route",
        marker: ROUTES_MARKER,
        probe: format!("'{}',", name.slug),
        insert: format!("'{}', \n    ", name.slug),
    }
}

fn copy_thumbnail(
    base: &Path,
    cfg: &StagehandConfig,
    name: &ComponentName,
    force: bool,
) -> Result<ThumbnailOutput> {
    let source = config::resolve(base, &cfg.scaffold.thumbnail_template);
    if !source.exists() {
        return Err(Error::scaffold_thumbnail_missing(source.display().to_string()));
    }

    let dir = config::resolve(base, &cfg.scaffold.thumbnails_dir);
    io::ensure_dir(&dir, "create thumbnails directory")?;

    let destination = dir.join(format!("{} thumbnail.jpg", name.slug));
    if destination.exists() && !force {
        return Err(Error::scaffold_thumbnail_exists(
            destination.display().to_string(),
        ));
    }

    fs::copy(&source, &destination).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("copy thumbnail to {}", destination.display())),
        )
    })?;
    log_status!("scaffold", "Copied thumbnail to {}", destination.display());

    Ok(ThumbnailOutput {
        source: source.display().to_string(),
        destination: destination.display().to_string(),
    })
}
