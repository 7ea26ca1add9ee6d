//! Build canonical forests from manifest files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use veneer_annotate::{normalize, ResolveContext};
use veneer_types::forest::dedup_siblings;
use veneer_types::{Arg, Forest, Node, UNKNOWN};
use walkdir::WalkDir;

use crate::error::{ExtractError, ExtractResult};
use crate::manifest::{MemberManifest, ModuleManifest};
use crate::Extractor;

/// Extractor over a list of surface-manifest files.
#[derive(Debug, Default)]
pub struct ManifestExtractor {
    files: Vec<PathBuf>,
}

impl ManifestExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one manifest file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    /// Queue every `*.api.json` below a directory, in path order.
    ///
    /// Returns the number of manifests found.
    pub fn add_dir(&mut self, dir: &Path) -> ExtractResult<usize> {
        let mut found = 0;
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|source| ExtractError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(".api.json"))
            {
                self.files.push(entry.into_path());
                found += 1;
            }
        }
        Ok(found)
    }

    fn load(path: &Path) -> ExtractResult<ModuleManifest> {
        let data = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Extractor for ManifestExtractor {
    fn extract(&self) -> ExtractResult<Forest> {
        let mut forest = Forest::new();
        for file in &self.files {
            debug!(manifest = %file.display(), "loading surface manifest");
            let manifest = Self::load(file)?;
            let context = ResolveContext::from(manifest.imports.clone());
            let nodes = build_members(&manifest.module, &manifest.members, &context)?;
            forest.insert(manifest.module.clone(), nodes);
        }
        Ok(forest)
    }
}

/// Names with a leading underscore are private and never part of the surface.
fn is_public(name: &str) -> bool {
    !name.starts_with('_')
}

fn annotation_or_unknown(annotation: Option<&str>, context: &ResolveContext) -> String {
    match annotation {
        Some(text) => normalize(text, context),
        None => UNKNOWN.to_string(),
    }
}

/// Build one sibling set: filter private names, canonicalize annotations,
/// sort by name for stable dumps, resolve duplicates last-write-wins.
fn build_members(
    parent: &str,
    members: &[MemberManifest],
    context: &ResolveContext,
) -> ExtractResult<Vec<Node>> {
    let mut nodes = Vec::with_capacity(members.len());
    for member in members {
        if !is_public(member.name()) {
            continue;
        }
        let location = format!("{parent}.{}", member.name());
        let node = match member {
            MemberManifest::Variable { name, annotation } => {
                Node::variable(name, annotation_or_unknown(annotation.as_deref(), context))
            }
            MemberManifest::Function {
                name,
                args,
                returns,
            } => {
                let mut built = Vec::with_capacity(args.len());
                for arg in args {
                    let arg_location = format!("{location}.({})", arg.name);
                    built.push(Arg::new(
                        &arg.name,
                        annotation_or_unknown(arg.annotation.as_deref(), context),
                        arg.kind.to_arg_kind(arg.default, &arg_location)?,
                    ));
                }
                Node::function(
                    name,
                    built,
                    annotation_or_unknown(returns.as_deref(), context),
                )
            }
            MemberManifest::Class { name, members } => {
                Node::class(name, build_members(&location, members, context)?)
            }
            MemberManifest::Module {
                name,
                qualified_name,
                members,
            } => Node::module(
                name,
                qualified_name.clone().unwrap_or_else(|| name.clone()),
                build_members(&location, members, context)?,
            ),
        };
        nodes.push(node);
    }
    // Stable sort keeps manifest order among duplicates, so the later
    // declaration wins the dedup below.
    nodes.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(dedup_siblings(nodes))
}
