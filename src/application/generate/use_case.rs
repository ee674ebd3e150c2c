//! Generate Use Case
//!
//! Walks the tree, fingerprints each candidate, consults the invalidation
//! policy and writes declaration files that are stale. The first read or write
//! failure aborts the run.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::policies::{artifact_path, InvalidationPolicy, ModuleConvention};
use crate::domain::ports::{FileSystem, FileWalker};
use crate::domain::services::{
    ClassNameExtractor, DefinitionRenderer, Fingerprinter, RegexClassExtractor,
    Sha256Fingerprinter, TypeScriptRenderer,
};
use crate::domain::value_objects::DefinitionTemplate;
use crate::error::CssModResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::walker::RecursiveWalker;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Use case wired with the default local collaborators
pub type LocalGenerateUseCase = GenerateUseCase<
    LocalFs,
    RecursiveWalker<LocalFs>,
    RegexClassExtractor,
    TypeScriptRenderer,
    Sha256Fingerprinter,
>;

/// Generate use case - writes `.d.ts` files next to module stylesheets
pub struct GenerateUseCase<FS, W, E, R, H>
where
    FS: FileSystem,
    W: FileWalker,
    E: ClassNameExtractor,
    R: DefinitionRenderer,
    H: Fingerprinter,
{
    fs: FS,
    walker: W,
    extractor: E,
    renderer: R,
    fingerprinter: H,
    policy: InvalidationPolicy,
}

impl LocalGenerateUseCase {
    /// Use case operating on the local disk
    pub fn local(convention: ModuleConvention, sort_paths: bool) -> Self {
        Self::new(
            LocalFs::new(),
            RecursiveWalker::local().with_sort(sort_paths),
            RegexClassExtractor::new(),
            TypeScriptRenderer::new(),
            Sha256Fingerprinter::new(),
            InvalidationPolicy::new(convention),
        )
    }
}

impl<FS, W, E, R, H> GenerateUseCase<FS, W, E, R, H>
where
    FS: FileSystem,
    W: FileWalker,
    E: ClassNameExtractor,
    R: DefinitionRenderer,
    H: Fingerprinter,
{
    /// Create a new generate use case
    pub fn new(
        fs: FS,
        walker: W,
        extractor: E,
        renderer: R,
        fingerprinter: H,
        policy: InvalidationPolicy,
    ) -> Self {
        Self {
            fs,
            walker,
            extractor,
            renderer,
            fingerprinter,
            policy,
        }
    }

    /// Execute the generate operation
    pub fn execute(
        &self,
        options: &GenerateOptions,
        template: &DefinitionTemplate,
    ) -> CssModResult<GenerateResult> {
        let mut result = GenerateResult::new();
        result.dry_run = options.dry_run;

        let candidates = self.walker.walk(&options.root_path)?;
        debug!(root = %options.root_path.display(), candidates = candidates.len(), "walked tree");

        for path in candidates {
            // Non-module files are never processed, so don't read them either.
            if !self.policy.convention().matches(&path) {
                result.ignored += 1;
                continue;
            }

            let content = self.fs.read(&path)?;
            let fingerprint = self.fingerprinter.fingerprint(&content);

            let decision = self
                .policy
                .decide(&self.fs, &path, &fingerprint, options.force_renew);
            debug!(path = %path.display(), %decision, "checked stylesheet");
            if !decision.regenerate() {
                result.add_skipped(path, decision);
                continue;
            }

            let text = String::from_utf8_lossy(&content);
            let classes = self.extractor.extract(&text);
            let body = self.renderer.render(&classes);
            let output = template.fill(&fingerprint, &body);

            let target = artifact_path(&path);
            if !options.dry_run {
                self.fs.write(&target, &output)?;
                info!(path = %target.display(), classes = classes.len(), "wrote declaration file");
            }
            result.add_written(target);
        }

        Ok(result)
    }
}

/// Run the pipeline over `root` on the local disk with the default convention
pub fn run(
    root: impl Into<PathBuf>,
    template: &DefinitionTemplate,
    force_renew: bool,
) -> CssModResult<GenerateResult> {
    let options = GenerateOptions::new()
        .with_root(root)
        .with_force_renew(force_renew);
    LocalGenerateUseCase::local(ModuleConvention::default(), false).execute(&options, template)
}
