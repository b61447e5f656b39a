//! The module resolver.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use super::error::{ReadOutcome, ResolutionAttempt, ResolveError};
use super::extension::{complete_reference, has_separator};
use super::lexical;
use super::module::ResolvedModule;
use crate::adapters::StdFileReader;
use crate::ports::FileReaderPort;
use crate::search_path::{SearchPathStore, SharedSearchPath};

/// Resolves module references to files.
///
/// The resolver holds no search state of its own. Each call is given the
/// search path to consult, and a working-directory hit registers the
/// directory the file was found in, so later references to sibling modules
/// resolve without extra configuration.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::path::Path;
/// use std::sync::Arc;
/// use yangpath_core::{FileReadError, FileReaderPort, ModuleResolver, SearchPathRegistry};
///
/// struct Files(HashMap<&'static str, &'static str>);
///
/// impl FileReaderPort for Files {
///     fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileReadError> {
///         let key = path.to_string_lossy();
///         self.0
///             .get(&*key)
///             .map(|text| text.as_bytes().to_vec())
///             .ok_or_else(|| FileReadError::NotFound { path: key.into_owned() })
///     }
/// }
///
/// let files = Files(HashMap::from([
///     ("models/acme.yang", "module acme { }"),
///     ("models/acme-types.yang", "module acme-types { }"),
/// ]));
/// let resolver = ModuleResolver::new(Arc::new(files));
/// let mut search_path = SearchPathRegistry::new();
///
/// let acme = resolver.resolve(&mut search_path, "models/acme.yang").unwrap();
/// assert_eq!(acme.name, "models/acme.yang");
///
/// // `models` is now on the search path.
/// let types = resolver.resolve(&mut search_path, "acme-types").unwrap();
/// assert_eq!(types.name, "models/acme-types.yang");
/// ```
#[derive(Clone)]
pub struct ModuleResolver {
    reader: Arc<dyn FileReaderPort>,
    base_dir: Option<PathBuf>,
}

impl Default for ModuleResolver {
    /// A resolver reading from the real file system.
    fn default() -> Self {
        Self::new(Arc::new(StdFileReader))
    }
}

impl std::fmt::Debug for ModuleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleResolver")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

impl ModuleResolver {
    /// Create a resolver reading files through `reader`.
    pub fn new(reader: Arc<dyn FileReaderPort>) -> Self {
        Self {
            reader,
            base_dir: None,
        }
    }

    /// Read relative candidates under `dir` instead of the process working
    /// directory.
    ///
    /// Resolved names and auto-registered directories stay relative, exactly
    /// as they would be with `dir` as the working directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Resolve `reference` to a file name and its contents.
    ///
    /// Search order:
    /// 1. The extension-completed reference, relative to the working directory
    /// 2. If the reference contains `/`, nothing else
    /// 3. Otherwise each directory of `search_path`, in order
    ///
    /// Only a hit in step 1 changes `search_path`.
    pub fn resolve<S: SearchPathStore + ?Sized>(
        &self,
        search_path: &mut S,
        reference: &str,
    ) -> Result<ResolvedModule, ResolveError> {
        let name = complete_reference(reference);
        let mut attempts = Vec::new();

        if let Some(content) = self.try_read(&name, &mut attempts) {
            let found_in = lexical::dir(&name);
            debug!(reference, name = %name, dir = %found_in, "resolved in working directory");
            search_path.register(&found_in);
            return Ok(ResolvedModule {
                name: name.into_owned(),
                content,
            });
        }

        if has_separator(reference) {
            return Err(Self::no_such_file(reference, attempts));
        }

        for dir in search_path.directories() {
            let candidate = lexical::join(&dir, &name);
            if let Some(content) = self.try_read(&candidate, &mut attempts) {
                debug!(reference, name = %candidate, "resolved on search path");
                return Ok(ResolvedModule {
                    name: candidate,
                    content,
                });
            }
        }

        Err(Self::no_such_file(reference, attempts))
    }

    /// Resolve against a search path shared between threads.
    pub fn resolve_shared(
        &self,
        search_path: &SharedSearchPath,
        reference: &str,
    ) -> Result<ResolvedModule, ResolveError> {
        let mut handle = search_path.clone();
        self.resolve(&mut handle, reference)
    }

    fn try_read(&self, candidate: &str, attempts: &mut Vec<ResolutionAttempt>) -> Option<Vec<u8>> {
        let path = self.locate(candidate);
        match self.reader.read_file(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                trace!(candidate, error = %err, "candidate not readable");
                attempts.push(ResolutionAttempt {
                    candidate: candidate.to_string(),
                    outcome: ReadOutcome::from(&err),
                });
                None
            }
        }
    }

    fn locate(&self, candidate: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) if !Path::new(candidate).is_absolute() => base.join(candidate),
            _ => PathBuf::from(candidate),
        }
    }

    fn no_such_file(reference: &str, attempts: Vec<ResolutionAttempt>) -> ResolveError {
        ResolveError::NoSuchFile {
            reference: reference.to_string(),
            attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryFileReader;
    use crate::ports::{FileReadError, MockFileReaderPort};
    use crate::search_path::SearchPathRegistry;
    use mockall::Sequence;

    fn resolver(reader: InMemoryFileReader) -> (ModuleResolver, Arc<InMemoryFileReader>) {
        let reader = Arc::new(reader);
        (ModuleResolver::new(reader.clone()), reader)
    }

    #[test]
    fn test_bare_name_in_working_directory() {
        let (resolver, _) = resolver(InMemoryFileReader::new().with_file("foo.yang", "module foo;"));
        let mut search_path = SearchPathRegistry::new();

        let module = resolver.resolve(&mut search_path, "foo").unwrap();
        assert_eq!(module.name, "foo.yang");
        assert_eq!(module.text(), "module foo;");
        assert_eq!(module.directory(), ".");
        assert_eq!(search_path.directories(), ["."]);

        let (name, content) = module.into_parts();
        assert_eq!(name, "foo.yang");
        assert_eq!(content, b"module foo;");
    }

    #[test]
    fn test_extension_inference_matches_explicit_extension() {
        let files = || {
            InMemoryFileReader::new()
                .with_file("vendor/foo.yang", "module foo;")
        };
        let (bare, _) = resolver(files());
        let (explicit, _) = resolver(files());
        let mut a = SearchPathRegistry::from_spec("vendor");
        let mut b = SearchPathRegistry::from_spec("vendor");

        assert_eq!(
            bare.resolve(&mut a, "foo").unwrap(),
            explicit.resolve(&mut b, "foo.yang").unwrap()
        );
        assert_eq!(a.directories(), b.directories());
    }

    #[test]
    fn test_working_directory_wins_over_search_path() {
        let (resolver, reader) = resolver(
            InMemoryFileReader::new()
                .with_file("foo.yang", "local")
                .with_file("vendor/foo.yang", "vendor"),
        );
        let mut search_path = SearchPathRegistry::from_spec("vendor");

        let module = resolver.resolve(&mut search_path, "foo").unwrap();
        assert_eq!(module.name, "foo.yang");
        assert_eq!(module.content, b"local");
        assert_eq!(reader.reads(), ["foo.yang"]);
    }

    #[test]
    fn test_path_reference_is_not_completed() {
        let (resolver, reader) = resolver(InMemoryFileReader::new().with_file("sub/foo.yang", "x"));
        let mut search_path = SearchPathRegistry::new();

        let err = resolver.resolve(&mut search_path, "sub/foo").unwrap_err();
        assert_eq!(err.reference(), "sub/foo");
        assert_eq!(reader.reads(), ["sub/foo"]);
        assert!(search_path.is_empty());
    }

    #[test]
    fn test_explicit_path_never_falls_back() {
        let (resolver, reader) = resolver(
            InMemoryFileReader::new().with_file("vendor/missing/dir/foo.yang", "decoy"),
        );
        let mut search_path = SearchPathRegistry::from_spec("vendor");

        let err = resolver
            .resolve(&mut search_path, "missing/dir/foo.yang")
            .unwrap_err();
        assert_eq!(err.to_string(), "no such file: missing/dir/foo.yang");
        assert_eq!(err.attempts().len(), 1);
        assert_eq!(reader.reads(), ["missing/dir/foo.yang"]);
    }

    #[test]
    fn test_search_path_order_is_respected() {
        let (resolver, _) = resolver(
            InMemoryFileReader::new()
                .with_file("d1/foo.yang", "first")
                .with_file("d2/foo.yang", "second"),
        );
        let mut search_path = SearchPathRegistry::from_spec("d1:d2");

        let module = resolver.resolve(&mut search_path, "foo").unwrap();
        assert_eq!(module.name, "d1/foo.yang");
        assert_eq!(module.content, b"first");
    }

    #[test]
    fn test_search_path_hit_does_not_register() {
        let (resolver, _) = resolver(InMemoryFileReader::new().with_file("d2/foo.yang", "x"));
        let mut search_path = SearchPathRegistry::from_spec("d1:d2");

        let module = resolver.resolve(&mut search_path, "foo").unwrap();
        assert_eq!(module.name, "d2/foo.yang");
        assert_eq!(search_path.directories(), ["d1", "d2"]);
    }

    #[test]
    fn test_working_directory_hit_registers_its_directory() {
        let (resolver, _) = resolver(
            InMemoryFileReader::new()
                .with_file("x/foo.yang", "module foo;")
                .with_file("x/bar.yang", "module bar;"),
        );
        let mut search_path = SearchPathRegistry::new();

        assert!(resolver.resolve(&mut search_path, "bar").is_err());

        resolver.resolve(&mut search_path, "x/foo.yang").unwrap();
        assert_eq!(search_path.directories(), ["x"]);

        let sibling = resolver.resolve(&mut search_path, "bar").unwrap();
        assert_eq!(sibling.name, "x/bar.yang");
        assert_eq!(sibling.directory(), "x");
    }

    #[test]
    fn test_failure_names_original_reference_and_attempts() {
        let (resolver, _) = resolver(InMemoryFileReader::new());
        let mut search_path = SearchPathRegistry::from_spec("a:b/");

        let err = resolver.resolve(&mut search_path, "foo").unwrap_err();
        assert_eq!(err.to_string(), "no such file: foo");

        let candidates: Vec<&str> = err.attempts().iter().map(|a| a.candidate.as_str()).collect();
        assert_eq!(candidates, ["foo.yang", "a/foo.yang", "b/foo.yang"]);
        assert!(err.attempts().iter().all(|a| a.outcome == ReadOutcome::NotFound));
    }

    #[test]
    fn test_permission_denied_is_coalesced_and_search_continues() {
        let (resolver, _) = resolver(
            InMemoryFileReader::new()
                .with_denied("locked/foo.yang")
                .with_file("open/foo.yang", "ok"),
        );
        let mut search_path = SearchPathRegistry::from_spec("locked");

        let err = resolver.resolve(&mut search_path, "foo").unwrap_err();
        assert!(matches!(err, ResolveError::NoSuchFile { .. }));
        assert!(err.saw_permission_denied());

        search_path.register("open");
        let module = resolver.resolve(&mut search_path, "foo").unwrap();
        assert_eq!(module.name, "open/foo.yang");
    }

    #[test]
    fn test_empty_directory_entry_rereads_reference() {
        let (resolver, reader) = resolver(InMemoryFileReader::new());
        let mut search_path = SearchPathRegistry::from_spec("");

        assert!(resolver.resolve(&mut search_path, "foo").is_err());
        assert_eq!(reader.reads(), ["foo.yang", "foo.yang"]);
    }

    #[test]
    fn test_candidates_are_tried_in_order() {
        let mut reader = MockFileReaderPort::new();
        let mut seq = Sequence::new();
        for (path, found) in [("ietf.yang", false), ("d1/ietf.yang", false), ("d2/ietf.yang", true)] {
            reader
                .expect_read_file()
                .withf(move |p| p.to_str() == Some(path))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |p| {
                    if found {
                        Ok(b"module ietf;".to_vec())
                    } else {
                        Err(FileReadError::NotFound {
                            path: p.display().to_string(),
                        })
                    }
                });
        }

        let resolver = ModuleResolver::new(Arc::new(reader));
        let mut search_path = SearchPathRegistry::from_spec("d1:d2:d3");
        let module = resolver.resolve(&mut search_path, "ietf").unwrap();
        assert_eq!(module.name, "d2/ietf.yang");
    }

    #[test]
    fn test_resolve_shared_registers_through_handle() {
        let (resolver, _) = resolver(InMemoryFileReader::new().with_file("lib/a.yang", "a"));
        let shared = SharedSearchPath::new();

        resolver.resolve_shared(&shared, "lib/a.yang").unwrap();
        assert_eq!(shared.directories(), ["lib"]);
    }

    #[test]
    fn test_base_dir_prefixes_relative_candidates_only() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("models")).unwrap();
        std::fs::write(temp.path().join("models/acme.yang"), "module acme;").unwrap();
        std::fs::write(temp.path().join("models/acme-types.yang"), "types").unwrap();

        let resolver = ModuleResolver::default().with_base_dir(temp.path());
        assert_eq!(resolver.base_dir(), Some(temp.path()));

        let mut search_path = SearchPathRegistry::new();
        let err = resolver.resolve(&mut search_path, "models/acme").unwrap_err();
        assert_eq!(err.reference(), "models/acme");

        let module = resolver.resolve(&mut search_path, "models/acme.yang").unwrap();
        assert_eq!(module.name, "models/acme.yang");
        assert_eq!(search_path.directories(), ["models"]);

        let absolute = temp.path().join("models");
        let mut search_path = SearchPathRegistry::from_spec(&absolute.to_string_lossy());
        let types = resolver.resolve(&mut search_path, "acme-types").unwrap();
        assert_eq!(types.content, b"types");
        assert!(types.name.ends_with("models/acme-types.yang"));
    }
}
