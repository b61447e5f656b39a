use std::borrow::Cow;

use super::lexical;

/// A successfully resolved module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    /// The file name the contents were read from, as it was tried.
    pub name: String,
    /// Raw file contents.
    pub content: Vec<u8>,
}

impl ResolvedModule {
    /// Contents as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Directory the module was found in.
    pub fn directory(&self) -> String {
        lexical::dir(&self.name)
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.content)
    }
}
