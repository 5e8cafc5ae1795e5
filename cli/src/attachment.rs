//! In-memory profile picture used as the native signup file handle.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use std::path::Path;

use forms::SelectedFile;

use crate::error::CliError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read a picture from disk, naming it after the path's final component.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Attachment`] if the path has no file name or
    /// cannot be read.
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| CliError::attachment(path, "not a file path"))?;
        let bytes = std::fs::read(path).map_err(|e| CliError::attachment(path, e))?;
        Ok(Self { mime: mime_for(path), file_name, bytes })
    }
}

impl SelectedFile for Attachment {
    fn display_name(&self) -> String {
        self.file_name.clone()
    }
}

/// Content type guessed from the extension, `application/octet-stream`
/// when unknown.
fn mime_for(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().essence_str().to_owned()
}
