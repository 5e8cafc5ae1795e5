//! The profile picture a user picked in the browser.

#[cfg(test)]
#[path = "picked_file_test.rs"]
mod picked_file_test;

use forms::SelectedFile;

/// A selected file plus its display name. Off the browser only the name
/// exists.
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile {
    name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl PickedFile {
    #[cfg(feature = "hydrate")]
    pub fn from_dom(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn named(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(feature = "hydrate")]
    pub fn blob(&self) -> &web_sys::Blob {
        &self.file
    }
}

impl SelectedFile for PickedFile {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// First file of the `<input type="file">` that fired `ev`, or `None` when
/// the picker was cancelled.
#[cfg(feature = "hydrate")]
pub fn first_file(ev: &leptos::ev::Event) -> Option<PickedFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0).map(PickedFile::from_dom)
}
