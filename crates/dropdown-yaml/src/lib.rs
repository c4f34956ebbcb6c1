//! YAML manifests for the material dropdown.
//!
//! A manifest bundles a [`dropdown_widgets::DropdownConfig`], the item list and
//! the initial value, and validates value ranges the type system cannot express.

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::Manifest;
