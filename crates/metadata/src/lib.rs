#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `metadata` reads and writes the extended attribute the Dropbox client
//! consults to leave a directory out of synchronisation.
//!
//! # Design
//!
//! - [`IgnoreMarker`] is the seam the sweep talks to. It exposes a presence
//!   check plus raw set and remove operations.
//! - [`XattrMarker`] implements it with the `xattr` crate when the `xattr`
//!   feature is enabled on a Unix target. Elsewhere a stub with the same API
//!   fails every call with [`std::io::ErrorKind::Unsupported`].
//! - [`DEFAULT_ATTRIBUTE`] is `user.com.dropbox.ignored` on Linux and
//!   `com.dropbox.ignored` on other platforms. The tag value is [`TAG_VALUE`].
//!
//! # Errors
//!
//! Every failure is a [`MetadataError`] naming the operation and the path.
//!
//! # Examples
//!
//! ```
//! use metadata::{IgnoreMarker, XattrMarker, DEFAULT_ATTRIBUTE};
//!
//! let marker = XattrMarker::default();
//! assert_eq!(marker.attribute(), DEFAULT_ATTRIBUTE);
//! # let _ = &marker as &dyn IgnoreMarker;
//! ```

mod error;
mod marker;

#[cfg(all(unix, feature = "xattr"))]
mod xattr;

#[cfg(not(all(unix, feature = "xattr")))]
#[path = "xattr_stub.rs"]
mod xattr;

pub use crate::error::MetadataError;
pub use crate::marker::{DEFAULT_ATTRIBUTE, IgnoreMarker, TAG_VALUE};
pub use crate::xattr::XattrMarker;
