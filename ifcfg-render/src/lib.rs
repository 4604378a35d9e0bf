//! Network interface configuration rendering for Linux distribution families.
//!
//! Given a distro-agnostic description of one or more network interfaces,
//! this library produces the exact on-disk text each supported distribution
//! expects, and for the formats that live inside hand-maintained system files
//! it patches the supplied existing content in place instead of overwriting
//! it wholesale.
//!
//! # Architecture
//!
//! - [`descriptor`] — Canonical interface description (addresses, gateways,
//!   DNS, routes)
//! - [`netmask`] — Dotted-quad netmask to CIDR prefix-length conversion
//! - [`families`] — One renderer per distribution family (RedHat, Debian,
//!   Arch, Gentoo, SuSE) behind a closed registry; Arch and Gentoo carry two
//!   version variants each
//! - [`error`] — Typed error values for every failure mode
//! - [`report`] — Terminal-friendly summaries of rendered output
//!
//! # Contract
//!
//! Rendering is a pure transform: `(existing file text, interfaces, version)
//! -> output file map`. No renderer performs I/O, keeps state between calls,
//! or guesses an insertion point in an existing file — a missing patch anchor
//! is a hard error, because inventing one risks corrupting a hand-edited
//! configuration. Rendering the same inputs twice yields byte-identical
//! output, and re-applying a patch to its own output changes nothing.
//!
//! # Patch-based formats
//!
//! The line-level patching model comes from `shellconf-core`: existing text
//! is tokenized into opaque and assignment records, only targeted assignment
//! values mutate, and everything else reserializes byte-identically in
//! original order.

pub mod descriptor;
pub mod error;
pub mod families;
pub mod netmask;
pub mod report;

pub use descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};
pub use error::RenderError;
pub use families::{render, Family};
