//! alpha definitions.

pub mod socket;
