//! tile (TILE-Gx / TILEPro) definitions, removed from mainline after 4.16.

pub mod signal;

pub use signal::SigActionFlags;
