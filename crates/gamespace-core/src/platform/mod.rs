//! Platform-specific functionality: volume capacity queries.
//!
//! Game roots and drives are plain paths, so this is the only place that
//! touches an OS API directly.

pub mod volume;

pub use volume::{query_volume, VolumeSpace};
