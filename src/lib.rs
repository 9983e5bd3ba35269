//! confshape library
//!
//! This module exports the conversion pipeline components for testing and
//! integration: codecs, the path tree transform, and the directory
//! harvester/materializer pair.

pub mod cli;
pub mod codec;
pub mod error;
pub mod harvest;
pub mod materialize;
pub mod tree;
