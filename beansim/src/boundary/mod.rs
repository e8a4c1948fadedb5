pub mod cluster;
pub mod arcs;
pub mod trim;
pub mod extractor;
pub mod svg;
