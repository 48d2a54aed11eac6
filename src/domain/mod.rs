// Domain layer: typed views of the backend's JSON documents.

pub mod model;
