// Domain layer: models and ports. No knowledge of files, CLIs or runtimes.

pub mod model;
pub mod ports;
