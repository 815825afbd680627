// Adapters layer: concrete output sinks.

pub mod sink;
