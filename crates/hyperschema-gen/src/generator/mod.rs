pub(crate) mod emitter;
pub(crate) mod formatter;
pub mod orchestrator;
pub(crate) mod output;
pub(crate) mod schema;
pub(crate) mod template;

#[cfg(test)]
mod tests;
