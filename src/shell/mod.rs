// Composition root for the timeline journal.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Spawn background workers (scheduled sleep auto-fill).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
