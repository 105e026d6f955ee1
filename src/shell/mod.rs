// Composition root for the stoppages service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the record store, time provider and stoppage store.
// - Expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
