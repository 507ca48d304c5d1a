// Composition root for the students resource.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the registry and inject it into the use case handlers.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
