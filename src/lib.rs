pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod source;
pub mod view;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::{LoadError, LoadResult};
pub use logic::transform_people;

// Export all model types
pub use model::*;

pub use source::{HttpPeopleSource, PeopleSource, StaticPeopleSource};
pub use view::{PageState, PeoplePage};
