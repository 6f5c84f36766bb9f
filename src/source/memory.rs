use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LoadError, LoadResult};
use crate::model::Person;
use crate::source::traits::PeopleSource;

/// In-memory source, handy for demos and tests
#[derive(Debug, Default)]
pub struct StaticPeopleSource {
    people: Option<Vec<Person>>,
    calls: AtomicUsize,
}

impl StaticPeopleSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: Some(people),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every load fails with a 503
    pub fn failing() -> Self {
        Self {
            people: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `get_people` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PeopleSource for StaticPeopleSource {
    async fn get_people(&self) -> LoadResult<Vec<Person>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.people {
            Some(people) => Ok(people.clone()),
            None => Err(LoadError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}
