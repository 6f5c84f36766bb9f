use crate::error::LoadResult;
use crate::model::Person;

/// Where the people page gets its raw records from
#[async_trait::async_trait]
pub trait PeopleSource: Send + Sync {
    /// Fetch the full flat list once. No retry, no caching.
    async fn get_people(&self) -> LoadResult<Vec<Person>>;
}
