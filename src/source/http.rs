use reqwest::Client;

use crate::error::{LoadError, LoadResult};
use crate::model::Person;
use crate::source::traits::PeopleSource;

/// Reads people from the remote JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpPeopleSource {
    client: Client,
    url: String,
}

impl HttpPeopleSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn get_people(&self) -> LoadResult<Vec<Person>> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        // Decode through serde_json so shape errors stay distinct from transport errors
        let body = response.bytes().await?;
        let people: Vec<Person> = serde_json::from_slice(&body)?;
        Ok(people)
    }
}
