use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{LoadError, LoadResult};
use crate::logic::transform_people;
use crate::model::{PeopleList, PersonWithParents, Slug};
use crate::source::PeopleSource;
use crate::view::{escape, person_link, render_document, Section};

/// What the people page currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Failed,
    /// An empty list is the "no people" state
    Loaded(PeopleList),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }
}

/// Fetch the raw list and link parents
pub async fn load_people<S: PeopleSource + ?Sized>(source: &S) -> LoadResult<PeopleList> {
    let people = source.get_people().await?;
    Ok(transform_people(people))
}

/// A mounted people page.
///
/// Mounting starts exactly one load. The load only publishes its outcome
/// while the page is alive; dropping the page cancels it.
#[derive(Debug)]
pub struct PeoplePage {
    selected_slug: Option<Slug>,
    state: watch::Receiver<PageState>,
    load: JoinHandle<()>,
}

impl PeoplePage {
    pub fn mount<S>(source: Arc<S>, selected_slug: Option<Slug>) -> Self
    where
        S: PeopleSource + ?Sized + 'static,
    {
        let (state_tx, state_rx) = watch::channel(PageState::Loading);

        let load = tokio::spawn(async move {
            let outcome = tokio::select! {
                result = load_people(source.as_ref()) => result,
                // every receiver gone means the page was dropped
                _ = state_tx.closed() => return,
            };

            if state_tx.is_closed() {
                log::debug!("people page unmounted before load finished");
                return;
            }

            let next = match outcome {
                Ok(people) => {
                    log::info!("loaded {} people", people.len());
                    PageState::Loaded(people)
                }
                Err(e) => {
                    log::warn!("failed to load people: {}", e);
                    PageState::Failed
                }
            };

            let _ = state_tx.send(next);
        });

        Self {
            selected_slug,
            state: state_rx,
            load,
        }
    }

    pub fn selected_slug(&self) -> Option<&str> {
        self.selected_slug.as_deref()
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Wait until the page has left the loading state
    pub async fn settled(&self) -> PageState {
        let mut state = self.state.clone();
        let settled = match state.wait_for(|s| !s.is_loading()).await {
            Ok(settled) => settled.clone(),
            // the load task went away without publishing
            Err(_) => PageState::Failed,
        };
        settled
    }

    /// Markup of the page body for the current state
    pub fn render_content(&self) -> String {
        let state = self.state.borrow();
        render_people_content(&state, self.selected_slug())
    }

    /// Full HTML document for the current state
    pub fn render(&self) -> String {
        render_document("People", Section::People, &self.render_content())
    }
}

impl Drop for PeoplePage {
    fn drop(&mut self) {
        self.load.abort();
    }
}

const LOADER: &str = r#"<div class="Loader" data-cy="loader">
  <div class="Loader__content"></div>
</div>"#;

pub fn render_people_content(state: &PageState, selected_slug: Option<&str>) -> String {
    let body = match state {
        PageState::Loading => LOADER.to_string(),
        PageState::Failed => format!(
            r#"<p data-cy="peopleLoadingError" class="has-text-danger">{}</p>"#,
            LoadError::USER_MESSAGE
        ),
        PageState::Loaded(people) if people.is_empty() => {
            r#"<p data-cy="noPeopleMessage">There are no people on the server</p>"#.to_string()
        }
        PageState::Loaded(people) => render_people_table(people, selected_slug),
    };

    format!(
        r#"<main class="section">
  <div class="container">
    <h1 class="title">People Page</h1>
    <div class="block">
      <div class="box table-container">
{}
      </div>
    </div>
  </div>
</main>"#,
        body
    )
}

fn render_parent_cell(parent: Option<&PersonWithParents>, stated_name: Option<&String>) -> String {
    match (parent, stated_name) {
        (Some(parent), _) => person_link(&parent.person),
        (None, Some(name)) => escape(name),
        (None, None) => "-".to_string(),
    }
}

fn render_people_table(people: &PeopleList, selected_slug: Option<&str>) -> String {
    let mut rows = String::new();
    for entry in people {
        let person = &entry.person;
        let class = if selected_slug == Some(person.slug.as_str()) {
            r#" class="has-background-warning""#
        } else {
            ""
        };

        rows.push_str(&format!(
            r#"    <tr data-cy="person"{}>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
    </tr>
"#,
            class,
            person_link(person),
            person.sex.as_str(),
            person.born,
            person.died,
            render_parent_cell(people.mother_of(entry), person.mother_name.as_ref()),
            render_parent_cell(people.father_of(entry), person.father_name.as_ref()),
        ));
    }

    format!(
        r#"<table data-cy="peopleTable" class="table is-striped is-hoverable is-narrow is-fullwidth">
  <thead>
    <tr>
      <th>Name</th>
      <th>Sex</th>
      <th>Born</th>
      <th>Died</th>
      <th>Mother</th>
      <th>Father</th>
    </tr>
  </thead>
  <tbody>
{}  </tbody>
</table>"#,
        rows
    )
}
