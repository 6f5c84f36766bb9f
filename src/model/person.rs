use serde::{Deserialize, Serialize};

pub type Slug = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Wire form, also shown in the Sex column
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

/// A person exactly as the people API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub slug: Slug,
    pub name: String,
    pub sex: Sex,
    pub born: i32,
    pub died: i32,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
}

impl Person {
    pub fn new(slug: &str, name: &str, sex: Sex, born: i32, died: i32) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            sex,
            born,
            died,
            mother_name: None,
            father_name: None,
        }
    }

    pub fn with_mother(mut self, name: &str) -> Self {
        self.mother_name = Some(name.to_string());
        self
    }

    pub fn with_father(mut self, name: &str) -> Self {
        self.father_name = Some(name.to_string());
        self
    }
}

/// A person plus the positions of its resolved parents in the same `PeopleList`
#[derive(Debug, Clone, PartialEq)]
pub struct PersonWithParents {
    pub person: Person,
    pub mother: Option<usize>,
    pub father: Option<usize>,
}

/// Ordered, enriched result of one load.
///
/// Parents are stored as positions into `people`, so a resolved mother or
/// father is always a record of this very list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleList {
    people: Vec<PersonWithParents>,
}

impl PeopleList {
    pub fn new(people: Vec<PersonWithParents>) -> Self {
        Self { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PersonWithParents> {
        self.people.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonWithParents> {
        self.people.iter()
    }

    pub fn mother_of(&self, entry: &PersonWithParents) -> Option<&PersonWithParents> {
        entry.mother.and_then(|i| self.people.get(i))
    }

    pub fn father_of(&self, entry: &PersonWithParents) -> Option<&PersonWithParents> {
        entry.father.and_then(|i| self.people.get(i))
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&PersonWithParents> {
        self.people.iter().find(|p| p.person.slug == slug)
    }
}

impl<'a> IntoIterator for &'a PeopleList {
    type Item = &'a PersonWithParents;
    type IntoIter = std::slice::Iter<'a, PersonWithParents>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}
