use crate::model::{PeopleList, Person, PersonWithParents};
use std::collections::HashMap;

/// Link every person to its mother and father inside the same list.
///
/// Parents are matched by exact name. When several people share the name,
/// the first one in list order that is not the person itself wins.
pub fn transform_people(people: Vec<Person>) -> PeopleList {
    let links: Vec<(Option<usize>, Option<usize>)> = {
        let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, person) in people.iter().enumerate() {
            by_name.entry(person.name.as_str()).or_default().push(index);
        }

        let find_parent = |child: usize, parent_name: Option<&String>| -> Option<usize> {
            let candidates = by_name.get(parent_name?.as_str())?;
            candidates.iter().copied().find(|&index| index != child)
        };

        people
            .iter()
            .enumerate()
            .map(|(index, person)| {
                (
                    find_parent(index, person.mother_name.as_ref()),
                    find_parent(index, person.father_name.as_ref()),
                )
            })
            .collect()
    };

    let enriched = people
        .into_iter()
        .zip(links)
        .map(|(person, (mother, father))| PersonWithParents {
            person,
            mother,
            father,
        })
        .collect();

    PeopleList::new(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;

    fn sample() -> Vec<Person> {
        vec![
            Person::new("jane", "Jane", Sex::Female, 1850, 1910)
                .with_mother("Mary")
                .with_father("John"),
            Person::new("mary", "Mary", Sex::Female, 1820, 1880),
            Person::new("tom", "Tom", Sex::Male, 1852, 1920).with_father("Unknown Man"),
            Person::new("john", "John", Sex::Male, 1818, 1875),
        ]
    }

    #[test]
    fn test_preserves_length_and_order() {
        let input = sample();
        let slugs: Vec<String> = input.iter().map(|p| p.slug.clone()).collect();

        let list = transform_people(input);

        assert_eq!(list.len(), slugs.len());
        let out: Vec<&str> = list.iter().map(|p| p.person.slug.as_str()).collect();
        assert_eq!(out, slugs);
    }

    #[test]
    fn test_links_parents_by_name() {
        let list = transform_people(sample());
        let jane = list.get(0).unwrap();

        assert_eq!(list.mother_of(jane).unwrap().person.slug, "mary");
        assert_eq!(list.father_of(jane).unwrap().person.slug, "john");
    }

    #[test]
    fn test_unmatched_parent_keeps_name() {
        let list = transform_people(sample());
        let tom = list.find_by_slug("tom").unwrap();

        assert!(tom.father.is_none());
        assert_eq!(tom.person.father_name.as_deref(), Some("Unknown Man"));
        assert!(tom.mother.is_none());
        assert!(tom.person.mother_name.is_none());
    }

    #[test]
    fn test_first_match_wins_on_name_collision() {
        let people = vec![
            Person::new("child", "Ann", Sex::Female, 1900, 1970).with_mother("Eve"),
            Person::new("eve-1", "Eve", Sex::Female, 1870, 1930),
            Person::new("eve-2", "Eve", Sex::Female, 1872, 1940),
        ];

        let list = transform_people(people);
        let child = list.get(0).unwrap();
        assert_eq!(list.mother_of(child).unwrap().person.slug, "eve-1");
    }

    #[test]
    fn test_person_is_never_own_parent() {
        let people = vec![
            Person::new("eve-1", "Eve", Sex::Female, 1900, 1970).with_mother("Eve"),
            Person::new("eve-2", "Eve", Sex::Female, 1870, 1930),
        ];

        let list = transform_people(people);
        assert_eq!(list.get(0).unwrap().mother, Some(1));

        let alone = transform_people(vec![
            Person::new("solo", "Solo", Sex::Male, 1900, 1970).with_father("Solo"),
        ]);
        assert!(alone.get(0).unwrap().father.is_none());
    }

    #[test]
    fn test_name_match_is_exact() {
        let people = vec![
            Person::new("a", "Jane", Sex::Female, 1900, 1970).with_mother("mary"),
            Person::new("b", "Mary", Sex::Female, 1870, 1930),
        ];

        let list = transform_people(people);
        assert!(list.get(0).unwrap().mother.is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(transform_people(Vec::new()).is_empty());
    }
}
