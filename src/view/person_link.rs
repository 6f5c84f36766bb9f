use crate::model::{Person, Sex};
use crate::view::escape;

/// Route of a person's own view
pub fn person_href(person: &Person) -> String {
    format!("/people/{}", escape(&person.slug))
}

/// Render a person's name as a link to their row, women in red
pub fn person_link(person: &Person) -> String {
    let class = match person.sex {
        Sex::Female => r#" class="has-text-danger""#,
        Sex::Male => "",
    };

    format!(
        r#"<a href="{}"{}>{}</a>"#,
        person_href(person),
        class,
        escape(&person.name)
    )
}
