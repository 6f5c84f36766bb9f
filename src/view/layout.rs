use crate::view::escape;

/// Top-level section of the app, used to highlight the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    People,
    NotFound,
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active {
        "navbar-item has-background-grey-lighter"
    } else {
        "navbar-item"
    };
    format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, label)
}

pub fn render_navbar(section: Section) -> String {
    format!(
        r#"<nav data-cy="nav" class="navbar is-fixed-top has-shadow" role="navigation" aria-label="main navigation">
  <div class="container">
    <div class="navbar-brand">
      {}
      {}
    </div>
  </div>
</nav>"#,
        nav_link("/", "Home", section == Section::Home),
        nav_link("/people", "People", section == Section::People),
    )
}

/// Wrap page content in the document and app shell
pub fn render_document(title: &str, section: Section, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="has-navbar-fixed-top">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{}</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css">
</head>
<body>
<div data-cy="app">
{}
{}
</div>
</body>
</html>
"#,
        escape(title),
        render_navbar(section),
        content
    )
}

pub fn render_home_page() -> String {
    let content = r#"<main class="section">
  <div class="container">
    <h1 class="title">Home Page</h1>
  </div>
</main>"#;
    render_document("Home", Section::Home, content)
}

pub fn render_not_found_page() -> String {
    let content = r#"<main class="section">
  <div class="container">
    <h1 class="title">Page not found</h1>
  </div>
</main>"#;
    render_document("Page not found", Section::NotFound, content)
}
