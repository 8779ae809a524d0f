use constcat::concat;

mod media;
mod sections;
mod variables;

pub use media::MEDIA_STYLES;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: 'Poppins', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
}

a {
  color: var(--primary);
  text-decoration: none;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}
"#,
    CSS_VARIABLES,
    SECTION_STYLES,
    MEDIA_STYLES
);
