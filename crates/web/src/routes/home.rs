//! Home page route.

use askama::Template;

/// Home page template with the call request form.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Render the home page.
pub async fn home_page() -> HomeTemplate {
    HomeTemplate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_has_call_form_fields() {
        let html = HomeTemplate.render().unwrap();

        // The handler extracts these exact form field names.
        assert!(html.contains("recipientPhoneNumber"));
        assert!(html.contains("recipientContext"));
        assert!(html.contains("objective"));
        assert!(html.contains("otherContext"));
        assert!(html.contains("action=\"/calls\""));
    }
}
