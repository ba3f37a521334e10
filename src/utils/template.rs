//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const COMPONENT: &'static str = "component";
    pub const SLUG: &'static str = "slug";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_occurrences() {
        let out = render(
            "export default function {{component}}() {} // {{component}}",
            &[(TemplateVars::COMPONENT, "Box")],
        );
        assert_eq!(out, "export default function Box() {} // Box");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{{component}} {{other}}", &[(TemplateVars::COMPONENT, "X")]);
        assert_eq!(out, "X {{other}}");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("function {{component}}()", TemplateVars::COMPONENT));
        assert!(!is_present("function Box()", TemplateVars::COMPONENT));
    }
}
