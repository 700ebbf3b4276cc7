//! Form validation as data: each form declares a table of named field rules
//! instead of growing ad-hoc error objects keyed by field name.

/// How a single field is checked. `Email` and `Phone` imply `Required`; use
/// the dedicated optional variants for fields that may be left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Phone,
    OptionalEmail,
}

pub struct FieldRule<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub get: fn(&T) -> String,
    pub rule: Rule,
}

fn check(rule: Rule, label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    match rule {
        Rule::Required => value.is_empty().then(|| format!("{label} is required")),
        Rule::Email => {
            if value.is_empty() {
                Some(format!("{label} is required"))
            } else {
                (!email_ok(value)).then(|| "Please enter a valid email address".to_string())
            }
        }
        Rule::Phone => {
            if value.is_empty() {
                Some(format!("{label} is required"))
            } else {
                (!phone_ok(value)).then(|| "Please enter a valid phone number".to_string())
            }
        }
        Rule::OptionalEmail => {
            if value.is_empty() {
                None
            } else {
                (!email_ok(value)).then(|| "Please enter a valid email address".to_string())
            }
        }
    }
}

/// All failing fields, in declaration order, as `(field name, message)`.
pub fn collect_errors<T>(rules: &[FieldRule<T>], value: &T) -> Vec<(&'static str, String)> {
    rules
        .iter()
        .filter_map(|rule| {
            check(rule.rule, rule.label, &(rule.get)(value)).map(|message| (rule.name, message))
        })
        .collect()
}

/// The first failing field's message, for flows that surface one toast at a
/// time (the intake steps).
pub fn first_error<T>(rules: &[FieldRule<T>], value: &T) -> Option<String> {
    collect_errors(rules, value)
        .into_iter()
        .next()
        .map(|(_, message)| message)
}

/// Minimal shape check: one `@`, something before it, a dot in the domain.
pub fn email_ok(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// Accepts an optional leading `+`, then digits with common separators, and
/// requires at least seven digits overall.
pub fn phone_ok(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0usize;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits >= 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Signup {
        name: String,
        email: String,
        phone: String,
    }

    fn rules() -> Vec<FieldRule<Signup>> {
        vec![
            FieldRule {
                name: "name",
                label: "Full name",
                get: |form: &Signup| form.name.clone(),
                rule: Rule::Required,
            },
            FieldRule {
                name: "email",
                label: "Email address",
                get: |form: &Signup| form.email.clone(),
                rule: Rule::Email,
            },
            FieldRule {
                name: "phone",
                label: "Phone number",
                get: |form: &Signup| form.phone.clone(),
                rule: Rule::Phone,
            },
        ]
    }

    #[test]
    fn empty_form_fails_every_rule() {
        let errors = collect_errors(&rules(), &Signup::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].0, "name");
        assert_eq!(errors[0].1, "Full name is required");
    }

    #[test]
    fn valid_form_passes() {
        let form = Signup {
            name: "Phoenix Baker".into(),
            email: "phoenix@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
        };
        assert!(collect_errors(&rules(), &form).is_empty());
        assert_eq!(first_error(&rules(), &form), None);
    }

    #[test]
    fn first_error_reports_declaration_order() {
        let form = Signup {
            name: "Phoenix Baker".into(),
            email: "not-an-email".into(),
            phone: String::new(),
        };
        assert_eq!(
            first_error(&rules(), &form).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn email_shapes() {
        assert!(email_ok("a@b.co"));
        assert!(email_ok("first.last@sub.domain.org"));
        assert!(!email_ok("missing-at.example.com"));
        assert!(!email_ok("@example.com"));
        assert!(!email_ok("two@@example.com"));
        assert!(!email_ok("spaces in@example.com"));
        assert!(!email_ok("nodot@examplecom"));
        assert!(!email_ok("trailing@example.com."));
    }

    #[test]
    fn phone_shapes() {
        assert!(phone_ok("+12345678901"));
        assert!(phone_ok("555 123 4567"));
        assert!(phone_ok("(555) 123-4567"));
        assert!(!phone_ok("555-123")); // too short
        assert!(!phone_ok("call me maybe"));
        assert!(!phone_ok("+1-555-abc-0000"));
    }

    #[test]
    fn optional_email_allows_blank_but_not_garbage() {
        assert_eq!(check(Rule::OptionalEmail, "Email", ""), None);
        assert_eq!(check(Rule::OptionalEmail, "Email", "  "), None);
        assert!(check(Rule::OptionalEmail, "Email", "nope").is_some());
    }
}
