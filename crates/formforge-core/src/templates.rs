//! Built-in templates
//!
//! Predefined step sequences used to seed a new form via the
//! `LoadTemplate` operation. Structurally identical to user-authored
//! steps; ids are fixed strings so repeated loads are deterministic.

use crate::domain::field::{FieldDefinition, FieldId, FieldType};
use crate::domain::step::{StepDefinition, StepId};

fn field(
    id: &str,
    field_type: FieldType,
    label: &str,
    placeholder: Option<&str>,
    required: bool,
) -> FieldDefinition {
    FieldDefinition {
        id: FieldId::from(id),
        field_type,
        label: label.to_string(),
        required,
        placeholder: placeholder.map(str::to_string),
        options: None,
        min_length: None,
        max_length: None,
        pattern: None,
    }
}

fn step(id: &str, name: &str, fields: Vec<FieldDefinition>) -> StepDefinition {
    StepDefinition {
        id: StepId::from(id),
        name: name.to_string(),
        fields,
    }
}

/// Single-step contact form: name, email, message
pub fn contact_us() -> Vec<StepDefinition> {
    vec![step(
        "step1",
        "Contact Info",
        vec![
            field(
                "name",
                FieldType::Text,
                "Full Name",
                Some("Enter your name"),
                true,
            ),
            field(
                "email",
                FieldType::Text,
                "Email Address",
                Some("Enter your email"),
                true,
            ),
            field(
                "message",
                FieldType::Textarea,
                "Message",
                Some("Your message here..."),
                true,
            ),
        ],
    )]
}

/// Single-step feedback form with a dropdown rating
pub fn feedback() -> Vec<StepDefinition> {
    let mut rating = field("rating", FieldType::Dropdown, "Rating", None, true);
    rating.options = Some(
        ["1", "2", "3", "4", "5"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    vec![step(
        "step1",
        "Feedback Form",
        vec![
            field(
                "feedbackName",
                FieldType::Text,
                "Name",
                Some("Enter your name"),
                false,
            ),
            rating,
            field(
                "comments",
                FieldType::Textarea,
                "Comments",
                Some("Leave your feedback here..."),
                false,
            ),
        ],
    )]
}

/// Three-step job application form
pub fn job_application() -> Vec<StepDefinition> {
    vec![
        step(
            "step1",
            "Personal Details",
            vec![
                field(
                    "fullName",
                    FieldType::Text,
                    "Full Name",
                    Some("Enter your full name"),
                    true,
                ),
                field(
                    "email",
                    FieldType::Text,
                    "Email",
                    Some("Enter your email"),
                    true,
                ),
                field(
                    "phone",
                    FieldType::Text,
                    "Phone Number",
                    Some("Enter your contact number"),
                    true,
                ),
            ],
        ),
        step(
            "step2",
            "Resume & Experience",
            vec![
                field("resume", FieldType::Text, "Upload Resume", None, true),
                field(
                    "experience",
                    FieldType::Textarea,
                    "Work Experience",
                    Some("Describe your experience"),
                    false,
                ),
            ],
        ),
        step(
            "step3",
            "Terms & conditions",
            // Reuses the "resume" id from step 2; field ids only need to
            // be unique within their own step
            vec![field(
                "resume",
                FieldType::Text,
                "Share experience",
                None,
                true,
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_step_transition;

    #[test]
    fn test_templates_are_well_formed() {
        for template in [contact_us(), feedback(), job_application()] {
            assert!(!template.is_empty());
            for step in &template {
                // Every built-in template must pass step-transition
                // validation as loaded
                assert!(validate_step_transition(step).is_ok());
                for field in &step.fields {
                    assert_eq!(field.options.is_some(), field.field_type.supports_options());
                }
            }
        }
    }

    #[test]
    fn test_job_application_step_order() {
        let steps = job_application();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].name, "Personal Details");
        assert_eq!(steps[1].name, "Resume & Experience");
        assert_eq!(steps[2].name, "Terms & conditions");
    }

    #[test]
    fn test_job_application_reuses_resume_id_across_steps() {
        // The "resume" id appears in both step 2 and step 3; uniqueness
        // is only required within a single step, and the payload keeps
        // both ids as shipped
        let steps = job_application();
        assert!(steps[1].field(&FieldId::from("resume")).is_some());
        let step3_field = steps[2].field(&FieldId::from("resume")).unwrap();
        assert_eq!(step3_field.label, "Share experience");

        for step in &steps {
            let mut seen = std::collections::HashSet::new();
            assert!(step.fields.iter().all(|f| seen.insert(&f.id)));
        }
    }

    #[test]
    fn test_feedback_rating_options() {
        let steps = feedback();
        let rating = steps[0].field(&FieldId::from("rating")).unwrap();
        assert_eq!(rating.field_type, FieldType::Dropdown);
        assert_eq!(rating.options.as_ref().unwrap().len(), 5);
    }
}
