//! Wire payload for the backend intake endpoint.
//!
//! This is the strict wire model serialised into the POST body. It is built
//! from a validated form; building it never fails. Field names follow the
//! backend's snake_case contract.

use serde::{Deserialize, Serialize};

use crate::form::IntakeForm;
use crate::role::Role;

/// JSON body POSTed to the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    /// Student/staff id; empty for external visitors.
    pub student_id: String,
    /// Requester's full name.
    pub student_name: String,
    /// Role wire label.
    pub role: String,
    /// Selected catalog ids (deduplicated; order is the selection order, the
    /// backend does not rely on it being sorted).
    pub symptom_ids: Vec<u32>,
    /// Free text, populated only when catalog id 12 is selected.
    pub other_symptom: String,
}

impl IntakeSubmission {
    /// Build the payload from form state.
    ///
    /// The "other" free text is transmitted only while id 12 is selected;
    /// otherwise it is replaced by the empty string, whatever the user may
    /// have typed while the field was visible.
    pub fn from_form(form: &IntakeForm) -> Self {
        let other_symptom = if form.other_symptom_visible() {
            form.other_symptom().to_string()
        } else {
            String::new()
        };

        Self {
            student_id: form.student_id().to_string(),
            student_name: form.student_name().to_string(),
            role: form.role().map(Role::to_wire).unwrap_or("").to_string(),
            symptom_ids: form.symptom_ids().to_vec(),
            other_symptom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(symptoms: &[u32]) -> IntakeForm {
        let mut form = IntakeForm::new();
        form.set_student_name("A");
        form.set_role(Some(Role::Student));
        form.set_student_id("6401234");
        form.set_symptoms(symptoms.iter().copied());
        form
    }

    #[test]
    fn other_text_included_only_when_id_12_selected() {
        let mut form = form_with(&[1, 12]);
        form.set_other_symptom("migraine");
        assert_eq!(IntakeSubmission::from_form(&form).other_symptom, "migraine");

        form.set_symptoms([1]);
        assert_eq!(IntakeSubmission::from_form(&form).other_symptom, "");
    }

    #[test]
    fn external_visitor_payload_carries_empty_student_id() {
        let mut form = form_with(&[1]);
        form.set_role(Some(Role::ExternalVisitor));
        let submission = IntakeSubmission::from_form(&form);
        assert_eq!(submission.student_id, "");
        assert_eq!(submission.role, "บุคคลภายนอก");
    }

    #[test]
    fn json_field_names_match_backend_contract() {
        let mut form = form_with(&[5, 2]);
        form.set_other_symptom("ignored");
        let value = serde_json::to_value(IntakeSubmission::from_form(&form)).unwrap();

        assert_eq!(value["student_id"], "6401234");
        assert_eq!(value["student_name"], "A");
        assert_eq!(value["role"], "นักศึกษา");
        assert_eq!(value["symptom_ids"], serde_json::json!([5, 2]));
        assert_eq!(value["other_symptom"], "");
    }

    #[test]
    fn payload_round_trips_through_json() {
        let submission = IntakeSubmission::from_form(&form_with(&[1, 12]));
        let json = serde_json::to_string(&submission).unwrap();
        let parsed: IntakeSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, submission);
    }
}
