//! Intake form state.
//!
//! `IntakeForm` tracks five independent pieces of editable state for the
//! lifetime of one form view. State transitions are pure: no validation and no
//! I/O happen here. The only coupled transitions are the ones the clinic form
//! mandates — choosing the external-visitor role clears the student id, and the
//! "other symptom" text is surfaced only while catalog id 12 is selected.

use crate::catalog::{self, OTHER_SYMPTOM_ID};
use crate::role::Role;

/// In-memory state of one intake form view.
///
/// Created empty on page load, mutated only by user input events, and
/// discarded (via [`IntakeForm::reset`]) after a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeForm {
    student_name: String,
    student_id: String,
    role: Option<Role>,
    symptom_ids: Vec<u32>,
    other_symptom: String,
}

impl IntakeForm {
    /// Fresh form with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Selected catalog ids, deduplicated, in selection order.
    pub fn symptom_ids(&self) -> &[u32] {
        &self.symptom_ids
    }

    pub fn other_symptom(&self) -> &str {
        &self.other_symptom
    }

    pub fn set_student_name(&mut self, name: impl Into<String>) {
        self.student_name = name.into();
    }

    pub fn set_student_id(&mut self, id: impl Into<String>) {
        self.student_id = id.into();
    }

    /// Set or clear the role.
    ///
    /// Choosing [`Role::ExternalVisitor`] clears the student id
    /// unconditionally; external visitors have none.
    pub fn set_role(&mut self, role: Option<Role>) {
        if role == Some(Role::ExternalVisitor) {
            self.student_id.clear();
        }
        self.role = role;
    }

    /// Replace the symptom selection, deduplicating ids.
    ///
    /// Selection order is preserved for the payload; display strings sort
    /// ascending on their own (see [`catalog::label_line`]).
    pub fn set_symptoms(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.symptom_ids.clear();
        for id in ids {
            if !self.symptom_ids.contains(&id) {
                self.symptom_ids.push(id);
            }
        }
    }

    /// Update the free-text "other" symptom.
    ///
    /// The text is kept even while id 12 is deselected; it is merely excluded
    /// from the payload until id 12 is selected again.
    pub fn set_other_symptom(&mut self, text: impl Into<String>) {
        self.other_symptom = text.into();
    }

    /// The student-id input is rendered unless the external-visitor role is
    /// chosen.
    pub fn student_id_visible(&self) -> bool {
        self.role != Some(Role::ExternalVisitor)
    }

    /// The free-text field is rendered only while id 12 is selected.
    pub fn other_symptom_visible(&self) -> bool {
        self.symptom_ids.contains(&OTHER_SYMPTOM_ID)
    }

    /// Return every field to its page-load state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Human-readable preview shown before the submission is confirmed.
    ///
    /// Symptom labels are sorted ascending by id regardless of selection
    /// order. The note line with the free text appears only when id 12 is
    /// selected.
    pub fn confirmation_summary(&self) -> String {
        let role_label = self.role.map(Role::to_wire).unwrap_or("");
        let symptom_labels = catalog::label_line(&self.symptom_ids);

        let mut summary = format!(
            "ยืนยันข้อมูล:\nชื่อ-นามสกุล: {}\nรหัสนักศึกษา: {}\nสถานะ: {}\nอาการ: {}",
            self.student_name, self.student_id, role_label, symptom_labels
        );

        if self.other_symptom_visible() {
            summary.push_str(&format!("\nหมายเหตุ: {}", self.other_symptom));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty() {
        let form = IntakeForm::new();
        assert_eq!(form.student_name(), "");
        assert_eq!(form.student_id(), "");
        assert_eq!(form.role(), None);
        assert!(form.symptom_ids().is_empty());
        assert_eq!(form.other_symptom(), "");
    }

    #[test]
    fn external_visitor_role_clears_student_id() {
        let mut form = IntakeForm::new();
        form.set_student_id("6401234");
        form.set_role(Some(Role::ExternalVisitor));
        assert_eq!(form.student_id(), "");
        assert!(!form.student_id_visible());
    }

    #[test]
    fn non_external_roles_keep_student_id() {
        let mut form = IntakeForm::new();
        form.set_student_id("6401234");
        form.set_role(Some(Role::Student));
        assert_eq!(form.student_id(), "6401234");
        assert!(form.student_id_visible());
    }

    #[test]
    fn symptom_selection_deduplicates() {
        let mut form = IntakeForm::new();
        form.set_symptoms([5, 2, 5, 2]);
        assert_eq!(form.symptom_ids(), &[5, 2]);
    }

    #[test]
    fn other_field_visibility_follows_id_12() {
        let mut form = IntakeForm::new();
        assert!(!form.other_symptom_visible());

        form.set_symptoms([1, 12]);
        assert!(form.other_symptom_visible());

        form.set_other_symptom("migraine");
        form.set_symptoms([1]);
        assert!(!form.other_symptom_visible());
        // Deselecting does not clear the typed text.
        assert_eq!(form.other_symptom(), "migraine");
    }

    #[test]
    fn summary_sorts_symptom_labels_ascending() {
        let mut form = IntakeForm::new();
        form.set_student_name("สมชาย ใจดี");
        form.set_role(Some(Role::Student));
        form.set_student_id("6401234");
        form.set_symptoms([5, 2]);

        let summary = form.confirmation_summary();
        assert!(summary.contains("อาการ: ปวดท้อง, เป็นหวัด"));
    }

    #[test]
    fn summary_includes_note_only_when_id_12_selected() {
        let mut form = IntakeForm::new();
        form.set_other_symptom("migraine");

        form.set_symptoms([1]);
        assert!(!form.confirmation_summary().contains("หมายเหตุ"));

        form.set_symptoms([1, 12]);
        assert!(form.confirmation_summary().contains("หมายเหตุ: migraine"));
    }

    #[test]
    fn reset_returns_to_page_load_state() {
        let mut form = IntakeForm::new();
        form.set_student_name("A");
        form.set_student_id("6401234");
        form.set_role(Some(Role::Student));
        form.set_symptoms([1, 12]);
        form.set_other_symptom("migraine");

        form.reset();
        assert_eq!(form, IntakeForm::new());
    }
}
