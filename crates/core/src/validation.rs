//! Named validation rules for the intake form.
//!
//! Validation is an ordered list of independent rules rather than one compound
//! boolean, so each requirement can be tested (and reported) on its own. The
//! combined outcome is exactly: fail when the name is empty, no role is
//! chosen, no symptom is selected, or the student id is empty while the role
//! is anything other than external visitor.

use crate::error::{IntakeError, IntakeResult};
use crate::form::IntakeForm;
use crate::role::Role;

/// One requirement the form must satisfy before submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The requester's full name must be non-empty.
    NameRequired,
    /// Exactly one role must be chosen.
    RoleRequired,
    /// At least one symptom must be selected.
    SymptomRequired,
    /// A student/staff id is required unless the role is external visitor.
    StudentIdRequired,
}

/// All rules, in the order they are checked and reported.
pub const RULES: [Rule; 4] = [
    Rule::NameRequired,
    Rule::RoleRequired,
    Rule::SymptomRequired,
    Rule::StudentIdRequired,
];

impl Rule {
    /// User-facing description of the requirement.
    pub fn message(self) -> &'static str {
        match self {
            Rule::NameRequired => "name is required",
            Rule::RoleRequired => "role is required",
            Rule::SymptomRequired => "select at least one symptom",
            Rule::StudentIdRequired => "student id is required for this role",
        }
    }

    /// Whether the form satisfies this rule.
    pub fn is_satisfied(self, form: &IntakeForm) -> bool {
        match self {
            Rule::NameRequired => !form.student_name().trim().is_empty(),
            Rule::RoleRequired => form.role().is_some(),
            Rule::SymptomRequired => !form.symptom_ids().is_empty(),
            Rule::StudentIdRequired => match form.role() {
                Some(Role::ExternalVisitor) => true,
                // An unset role still requires the id; RoleRequired reports
                // the missing role separately.
                _ => !form.student_id().trim().is_empty(),
            },
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Check every rule against the form, collecting all violations in rule order.
pub fn validate(form: &IntakeForm) -> IntakeResult<()> {
    let violations: Vec<Rule> = RULES
        .iter()
        .copied()
        .filter(|rule| !rule.is_satisfied(form))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(IntakeError::ValidationFailed { violations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.set_student_name("A");
        form.set_role(Some(Role::Student));
        form.set_student_id("6401234");
        form.set_symptoms([1]);
        form
    }

    fn violations(form: &IntakeForm) -> Vec<Rule> {
        match validate(form) {
            Ok(()) => Vec::new(),
            Err(IntakeError::ValidationFailed { violations }) => violations,
        }
    }

    #[test]
    fn filled_form_passes() {
        assert!(validate(&filled_form()).is_ok());
    }

    #[test]
    fn empty_name_fails() {
        let mut form = filled_form();
        form.set_student_name("");
        assert_eq!(violations(&form), vec![Rule::NameRequired]);
    }

    #[test]
    fn whitespace_name_fails() {
        let mut form = filled_form();
        form.set_student_name("   ");
        assert_eq!(violations(&form), vec![Rule::NameRequired]);
    }

    #[test]
    fn missing_role_fails() {
        let mut form = filled_form();
        form.set_role(None);
        assert_eq!(violations(&form), vec![Rule::RoleRequired]);
    }

    #[test]
    fn empty_symptom_selection_fails() {
        let mut form = filled_form();
        form.set_symptoms([]);
        assert_eq!(violations(&form), vec![Rule::SymptomRequired]);
    }

    #[test]
    fn student_without_id_fails() {
        let mut form = filled_form();
        form.set_student_id("");
        assert_eq!(violations(&form), vec![Rule::StudentIdRequired]);
    }

    #[test]
    fn internal_staff_without_id_fails() {
        let mut form = filled_form();
        form.set_role(Some(Role::InternalStaff));
        form.set_student_id("");
        assert_eq!(violations(&form), vec![Rule::StudentIdRequired]);
    }

    #[test]
    fn external_visitor_never_needs_an_id() {
        let mut form = filled_form();
        form.set_role(Some(Role::ExternalVisitor));
        assert_eq!(form.student_id(), "");
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn unset_role_reports_both_role_and_id() {
        let mut form = filled_form();
        form.set_role(None);
        form.set_student_id("");
        assert_eq!(
            violations(&form),
            vec![Rule::RoleRequired, Rule::StudentIdRequired]
        );
    }

    #[test]
    fn all_violations_reported_in_rule_order() {
        let form = IntakeForm::new();
        assert_eq!(violations(&form), RULES.to_vec());
    }
}
