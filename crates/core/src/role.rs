//! Requester roles.
//!
//! A requester is one of three mutually exclusive categories. The role decides
//! whether a student/staff id is required: external visitors have none.

/// Category of the person filling in the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Enrolled student.
    Student,
    /// Staff employed by the university.
    InternalStaff,
    /// Visitor from outside the university.
    ExternalVisitor,
}

impl Role {
    /// Convert to the wire/display label.
    pub fn to_wire(self) -> &'static str {
        match self {
            Role::Student => "นักศึกษา",
            Role::InternalStaff => "บุคลากรภายในมหาลัย",
            Role::ExternalVisitor => "บุคคลภายนอก",
        }
    }

    /// Parse from the wire/display label.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "นักศึกษา" => Some(Role::Student),
            "บุคลากรภายในมหาลัย" => Some(Role::InternalStaff),
            "บุคคลภายนอก" => Some(Role::ExternalVisitor),
            _ => None,
        }
    }

    /// Whether this role must supply a student/staff id.
    pub fn requires_student_id(self) -> bool {
        !matches!(self, Role::ExternalVisitor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_round_trip() {
        for role in [Role::Student, Role::InternalStaff, Role::ExternalVisitor] {
            assert_eq!(Role::from_wire(role.to_wire()), Some(role));
        }
    }

    #[test]
    fn unknown_label_does_not_parse() {
        assert_eq!(Role::from_wire("visitor"), None);
        assert_eq!(Role::from_wire(""), None);
    }

    #[test]
    fn only_external_visitor_skips_student_id() {
        assert!(Role::Student.requires_student_id());
        assert!(Role::InternalStaff.requires_student_id());
        assert!(!Role::ExternalVisitor.requires_student_id());
    }
}
