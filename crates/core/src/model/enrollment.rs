use serde::{Deserialize, Serialize};

use crate::model::{CourseId, StudentId};

/// Role attached to an enrollment. Teachers and admins bypass the paywall
/// gate for every session of the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentRole {
    Student,
    Teacher,
    Admin,
}

impl StudentRole {
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Teacher | Self::Admin)
    }
}

/// A student's membership in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    pub course_id: CourseId,
    pub student_id: StudentId,
    pub role: StudentRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_teacher_and_admin_are_privileged() {
        assert!(!StudentRole::Student.is_privileged());
        assert!(StudentRole::Teacher.is_privileged());
        assert!(StudentRole::Admin.is_privileged());
    }
}
