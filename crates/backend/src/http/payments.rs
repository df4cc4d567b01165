use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use notes_core::model::{CourseId, Enrollment, StudentId, StudentRole};

use super::HttpBackend;
use crate::repository::{
    BackendError, CheckoutSession, EnrollmentRepository, PaymentRepository,
};

#[derive(Debug, Deserialize)]
struct EnrollmentRow {
    role: StudentRole,
}

#[async_trait]
impl EnrollmentRepository for HttpBackend {
    async fn enrollment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<Option<Enrollment>, BackendError> {
        let rows: Vec<EnrollmentRow> = self
            .get_rows(
                "enrollments",
                &[
                    ("select", "role".to_string()),
                    ("course_id", format!("eq.{course_id}")),
                    ("student_id", format!("eq.{student_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(|row| Enrollment {
            course_id,
            student_id,
            role: row.role,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct CourseRow {
    price_pounds: u32,
}

#[derive(Debug, Serialize)]
struct CheckoutRequest {
    course_id: CourseId,
    student_id: StudentId,
}

#[async_trait]
impl PaymentRepository for HttpBackend {
    async fn has_completed_payment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<bool, BackendError> {
        let rows: Vec<Value> = self
            .get_rows(
                "payments",
                &[
                    ("select", "id".to_string()),
                    ("course_id", format!("eq.{course_id}")),
                    ("student_id", format!("eq.{student_id}")),
                    ("status", "eq.completed".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(!rows.is_empty())
    }

    async fn course_price_pounds(&self, course_id: CourseId) -> Result<u32, BackendError> {
        let rows: Vec<CourseRow> = self
            .get_rows(
                "courses",
                &[
                    ("select", "price_pounds".to_string()),
                    ("id", format!("eq.{course_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        rows.into_iter()
            .next()
            .map(|row| row.price_pounds)
            .ok_or(BackendError::NotFound)
    }

    async fn create_checkout_session(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<CheckoutSession, BackendError> {
        self.call_function(
            "create-checkout",
            &CheckoutRequest {
                course_id,
                student_id,
            },
        )
        .await
    }
}
