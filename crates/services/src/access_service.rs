use std::sync::Arc;

use backend::repository::{EnrollmentRepository, PaymentRepository};
use notes_core::model::{CourseId, StudentId};

use crate::error::{AccessError, CheckoutError};

/// What the paywall gate knows about one student's standing in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseAccess {
    /// True when paid content is unlocked (completed payment or privilege).
    pub has_access: bool,
    /// Course price for the paywall card, in pounds sterling.
    pub price_pounds: u32,
    /// Teachers and admins bypass the gate entirely.
    pub is_privileged: bool,
}

impl CourseAccess {
    /// Paywall policy: session 1 is always free; later sessions require
    /// unlocked access.
    #[must_use]
    pub fn session_unlocked(&self, session_number: u32) -> bool {
        session_number <= 1 || self.has_access
    }
}

/// Authorization and paywall facade over the enrollment and payment
/// collaborators.
#[derive(Clone)]
pub struct AccessService {
    enrollments: Arc<dyn EnrollmentRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl AccessService {
    #[must_use]
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        payments: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            enrollments,
            payments,
        }
    }

    /// Resolve the viewer's access to a course. Viewing any session of the
    /// course requires an enrollment; payment state only widens what the
    /// enrollment already grants.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::NotEnrolled` when the student has no
    /// enrollment, or `AccessError::Backend` on collaborator failures.
    pub async fn course_access(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<CourseAccess, AccessError> {
        let enrollment = self
            .enrollments
            .enrollment(course_id, student_id)
            .await?
            .ok_or(AccessError::NotEnrolled)?;

        let is_privileged = enrollment.role.is_privileged();
        let has_access = is_privileged
            || self
                .payments
                .has_completed_payment(course_id, student_id)
                .await?;

        // A course without a price row still renders; the paywall card
        // simply shows zero.
        let price_pounds = match self.payments.course_price_pounds(course_id).await {
            Ok(price) => price,
            Err(backend::BackendError::NotFound) => 0,
            Err(err) => return Err(err.into()),
        };

        Ok(CourseAccess {
            has_access,
            price_pounds,
            is_privileged,
        })
    }

    /// Create a checkout session and return the external redirect URL.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` when the payment collaborator refuses.
    pub async fn create_checkout(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<String, CheckoutError> {
        let session = self
            .payments
            .create_checkout_session(course_id, student_id)
            .await?;
        Ok(session.url)
    }
}
