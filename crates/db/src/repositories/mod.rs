//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an executor) as the first argument.

pub mod course_repo;
pub mod enrollment_repo;
pub mod holiday_repo;
pub mod student_repo;
pub mod topic_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use holiday_repo::HolidayRepo;
pub use student_repo::StudentRepo;
pub use topic_repo::TopicRepo;
