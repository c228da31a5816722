pub use super::course::Entity as Course;
pub use super::group::Entity as Group;
pub use super::student::Entity as Student;
pub use super::student_course::Entity as StudentCourse;
pub use super::teacher::Entity as Teacher;
pub use super::teacher_course::Entity as TeacherCourse;
