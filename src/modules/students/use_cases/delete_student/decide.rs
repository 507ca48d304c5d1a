use crate::modules::students::core::errors::StudentError;
use crate::modules::students::use_cases::delete_student::command::DeleteStudent;

/// Extracts the name of the student to remove.
pub fn decide_delete(command: &DeleteStudent) -> Result<&str, StudentError> {
    command
        .path
        .student_name()
        .ok_or(StudentError::NameNotSpecified)
}
