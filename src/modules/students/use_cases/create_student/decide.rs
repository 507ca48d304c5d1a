use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::student::Student;
use crate::modules::students::use_cases::create_student::command::CreateStudent;

/// Validates path and parameters in order. Name uniqueness is left to the registry,
/// which checks it atomically with the insert.
pub fn decide_create(command: CreateStudent) -> Result<Student, StudentError> {
    if !command.path.is_collection() {
        return Err(StudentError::ResourceNotFound {
            path: command.path.to_string(),
        });
    }
    // Registry keys are never empty.
    let name = command
        .name
        .filter(|name| !name.is_empty())
        .ok_or(StudentError::ParameterMissing("name"))?;
    let group = command.group.ok_or(StudentError::ParameterMissing("group"))?;
    Ok(Student { name, group })
}

#[cfg(test)]
mod create_student_decide_tests {
    use super::*;
    use crate::test_support::fixtures::commands::CreateStudentBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_a_complete_command() {
        let student = decide_create(CreateStudentBuilder::new().build());
        assert_eq!(student, Ok(Student::new("alice", "101")));
    }

    #[rstest]
    fn it_should_accept_a_bare_separator_as_the_collection() {
        let student = decide_create(CreateStudentBuilder::new().path("/").build());
        assert!(student.is_ok());
    }

    #[rstest]
    fn it_should_accept_an_empty_group() {
        let student = decide_create(CreateStudentBuilder::new().group("").build());
        assert_eq!(student, Ok(Student::new("alice", "")));
    }

    #[rstest]
    fn it_should_reject_a_student_path_before_checking_parameters() {
        let command = CreateStudentBuilder::new()
            .path("/alice")
            .without_name()
            .without_group()
            .build();
        assert_eq!(
            decide_create(command),
            Err(StudentError::ResourceNotFound {
                path: "/alice".into()
            })
        );
    }

    #[rstest]
    #[case(CreateStudentBuilder::new().without_name().without_group(), "name")]
    #[case(CreateStudentBuilder::new().name(""), "name")]
    #[case(CreateStudentBuilder::new().without_group(), "group")]
    fn it_should_report_the_first_missing_parameter(
        #[case] builder: CreateStudentBuilder,
        #[case] parameter: &'static str,
    ) {
        assert_eq!(
            decide_create(builder.build()),
            Err(StudentError::ParameterMissing(parameter))
        );
    }
}
