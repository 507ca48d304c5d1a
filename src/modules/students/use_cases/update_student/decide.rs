use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::student::Student;
use crate::modules::students::use_cases::update_student::command::UpdateStudent;

/// Returns the addressed student with the requested group. Existence is checked by the
/// registry together with the overwrite.
pub fn decide_update(command: UpdateStudent) -> Result<Student, StudentError> {
    let name = command
        .path
        .student_name()
        .ok_or(StudentError::NameNotSpecified)?;
    let group = command.group.ok_or(StudentError::ParameterMissing("group"))?;
    Ok(Student::new(name, group))
}

#[cfg(test)]
mod update_student_decide_tests {
    use super::*;
    use crate::modules::students::core::resource_path::ResourcePath;
    use rstest::rstest;

    fn command(path: ResourcePath, group: Option<&str>) -> UpdateStudent {
        UpdateStudent {
            path,
            group: group.map(str::to_string),
        }
    }

    #[rstest]
    fn it_should_take_the_name_from_the_path() {
        let decision = decide_update(command(ResourcePath::Present("/alice".into()), Some("202")));
        assert_eq!(decision, Ok(Student::new("alice", "202")));
    }

    #[rstest]
    fn it_should_require_a_path_before_the_group() {
        let decision = decide_update(command(ResourcePath::Absent, None));
        assert_eq!(decision, Err(StudentError::NameNotSpecified));
    }

    #[rstest]
    fn it_should_require_the_group() {
        let decision = decide_update(command(ResourcePath::Present("/alice".into()), None));
        assert_eq!(decision, Err(StudentError::ParameterMissing("group")));
    }

    #[rstest]
    fn it_should_keep_nested_segments_in_the_name() {
        let decision = decide_update(command(ResourcePath::Present("/a/b".into()), Some("1")));
        assert_eq!(decision, Ok(Student::new("a/b", "1")));
    }
}
