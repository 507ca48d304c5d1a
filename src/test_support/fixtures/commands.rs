// Builders for use case commands. Defaults describe a valid create of alice in group 101.

use crate::modules::students::core::resource_path::ResourcePath;
use crate::modules::students::use_cases::create_student::command::CreateStudent;

pub struct CreateStudentBuilder {
    inner: CreateStudent,
}

impl Default for CreateStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateStudentBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateStudent {
                path: ResourcePath::Absent,
                name: Some("alice".to_string()),
                group: Some("101".to_string()),
            },
        }
    }

    pub fn path(mut self, path: &str) -> Self {
        self.inner.path = ResourcePath::from_path_info(Some(path));
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn group(mut self, v: impl Into<String>) -> Self {
        self.inner.group = Some(v.into());
        self
    }

    pub fn without_group(mut self) -> Self {
        self.inner.group = None;
        self
    }

    pub fn build(self) -> CreateStudent {
        self.inner
    }
}
