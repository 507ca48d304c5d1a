use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::ports::StudentRegistry;
use crate::modules::students::use_cases::create_student::command::CreateStudent;
use crate::modules::students::use_cases::create_student::decide::decide_create;
use std::sync::Arc;

pub struct CreateStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> CreateStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: CreateStudent) -> Result<(), StudentError> {
        let student = decide_create(command)?;
        let (name, group) = (student.name.clone(), student.group.clone());
        self.registry.insert(student).await?;
        tracing::info!(%name, %group, "student created");
        Ok(())
    }
}
