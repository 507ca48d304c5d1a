use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::ports::StudentRegistry;
use crate::modules::students::use_cases::update_student::command::UpdateStudent;
use crate::modules::students::use_cases::update_student::decide::decide_update;
use std::sync::Arc;

pub struct UpdateStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UpdateStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: UpdateStudent) -> Result<(), StudentError> {
        let student = decide_update(command)?;
        let previous = self
            .registry
            .update_group(&student.name, student.group.clone())
            .await?;
        tracing::info!(
            name = %student.name,
            from = %previous,
            to = %student.group,
            "student group updated"
        );
        Ok(())
    }
}
