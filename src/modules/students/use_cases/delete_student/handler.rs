use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::ports::StudentRegistry;
use crate::modules::students::use_cases::delete_student::command::DeleteStudent;
use crate::modules::students::use_cases::delete_student::decide::decide_delete;
use std::sync::Arc;

pub struct DeleteStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> DeleteStudentHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: DeleteStudent) -> Result<(), StudentError> {
        let name = decide_delete(&command)?;
        let removed = self.registry.remove(name).await?;
        tracing::info!(name = %removed.name, group = %removed.group, "student deleted");
        Ok(())
    }
}
