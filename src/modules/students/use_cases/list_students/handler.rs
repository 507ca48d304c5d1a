use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::ports::StudentRegistry;
use crate::modules::students::core::resource_path::ResourcePath;
use crate::modules::students::core::student::Student;
use std::sync::Arc;

pub struct ListStudentsHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> ListStudentsHandler<TRegistry>
where
    TRegistry: StudentRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    /// Snapshot of the registry, ascending by name. Only the collection shape is served.
    pub async fn handle(&self, path: &ResourcePath) -> Result<Vec<Student>, StudentError> {
        if !path.is_collection() {
            return Err(StudentError::ResourceNotFound {
                path: path.to_string(),
            });
        }
        Ok(self.registry.list().await)
    }
}
