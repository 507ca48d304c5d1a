use crate::modules::students::adapters::outbound::in_memory_registry::InMemoryStudentRegistry;
use crate::modules::students::use_cases::create_student::handler::CreateStudentHandler;
use crate::modules::students::use_cases::delete_student::handler::DeleteStudentHandler;
use crate::modules::students::use_cases::list_students::handler::ListStudentsHandler;
use crate::modules::students::use_cases::update_student::handler::UpdateStudentHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub base_path: Arc<str>,
    pub list_handler: Arc<ListStudentsHandler<InMemoryStudentRegistry>>,
    pub create_handler: Arc<CreateStudentHandler<InMemoryStudentRegistry>>,
    pub update_handler: Arc<UpdateStudentHandler<InMemoryStudentRegistry>>,
    pub delete_handler: Arc<DeleteStudentHandler<InMemoryStudentRegistry>>,
}

impl AppState {
    /// Every handler shares the one registry passed in.
    pub fn new(base_path: impl Into<Arc<str>>, registry: Arc<InMemoryStudentRegistry>) -> Self {
        Self {
            base_path: base_path.into(),
            list_handler: Arc::new(ListStudentsHandler::new(registry.clone())),
            create_handler: Arc::new(CreateStudentHandler::new(registry.clone())),
            update_handler: Arc::new(UpdateStudentHandler::new(registry.clone())),
            delete_handler: Arc::new(DeleteStudentHandler::new(registry)),
        }
    }
}
