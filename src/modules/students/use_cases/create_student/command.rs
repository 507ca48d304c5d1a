use crate::modules::students::core::resource_path::ResourcePath;

/// Raw inputs of a create request, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudent {
    pub path: ResourcePath,
    pub name: Option<String>,
    pub group: Option<String>,
}
