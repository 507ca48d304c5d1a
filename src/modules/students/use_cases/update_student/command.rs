use crate::modules::students::core::resource_path::ResourcePath;

/// Raw inputs of an update request, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudent {
    pub path: ResourcePath,
    pub group: Option<String>,
}
