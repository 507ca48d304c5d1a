use crate::modules::students::core::resource_path::ResourcePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudent {
    pub path: ResourcePath,
}
