// Ports the use cases need from the outside world.
//
// The registry is the only state of the resource. Implementations must run each
// call as one critical section: the existence check and the mutation it guards
// are never observed apart by a concurrent request.

use crate::modules::students::core::student::Student;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("student {name} already exists; choose a unique name")]
    AlreadyExists { name: String },

    #[error("student {name} does not exist")]
    DoesNotExist { name: String },
}

#[async_trait]
pub trait StudentRegistry: Send + Sync {
    /// All students, ascending by name.
    async fn list(&self) -> Vec<Student>;

    async fn insert(&self, student: Student) -> Result<(), RegistryError>;

    /// Replaces the group of an existing student and returns the previous one.
    async fn update_group(&self, name: &str, group: String) -> Result<String, RegistryError>;

    async fn remove(&self, name: &str) -> Result<Student, RegistryError>;
}
