// In memory student registry.
//
// Purpose
// - Hold the registry for the lifetime of the server process. Nothing is persisted.
//
// Responsibilities
// - Keep students ordered by name so listing needs no extra sort.
// - Take the lock once per call, so each check-then-act runs as a unit.

use crate::modules::students::core::ports::{RegistryError, StudentRegistry};
use crate::modules::students::core::student::Student;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStudentRegistry {
    students: RwLock<BTreeMap<String, String>>,
}

impl InMemoryStudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StudentRegistry for InMemoryStudentRegistry {
    async fn list(&self) -> Vec<Student> {
        self.students
            .read()
            .await
            .iter()
            .map(|(name, group)| Student::new(name.clone(), group.clone()))
            .collect()
    }

    async fn insert(&self, student: Student) -> Result<(), RegistryError> {
        let mut guard = self.students.write().await;
        match guard.entry(student.name) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyExists {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(student.group);
                Ok(())
            }
        }
    }

    async fn update_group(&self, name: &str, group: String) -> Result<String, RegistryError> {
        let mut guard = self.students.write().await;
        match guard.get_mut(name) {
            Some(current) => Ok(std::mem::replace(current, group)),
            None => Err(RegistryError::DoesNotExist {
                name: name.to_string(),
            }),
        }
    }

    async fn remove(&self, name: &str) -> Result<Student, RegistryError> {
        self.students
            .write()
            .await
            .remove_entry(name)
            .map(|(name, group)| Student { name, group })
            .ok_or_else(|| RegistryError::DoesNotExist {
                name: name.to_string(),
            })
    }
}
