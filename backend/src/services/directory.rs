//! Emergency contacts and expert roster

use shared::{emergency_directory, experts, EmergencyDirectory, Expert};

use crate::error::{AppError, AppResult};

/// Read-only access to the static directory
#[derive(Clone, Default)]
pub struct DirectoryService;

impl DirectoryService {
    pub fn new() -> Self {
        Self
    }

    pub fn emergency(&self) -> EmergencyDirectory {
        emergency_directory()
    }

    /// Experts, optionally only those available to connect now
    pub fn experts(&self, available_only: bool) -> Vec<Expert> {
        experts()
            .into_iter()
            .filter(|e| !available_only || e.available)
            .collect()
    }

    pub fn expert(&self, id: &str) -> AppResult<Expert> {
        experts()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Expert {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_filter() {
        let service = DirectoryService::new();
        assert_eq!(service.experts(false).len(), 2);
        let available = service.experts(true);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Dr. Sarah Johnson");
    }

    #[test]
    fn test_expert_lookup() {
        let service = DirectoryService::new();
        assert_eq!(service.expert("2").unwrap().specialization, "Soil Science");
        assert!(matches!(service.expert("99"), Err(AppError::NotFound(_))));
    }
}
