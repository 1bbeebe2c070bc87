//! Emergency contacts and expert roster

use serde::{Deserialize, Serialize};

/// An agricultural expert farmers can connect with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub available: bool,
    pub image_url: String,
}

/// A phone line for urgent help
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub label: String,
    pub phone: String,
}

/// A non-phone support channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportChannel {
    pub label: String,
    pub description: String,
}

/// Community forum summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityForum {
    pub name: String,
    pub farmers_online: u32,
}

/// Everything shown on the emergency response panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyDirectory {
    pub hotline: EmergencyContact,
    pub chat_support: SupportChannel,
    pub community: CommunityForum,
    pub experts: Vec<Expert>,
}

/// Hand-authored expert roster
pub fn experts() -> Vec<Expert> {
    vec![
        Expert {
            id: "1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            specialization: "Plant Pathology".to_string(),
            available: true,
            image_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330".to_string(),
        },
        Expert {
            id: "2".to_string(),
            name: "Prof. Michael Chen".to_string(),
            specialization: "Soil Science".to_string(),
            available: false,
            image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e".to_string(),
        },
    ]
}

/// Hand-authored emergency directory
pub fn emergency_directory() -> EmergencyDirectory {
    EmergencyDirectory {
        hotline: EmergencyContact {
            label: "Agricultural Emergency Hotline".to_string(),
            phone: "1-800-FARM-HELP".to_string(),
        },
        chat_support: SupportChannel {
            label: "24/7 AI Chatbot Support".to_string(),
            description: "Start a chat for round-the-clock guidance".to_string(),
        },
        community: CommunityForum {
            name: "Community Forum".to_string(),
            farmers_online: 2145,
        },
        experts: experts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expert_ids_unique() {
        let roster = experts();
        let mut ids: Vec<_> = roster.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_directory_contents() {
        let directory = emergency_directory();
        assert_eq!(directory.hotline.phone, "1-800-FARM-HELP");
        assert_eq!(directory.community.farmers_online, 2145);
        assert_eq!(directory.experts.iter().filter(|e| e.available).count(), 1);
    }
}
