use serde::{Deserialize, Serialize};

/// Service lines offered by the garage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceType {
    Diagnostics,
    Repairs,
    Maintenance,
}

impl ServiceType {
    /// Form value of the service
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::Diagnostics => "diagnostics",
            ServiceType::Repairs => "repairs",
            ServiceType::Maintenance => "maintenance",
        }
    }

    /// Translation key of the display name
    pub fn label_key(&self) -> &'static str {
        match self {
            ServiceType::Diagnostics => "serviceDiagnostics",
            ServiceType::Repairs => "serviceRepairs",
            ServiceType::Maintenance => "serviceMaintenance",
        }
    }

    /// Translation key of the marketing blurb shown on the home page
    pub fn blurb_key(&self) -> &'static str {
        match self {
            ServiceType::Diagnostics => "serviceDiagnosticsText",
            ServiceType::Repairs => "serviceRepairsText",
            ServiceType::Maintenance => "serviceMaintenanceText",
        }
    }

    /// Image shown on the service card
    pub fn image_path(&self) -> &'static str {
        match self {
            ServiceType::Diagnostics => "/services/diagnostics.jpg",
            ServiceType::Repairs => "/services/repair.jpg",
            ServiceType::Maintenance => "/services/maintenance.jpg",
        }
    }

    pub fn all() -> [ServiceType; 3] {
        [
            ServiceType::Diagnostics,
            ServiceType::Repairs,
            ServiceType::Maintenance,
        ]
    }

    /// Parse from the form value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "diagnostics" => Some(ServiceType::Diagnostics),
            "repairs" => Some(ServiceType::Repairs),
            "maintenance" => Some(ServiceType::Maintenance),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for service in ServiceType::all() {
            assert_eq!(ServiceType::from_code(service.code()), Some(service));
        }
        assert_eq!(ServiceType::from_code(""), None);
    }
}
