//! Diagnostic service catalog and the contact-form service enumeration.

use serde::{Deserialize, Serialize};

/// One diagnostic service line. `id` doubles as the URL path segment under
/// `/services/` and must stay stable.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tests: Vec<&'static str>,
}

/// Closed set of categories a contact submission may select: the six catalog
/// ids plus the two inquiry kinds that have no detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    General,
    ClinicalChemistry,
    MolecularDiagnostics,
    Microbiology,
    Hematology,
    Immunology,
    Pathology,
    Urgent,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::General,
        ServiceCategory::ClinicalChemistry,
        ServiceCategory::MolecularDiagnostics,
        ServiceCategory::Microbiology,
        ServiceCategory::Hematology,
        ServiceCategory::Immunology,
        ServiceCategory::Pathology,
        ServiceCategory::Urgent,
    ];

    /// Stable machine identifier, identical to the catalog id where one exists.
    pub fn slug(self) -> &'static str {
        match self {
            ServiceCategory::General => "general",
            ServiceCategory::ClinicalChemistry => "clinical-chemistry",
            ServiceCategory::MolecularDiagnostics => "molecular-diagnostics",
            ServiceCategory::Microbiology => "microbiology",
            ServiceCategory::Hematology => "hematology",
            ServiceCategory::Immunology => "immunology",
            ServiceCategory::Pathology => "pathology",
            ServiceCategory::Urgent => "urgent",
        }
    }

    /// Human label shown in the form's select element.
    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::General => "General Inquiry",
            ServiceCategory::ClinicalChemistry => "Clinical Chemistry",
            ServiceCategory::MolecularDiagnostics => "Molecular Diagnostics",
            ServiceCategory::Microbiology => "Microbiology",
            ServiceCategory::Hematology => "Hematology",
            ServiceCategory::Immunology => "Immunology",
            ServiceCategory::Pathology => "Pathology",
            ServiceCategory::Urgent => "Urgent Test Request",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

pub fn catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            id: "clinical-chemistry",
            name: "Clinical Chemistry",
            description: "Comprehensive metabolic panels, lipid profiles, cardiac \
                          markers, and therapeutic drug monitoring.",
            icon: "🧪",
            tests: vec![
                "Basic Metabolic Panel",
                "Lipid Profile",
                "Liver Function Tests",
                "Cardiac Markers",
            ],
        },
        ServiceOffering {
            id: "molecular-diagnostics",
            name: "Molecular Diagnostics",
            description: "DNA/RNA analysis, genetic testing, infectious disease \
                          detection, and personalized medicine.",
            icon: "🧬",
            tests: vec![
                "PCR Testing",
                "Genetic Sequencing",
                "Viral Load Testing",
                "Pharmacogenomics",
            ],
        },
        ServiceOffering {
            id: "microbiology",
            name: "Microbiology",
            description: "Bacterial, viral, and fungal identification with \
                          antimicrobial susceptibility testing.",
            icon: "🦠",
            tests: vec![
                "Culture & Sensitivity",
                "Rapid Strep",
                "UTI Testing",
                "Blood Cultures",
            ],
        },
        ServiceOffering {
            id: "hematology",
            name: "Hematology",
            description: "Complete blood counts, coagulation studies, and blood \
                          disorder diagnostics.",
            icon: "🩸",
            tests: vec![
                "CBC with Differential",
                "PT/INR",
                "ESR",
                "Hemoglobin Electrophoresis",
            ],
        },
        ServiceOffering {
            id: "immunology",
            name: "Immunology",
            description: "Autoimmune testing, allergy panels, and immune system \
                          function assessment.",
            icon: "🛡️",
            tests: vec![
                "Autoimmune Panels",
                "Allergy Testing",
                "Rheumatoid Factor",
                "Complement Studies",
            ],
        },
        ServiceOffering {
            id: "pathology",
            name: "Pathology",
            description: "Tissue analysis, cytology, and anatomical pathology \
                          services.",
            icon: "🔬",
            tests: vec![
                "Biopsy Analysis",
                "Pap Smears",
                "Fine Needle Aspiration",
                "Surgical Pathology",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_from_slug_rejects_unknown() {
        assert_eq!(ServiceCategory::from_slug("radiology"), None);
        assert_eq!(ServiceCategory::from_slug(""), None);
        assert_eq!(ServiceCategory::from_slug("Hematology"), None);
    }

    #[test]
    fn test_serde_slugs_match() {
        for category in ServiceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }
}
