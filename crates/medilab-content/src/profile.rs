//! Laboratory profile: descriptive metadata, contact details, certifications.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LabProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub established: &'static str,
    pub tests_per_year: &'static str,
    pub accuracy_rate: &'static str,
    pub turnaround_time: &'static str,
    pub contact: ContactDetails,
    pub certifications: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub emergency: &'static str,
    pub hours: BusinessHours,
}

/// Opening hours by day group.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessHours {
    pub weekdays: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
}

pub fn lab_profile() -> LabProfile {
    LabProfile {
        name: "MediLab Pro",
        tagline: "Advanced Medical Diagnostics & Laboratory Services",
        description: "Leading medical laboratory providing comprehensive diagnostic \
                      services with state-of-the-art technology and expert analysis.",
        established: "1985",
        tests_per_year: "500,000+",
        accuracy_rate: "99.8%",
        turnaround_time: "24-48 hours",
        contact: ContactDetails {
            address: "123 Medical Center Drive, Healthcare District, City 12345",
            phone: "+1 (555) 123-4567",
            email: "info@medilabpro.com",
            emergency: "+1 (555) 123-4568",
            hours: BusinessHours {
                weekdays: "6:00 AM - 10:00 PM",
                saturday: "7:00 AM - 8:00 PM",
                sunday: "8:00 AM - 6:00 PM",
            },
        },
        certifications: vec![
            "CAP Accredited",
            "CLIA Certified",
            "ISO 15189:2012",
            "Joint Commission Approved",
        ],
    }
}
