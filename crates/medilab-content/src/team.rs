//! Laboratory team roster.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub credentials: &'static str,
    pub experience: &'static str,
    pub specialization: &'static str,
    /// Portrait file under `static/img/`.
    pub image: &'static str,
}

pub fn roster() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Dr. Sarah Johnson",
            title: "Laboratory Director & Clinical Pathologist",
            credentials: "MD, PhD, FCAP",
            experience: "15+ years",
            specialization: "Clinical Pathology & Laboratory Management",
            image: "team-1.jpg",
        },
        TeamMember {
            name: "Dr. Michael Chen",
            title: "Chief Medical Technologist",
            credentials: "PhD, MT(ASCP)",
            experience: "12+ years",
            specialization: "Molecular Diagnostics & Genetics",
            image: "team-2.jpg",
        },
        TeamMember {
            name: "Dr. Emily Rodriguez",
            title: "Microbiology Supervisor",
            credentials: "PhD, SM(ASCP)",
            experience: "10+ years",
            specialization: "Clinical Microbiology & Infectious Diseases",
            image: "team-3.jpg",
        },
        TeamMember {
            name: "Dr. David Park",
            title: "Hematology Specialist",
            credentials: "MD, Hematopathologist",
            experience: "8+ years",
            specialization: "Hematology & Coagulation",
            image: "team-4.jpg",
        },
    ]
}
