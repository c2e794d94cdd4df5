//! Clinical and operational system catalog
//!
//! Each system groups the citation tags (as normalized codes) that count as
//! regulatory evidence against it. A tag may belong to more than one system.

use serde::Serialize;

/// A clinical or operational system tracked for gap analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClinicalSystem {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub tags: &'static [&'static str],
}

impl ClinicalSystem {
    /// Whether a normalized code such as `F0880` belongs to this system
    pub fn covers(&self, code: &str) -> bool {
        self.tags.iter().any(|tag| *tag == code)
    }

    /// Case-insensitive match against the system id or display name
    pub fn matches_label(&self, label: &str) -> bool {
        let label = label.trim();
        label.eq_ignore_ascii_case(self.id) || label.eq_ignore_ascii_case(self.name)
    }
}

pub const CLINICAL_SYSTEMS: &[ClinicalSystem] = &[
    ClinicalSystem {
        id: "infection_control",
        name: "Infection Control",
        tags: &[
            "F0880", "F0881", "F0882", "F0883", "F0884", "F0885", "F0886", "F0887", "F0888",
            "F0945", "F0334", "F0441",
        ],
    },
    ClinicalSystem {
        id: "falls_accidents",
        name: "Falls & Accidents",
        tags: &["F0689", "F0700", "F0909", "F0323"],
    },
    ClinicalSystem {
        id: "pressure_injuries",
        name: "Pressure Injuries",
        tags: &["F0686", "F0314"],
    },
    ClinicalSystem {
        id: "medication_management",
        name: "Medication Management",
        tags: &[
            "F0554", "F0605", "F0757", "F0758", "F0759", "F0760", "F0176", "F0222", "F0329",
            "F0332", "F0333",
        ],
    },
    ClinicalSystem {
        id: "nutrition_hydration",
        name: "Nutrition & Hydration",
        tags: &[
            "F0692", "F0693", "F0694", "F0800", "F0805", "F0806", "F0807", "F0808", "F0809",
            "F0810", "F0811", "F0325", "F0327", "F0360", "F0363", "F0364", "F0365", "F0366",
            "F0367", "F0368", "F0369", "F0373",
        ],
    },
    ClinicalSystem {
        id: "abuse_neglect",
        name: "Abuse & Neglect",
        tags: &[
            "F0600", "F0602", "F0603", "F0604", "F0606", "F0607", "F0608", "F0609", "F0610",
            "F0943", "F0223", "F0224", "F0225", "F0226",
        ],
    },
    ClinicalSystem {
        id: "care_planning",
        name: "Care Planning",
        tags: &[
            "F0635", "F0636", "F0637", "F0638", "F0641", "F0655", "F0656", "F0657", "F0658",
            "F0659", "F0660", "F0661", "F0272", "F0279", "F0280", "F0281", "F0282", "F0284",
        ],
    },
    ClinicalSystem {
        id: "resident_rights",
        name: "Resident Rights",
        tags: &[
            "F0550", "F0557", "F0558", "F0561", "F0565", "F0578", "F0580", "F0583", "F0584",
            "F0585", "F0151", "F0164", "F0241", "F0242", "F0246",
        ],
    },
    ClinicalSystem {
        id: "behavioral_health",
        name: "Behavioral Health & Dementia",
        tags: &[
            "F0740", "F0741", "F0742", "F0743", "F0744", "F0745", "F0949", "F0319", "F0320",
        ],
    },
    ClinicalSystem {
        id: "quality_of_care",
        name: "Quality of Care",
        tags: &[
            "F0676", "F0677", "F0684", "F0685", "F0687", "F0688", "F0690", "F0691", "F0695",
            "F0697", "F0698", "F0699", "F0309", "F0310", "F0311", "F0312", "F0315", "F0317",
            "F0318", "F0328",
        ],
    },
    ClinicalSystem {
        id: "food_safety",
        name: "Food Safety",
        tags: &["F0801", "F0802", "F0812", "F0813", "F0814", "F0371", "F0372"],
    },
    ClinicalSystem {
        id: "emergency_preparedness",
        name: "Emergency Preparedness",
        tags: &[
            "E0001", "E0004", "E0006", "E0013", "E0015", "E0018", "E0020", "E0022", "E0029",
            "E0036", "E0037", "E0039", "E0041",
        ],
    },
    ClinicalSystem {
        id: "life_safety",
        name: "Life Safety",
        tags: &[
            "F0906", "F0908", "F0919", "F0921", "K0211", "K0222", "K0291", "K0321", "K0325",
            "K0345", "K0353", "K0355", "K0363", "K0712", "K0741", "K0918", "K0920", "K0923",
            "F0454", "F0455", "K0018", "K0029", "K0038", "K0050", "K0052", "K0056", "K0062",
            "K0144",
        ],
    },
    ClinicalSystem {
        id: "administration_qapi",
        name: "Administration & QAPI",
        tags: &[
            "F0835", "F0836", "F0837", "F0838", "F0841", "F0842", "F0851", "F0865", "F0867",
            "F0868", "F0895", "F0490", "F0492", "F0493", "F0501", "F0514", "F0520",
        ],
    },
    ClinicalSystem {
        id: "pharmacy_services",
        name: "Pharmacy Services",
        tags: &["F0755", "F0756", "F0761", "F0425", "F0428", "F0431"],
    },
];

/// Look up a catalog system by id or display name
pub fn find_system(label: &str) -> Option<&'static ClinicalSystem> {
    CLINICAL_SYSTEMS.iter().find(|s| s.matches_label(label))
}
