/// Closed vocabulary for the Work Type of a newly registered task.
///
/// The stored record keeps Work Type as a plain string: imported rows may
/// carry values outside this list, or none at all, and substring filters
/// must skip those rows rather than fail. This enum only validates input
/// coming from the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    InstallationCheck,
    PunchList,
    TestRun,
    RoutineInspection,
}

impl WorkType {
    /// Accepts either the full label or a short alias (useful on the CLI).
    pub fn wt_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "installation check" | "installation" | "install" => Some(Self::InstallationCheck),
            "punch list (defect)" | "punch list" | "punch" => Some(Self::PunchList),
            "test run / commissioning" | "test run" | "test" => Some(Self::TestRun),
            "routine inspection" | "routine" | "inspection" => Some(Self::RoutineInspection),
            _ => None,
        }
    }

    pub fn wt_as_str(&self) -> &'static str {
        match self {
            WorkType::InstallationCheck => "Installation Check",
            WorkType::PunchList => "Punch List (Defect)",
            WorkType::TestRun => "Test Run / Commissioning",
            WorkType::RoutineInspection => "Routine Inspection",
        }
    }

    pub const ALL: [WorkType; 4] = [
        WorkType::InstallationCheck,
        WorkType::PunchList,
        WorkType::TestRun,
        WorkType::RoutineInspection,
    ];
}
