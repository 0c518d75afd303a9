use serde::{Deserialize, Serialize};

/// The documents the register can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Motion for the owners' meeting covering priority 1 and 2 items with estimates.
    CouncilResolution,
    /// Multi-year maintenance roadmap ordered by deadline.
    MaintenancePlan,
    /// Current risk posture for renegotiating the building insurance policy.
    InsuranceAudit,
    /// Documentation and compliance state handed to an incoming administrator.
    HandoverChecklist,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        Self::CouncilResolution,
        Self::MaintenancePlan,
        Self::InsuranceAudit,
        Self::HandoverChecklist,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::CouncilResolution => "Council Resolution Proposal",
            Self::MaintenancePlan => "Three-Year Maintenance Plan",
            Self::InsuranceAudit => "Insurance Audit Report",
            Self::HandoverChecklist => "Handover Checklist",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CouncilResolution => {
                "Pre-filled proposal listing priority 1 and 2 issues with their estimated costs."
            }
            Self::MaintenancePlan => {
                "Roadmap of interventions by deadline, with the expected cash flow."
            }
            Self::InsuranceAudit => {
                "State of known risks for renegotiating the building insurance policy."
            }
            Self::HandoverChecklist => {
                "Documentation and compliance state protecting the outgoing administrator."
            }
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
