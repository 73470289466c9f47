use capturequeue_core::{ExperimentId, Species};

/// Static experiment-to-species lookup. The controller does not store the
/// species; the shell attaches it to replace-queue payloads.
const SPECIES_TABLE: &[(ExperimentId, &str)] = &[
    (1, "Oreochromis niloticus"),
    (2, "Danio rerio"),
    (3, "Oryzias latipes"),
];

pub fn species_for(xp_id: ExperimentId) -> Species {
    SPECIES_TABLE
        .iter()
        .find(|(id, _)| *id == xp_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
