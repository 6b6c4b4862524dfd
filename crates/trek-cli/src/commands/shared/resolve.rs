use anyhow::bail;
use trek_engine::{
    Conflict, OverlapDecision, OverlapResolution, Outcome, RecordChange, WarningDecision,
};

use crate::cli::root_commands::ConfirmArgs;

/// What to do with a validated draft once the command-line answers are in.
#[derive(Debug)]
pub enum Resolution {
    Save {
        change: RecordChange,
        warnings: Vec<String>,
        conflicts: Vec<Conflict>,
    },
    Cancelled {
        reason: String,
        warnings: Vec<String>,
        conflicts: Vec<Conflict>,
    },
}

/// Answer the questions a validation outcome asks using `--on-overlap` and
/// `--yes`. Rejections become an error listing every message.
pub fn resolve(outcome: Outcome, confirm: &ConfirmArgs) -> anyhow::Result<Resolution> {
    let mut outcome = outcome;
    let mut conflicts = Vec::new();

    loop {
        match outcome {
            Outcome::Rejected(errors) => {
                bail!("trip rejected:\n  - {}", errors.join("\n  - "));
            }
            Outcome::Accepted(change) => {
                return Ok(Resolution::Save {
                    change,
                    warnings: Vec::new(),
                    conflicts,
                });
            }
            Outcome::NeedsOverlapDecision(pending) => {
                conflicts.clone_from(&pending.conflicts);
                for conflict in &conflicts {
                    tracing::warn!(
                        trip = conflict.index + 1,
                        location = %conflict.record.location,
                        "overlaps an existing trip"
                    );
                }

                let decision = confirm
                    .on_overlap
                    .map_or(OverlapDecision::Cancel, OverlapDecision::from);
                match pending.resolve(decision) {
                    OverlapResolution::Cancelled => {
                        return Ok(Resolution::Cancelled {
                            reason: String::from(
                                "trip overlaps existing trips; pass --on-overlap save-anyway to keep it",
                            ),
                            warnings: Vec::new(),
                            conflicts,
                        });
                    }
                    OverlapResolution::AdjustDates => {
                        let numbers = conflicts
                            .iter()
                            .map(|conflict| format!("#{}", conflict.index + 1))
                            .collect::<Vec<_>>()
                            .join(", ");
                        bail!("trip overlaps {numbers}; adjust --start/--end and try again");
                    }
                    OverlapResolution::Continue(next) => outcome = next,
                }
            }
            Outcome::NeedsWarningConfirmation(pending) => {
                let warnings = pending.warnings.clone();
                for warning in &warnings {
                    tracing::warn!("{warning}");
                }

                let decision = if confirm.yes {
                    WarningDecision::Proceed
                } else {
                    WarningDecision::Cancel
                };
                return Ok(match pending.confirm(decision) {
                    Some(change) => Resolution::Save {
                        change,
                        warnings,
                        conflicts,
                    },
                    None => Resolution::Cancelled {
                        reason: String::from("warnings were not confirmed; pass --yes to save"),
                        warnings,
                        conflicts,
                    },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trek_core::entities::{TravelRecord, TripDraft};
    use trek_core::enums::TravelType;
    use trek_core::settings::ValidationSettings;
    use trek_engine::validate;

    use super::*;
    use crate::cli::root_commands::OverlapChoice;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn stored() -> Vec<TravelRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        vec![TravelRecord::new(start, end, "Ljubljana", TravelType::Work, "")]
    }

    fn outcome(location: &str, start: &str) -> Outcome {
        let draft = TripDraft {
            start_date: start.into(),
            end_date: "2024-06-11".into(),
            location: location.into(),
            travel_type: "Personal".into(),
            comment: String::new(),
        };
        validate(&draft, &stored(), &ValidationSettings::default(), None, today())
    }

    fn confirm(on_overlap: Option<OverlapChoice>, yes: bool) -> ConfirmArgs {
        ConfirmArgs { on_overlap, yes }
    }

    #[test]
    fn overlap_cancels_by_default() {
        let resolution = resolve(outcome("Zagreb", "2024-06-11"), &confirm(None, false)).unwrap();
        let Resolution::Cancelled { conflicts, .. } = resolution else {
            panic!("expected cancellation");
        };
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn adjust_is_an_error_naming_the_trip() {
        let err = resolve(
            outcome("Zagreb", "2024-06-11"),
            &confirm(Some(OverlapChoice::Adjust), false),
        )
        .unwrap_err();
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn save_anyway_then_warnings_need_yes() {
        let choice = Some(OverlapChoice::SaveAnyway);
        let cancelled = resolve(outcome("ZAGREB", "2024-06-11"), &confirm(choice, false)).unwrap();
        assert!(matches!(cancelled, Resolution::Cancelled { .. }));

        let saved = resolve(outcome("ZAGREB", "2024-06-11"), &confirm(choice, true)).unwrap();
        let Resolution::Save { warnings, conflicts, .. } = saved else {
            panic!("expected save");
        };
        assert_eq!(warnings.len(), 1);
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn rejection_lists_every_message() {
        let err = resolve(outcome("", "bogus"), &confirm(None, true)).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Start date:"));
        assert!(text.contains("Location cannot be empty"));
    }
}
