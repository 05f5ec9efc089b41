//! The parameterized complete-group function and the two-pass run driver.

use tracing::{debug, warn};

use vrec_model::{
    ActionLabel, CatalogStats, ColumnConfig, GroupRecord, GroupResult, GroupStatus, Group,
    LabeledRow, OverrideLookup, Result, Row, RowAction, RunReport,
};

use crate::combos::{COMBINATION_LIMIT, cartesian};
use crate::consistency::{category_conflicts, row_has_conflict};
use crate::dimensions::{DimensionOutcome, extract};
use crate::gaps::{build_hits, find_missing};
use crate::group::group_rows;
use crate::partition::final_pass;
use crate::stats::MissingValueCounter;
use crate::synthesize::synthesize_row;

/// Original plus synthesized rows for one group, with its result record.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    pub rows: Vec<LabeledRow>,
    pub result: GroupResult,
}

/// Tunables for a reconciliation run.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// How many top missing values to retain in the catalog stats.
    pub top_n: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// Progress notification emitted after each group completes.
#[derive(Debug, Clone, Copy)]
pub struct GroupProgress<'a> {
    pub index: usize,
    pub total: usize,
    pub identifier: &'a str,
}

/// Reconcile one group (or one partition): extract dimensions, generate the
/// combination space, diff it against existing rows, and synthesize what is
/// missing.
///
/// `override_key` is the key overrides are looked up under. In the first
/// pass it equals the group's own key; in the final pass partitions pass the
/// parent group's key, keeping operator overrides addressed by the original
/// identifier even after category splitting.
///
/// Per-group failures never escape: a breached combination limit or a static
/// last dimension passes the rows through with an error label.
pub fn complete_group(
    group: &Group,
    override_key: &str,
    config: &ColumnConfig,
    overrides: &dyn OverrideLookup,
) -> GroupOutcome {
    let dims = match extract(group, &config.options) {
        DimensionOutcome::StaticOption(dims) => {
            debug!(group = %group.identifier, "static last option column");
            return pass_through(group, dims, GroupStatus::StaticOption, RowAction::StaticOption);
        }
        DimensionOutcome::NoOptions(dims) => {
            debug!(group = %group.identifier, "no option values detected");
            return pass_through(group, dims, GroupStatus::Skipped, RowAction::Skipped);
        }
        DimensionOutcome::Ready(dims) => dims,
    };

    let combinations = match cartesian(&group.key, &dims) {
        Ok(combinations) => combinations,
        Err(error) => {
            warn!(group = %group.identifier, %error, "combination limit exceeded");
            return pass_through(
                group,
                dims,
                GroupStatus::TooManyCombinations,
                RowAction::TooManyCombos,
            );
        }
    };

    let hits = build_hits(group, &config.options);
    let missing = find_missing(&combinations, &hits);

    if missing.is_empty() {
        debug!(group = %group.identifier, combinations = combinations.len(), "balanced");
        return pass_through(group, dims, GroupStatus::Balanced, RowAction::Balanced);
    }

    let mut rows: Vec<LabeledRow> = group
        .rows
        .iter()
        .map(|row| LabeledRow {
            cells: row.clone(),
            label: ActionLabel::new(RowAction::ExistingWithGaps),
        })
        .collect();
    // Groups are never empty, so the template row always exists.
    if let Some(template) = group.template_row() {
        for combination in &missing {
            let manual = overrides.get(override_key, &combination.key);
            rows.push(LabeledRow {
                cells: synthesize_row(template, combination, config, &group.identifier, manual),
                label: ActionLabel::new(RowAction::Added),
            });
        }
    }
    debug!(
        group = %group.identifier,
        missing = missing.len(),
        combinations = combinations.len(),
        "synthesized missing variants"
    );

    GroupOutcome {
        rows,
        result: GroupResult {
            status: GroupStatus::Unbalanced,
            dimensions: dims,
            missing,
        },
    }
}

fn pass_through(
    group: &Group,
    dimensions: Vec<vrec_model::Dimension>,
    status: GroupStatus,
    action: RowAction,
) -> GroupOutcome {
    GroupOutcome {
        rows: group
            .rows
            .iter()
            .map(|row| LabeledRow {
                cells: row.clone(),
                label: ActionLabel::new(action),
            })
            .collect(),
        result: GroupResult {
            status,
            dimensions,
            missing: Vec::new(),
        },
    }
}

/// Run the full two-pass reconciliation with default options.
pub fn reconcile(
    rows: &[Row],
    config: &ColumnConfig,
    overrides: &dyn OverrideLookup,
) -> Result<RunReport> {
    reconcile_with(rows, config, overrides, &EngineOptions::default(), |_| {})
}

/// Run the full two-pass reconciliation.
///
/// `progress` fires after every completed group so callers can keep a
/// progress indicator responsive; processing itself is synchronous.
///
/// # Errors
///
/// Fails only on invalid configuration, before any processing. Per-group
/// failures are recovered into statuses and never abort the run.
pub fn reconcile_with(
    rows: &[Row],
    config: &ColumnConfig,
    overrides: &dyn OverrideLookup,
    options: &EngineOptions,
    mut progress: impl FnMut(GroupProgress<'_>),
) -> Result<RunReport> {
    config.validate()?;

    let conflicts = category_conflicts(rows, config);
    let groups = group_rows(rows, config.identifier);
    let total = groups.len();

    let mut corrected: Vec<LabeledRow> = Vec::new();
    let mut records: Vec<GroupRecord> = Vec::new();
    let mut statuses: Vec<GroupStatus> = Vec::with_capacity(total);
    let mut counter = MissingValueCounter::new();
    let mut stats = CatalogStats {
        total_groups: total,
        ..CatalogStats::default()
    };

    for (index, group) in groups.iter().enumerate() {
        let outcome = complete_group(group, &group.key, config, overrides);
        let result = &outcome.result;

        match result.status {
            GroupStatus::Balanced => stats.balanced_groups += 1,
            GroupStatus::Unbalanced => stats.unbalanced_groups += 1,
            GroupStatus::Skipped => stats.skipped_groups += 1,
            GroupStatus::StaticOption | GroupStatus::TooManyCombinations => {
                stats.error_groups += 1;
            }
        }
        stats.synthesized_rows += result.missing.len();
        for combination in &result.missing {
            for value in &combination.values {
                counter.record(value);
            }
        }

        records.push(group_record(group, result));
        for mut labeled in outcome.rows {
            let conflict = row_has_conflict(&labeled.cells, config, &conflicts);
            labeled.label = labeled.label.with_conflict(conflict);
            corrected.push(labeled);
        }
        statuses.push(result.status);

        progress(GroupProgress {
            index,
            total,
            identifier: &group.identifier,
        });
    }

    stats.top_missing_values = counter.top(options.top_n);

    let final_rows = final_pass(&groups, &statuses, config, overrides);

    Ok(RunReport {
        corrected,
        groups: records,
        stats,
        final_rows,
    })
}

fn group_record(group: &Group, result: &GroupResult) -> GroupRecord {
    let dimension_sizes: Vec<usize> = result.dimensions.iter().map(|dim| dim.len()).collect();
    let combination_count: usize = dimension_sizes.iter().product();
    let detail = match result.status {
        GroupStatus::Balanced => format!("all {combination_count} combinations present"),
        GroupStatus::Unbalanced => format!(
            "{} of {combination_count} combinations missing",
            result.missing.len()
        ),
        GroupStatus::StaticOption => "last option column has a single distinct value".to_string(),
        GroupStatus::Skipped => "no option values detected".to_string(),
        GroupStatus::TooManyCombinations => {
            format!("combination space exceeds limit of {COMBINATION_LIMIT}")
        }
    };
    GroupRecord {
        identifier: group.identifier.clone(),
        status: result.status,
        dimension_sizes,
        last_dimension_values: result
            .dimensions
            .last()
            .map(|dim| dim.values.iter().map(|value| value.display.clone()).collect())
            .unwrap_or_default(),
        detail,
        row_count: group.rows.len(),
        missing_count: result.missing.len(),
    }
}
