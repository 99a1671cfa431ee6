//! Forward net-worth simulation under a fixed annual return.

use tracing::warn;

use crate::models::{PlannerSettings, ProjectionPoint};

/// Age bounds for the simulation. Contributions stop at `cutoff`; the
/// series runs from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionAges {
    pub start: u32,
    pub end: u32,
    pub cutoff: u32,
}

impl Default for ProjectionAges {
    fn default() -> Self {
        Self {
            start: 30,
            end: 90,
            cutoff: 65,
        }
    }
}

impl From<&PlannerSettings> for ProjectionAges {
    fn from(settings: &PlannerSettings) -> Self {
        Self {
            start: settings.projection_start_age,
            end: settings.projection_end_age,
            cutoff: settings.contribution_cutoff_age,
        }
    }
}

/// Advance a starting net worth year by year.
///
/// Each point records the worth entering that age; the next year's worth is
/// `(worth + contribution) * (1 + rate)`, where the contribution is the
/// annual savings before the cutoff age and zero after. Negative savings
/// pass through unmodified and compound the shrinkage.
pub fn project(
    start_net_worth: f64,
    annual_savings: f64,
    annual_return_rate: f64,
    ages: &ProjectionAges,
) -> Vec<ProjectionPoint> {
    if ages.end < ages.start {
        warn!(
            start = ages.start,
            end = ages.end,
            "projection end age precedes start age"
        );
        return Vec::new();
    }

    let mut points = Vec::with_capacity((ages.end - ages.start + 1) as usize);
    let mut worth = start_net_worth;
    for age in ages.start..=ages.end {
        points.push(ProjectionPoint {
            age,
            net_worth: worth,
        });
        let contribution = if age < ages.cutoff { annual_savings } else { 0.0 };
        worth = (worth + contribution) * (1.0 + annual_return_rate);
    }
    points
}

/// Reduce a projection series for chart display (max_points cap), keeping
/// the first, last, minimum, and maximum points so the shape survives.
pub fn decimate_for_display(points: &[ProjectionPoint], max_points: usize) -> Vec<ProjectionPoint> {
    if points.len() <= max_points || max_points == 0 {
        return points.to_vec();
    }

    let (min_idx, max_idx) = points
        .iter()
        .enumerate()
        .fold((0, 0), |(min_i, max_i), (i, p)| {
            let new_min = if p.net_worth < points[min_i].net_worth {
                i
            } else {
                min_i
            };
            let new_max = if p.net_worth > points[max_i].net_worth {
                i
            } else {
                max_i
            };
            (new_min, new_max)
        });

    let step = points.len() / max_points;
    let mut result: Vec<ProjectionPoint> = Vec::with_capacity(max_points + 4);

    for (i, point) in points.iter().enumerate() {
        let keep = i % step == 0
            || i == 0
            || i == points.len() - 1
            || i == min_idx
            || i == max_idx;
        if keep {
            result.push(*point);
        }
    }

    result.sort_by_key(|p| p.age);
    result.dedup_by_key(|p| p.age);
    result
}
