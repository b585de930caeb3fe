//! Owner dashboard analytics
//!
//! Totals are exact; the daily trend series are mock data scaled to the
//! totals, since no per-day history is recorded.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Enquiry, Space};

/// Days covered by the trend charts
pub const TREND_DAYS: usize = 7;

/// Which listings the dashboard is summarising
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Space(String),
}

impl Selection {
    fn includes_space(&self, space_id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Space(id) => id == space_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub listings: usize,
    pub total_views: u64,
    pub total_enquiries: usize,
    /// Enquiries per hundred views, one decimal place
    pub conversion_rate: f64,
}

impl DashboardStats {
    pub fn compute(listings: &[Space], enquiries: &[Enquiry], selection: &Selection) -> Self {
        let selected: Vec<&Space> = listings
            .iter()
            .filter(|s| selection.includes_space(&s.id))
            .collect();

        let total_views: u64 = selected.iter().map(|s| s.views()).sum();
        let total_enquiries = enquiries
            .iter()
            .filter(|e| selection.includes_space(&e.space_id))
            .count();

        Self {
            listings: selected.len(),
            total_views,
            total_enquiries,
            conversion_rate: conversion_rate(total_enquiries, total_views),
        }
    }

    /// Mock daily views series; a zero total is charted as 100
    pub fn views_trend<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u64> {
        let total = if self.total_views == 0 { 100 } else { self.total_views };
        trend(total, TREND_DAYS, rng)
    }

    /// Mock daily enquiries series; a zero total is charted as 10
    pub fn enquiries_trend<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u64> {
        let total = match self.total_enquiries {
            0 => 10,
            n => n as u64,
        };
        trend(total, TREND_DAYS, rng)
    }
}

/// `enquiries / views * 100`, rounded to one decimal; zero without views
pub fn conversion_rate(enquiries: usize, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    let rate = enquiries as f64 / views as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// `days` values, each `floor(total / days * (0.5 + r))` for uniform
/// `r` in `[0, 1)`
pub fn trend<R: Rng + ?Sized>(total: u64, days: usize, rng: &mut R) -> Vec<u64> {
    if days == 0 {
        return Vec::new();
    }

    let per_day = total as f64 / days as f64;
    (0..days)
        .map(|_| (per_day * (0.5 + rng.gen::<f64>())).floor() as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn enquiry_for(space: &Space) -> Enquiry {
        Enquiry::new(
            space,
            "Ira".into(),
            "9000000001".into(),
            "ira@example.com".into(),
            "Hi".into(),
        )
    }

    #[test]
    fn test_totals_for_all() {
        let spaces = seed::spaces();
        let enquiries = vec![enquiry_for(&spaces[0]), enquiry_for(&spaces[4])];

        let stats = DashboardStats::compute(&spaces[..], &enquiries, &Selection::All);
        assert_eq!(stats.listings, 5);
        assert_eq!(stats.total_views, 1245 + 3420 + 890 + 1560 + 450);
        assert_eq!(stats.total_enquiries, 2);
        assert_eq!(stats.conversion_rate, 0.0);
    }

    #[test]
    fn test_single_space_selection() {
        let spaces = seed::spaces();
        let enquiries = vec![
            enquiry_for(&spaces[4]),
            enquiry_for(&spaces[4]),
            enquiry_for(&spaces[0]),
        ];

        let stats =
            DashboardStats::compute(&spaces, &enquiries, &Selection::Space("5".to_string()));
        assert_eq!(stats.listings, 1);
        assert_eq!(stats.total_views, 450);
        assert_eq!(stats.total_enquiries, 2);
        assert_eq!(stats.conversion_rate, 0.4);
    }

    #[test]
    fn test_conversion_rate() {
        assert_eq!(conversion_rate(5, 0), 0.0);
        assert_eq!(conversion_rate(1, 3), 33.3);
        assert_eq!(conversion_rate(3, 4), 75.0);
    }

    #[test]
    fn test_trend_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = trend(700, 7, &mut rng);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|v| (50..150).contains(v)));
        assert!(trend(10, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_totals_use_placeholder_scale() {
        let stats = DashboardStats::compute(&[], &[], &Selection::All);
        let mut rng = StdRng::seed_from_u64(1);

        let views = stats.views_trend(&mut rng);
        assert!(views.iter().all(|v| (7..22).contains(v)));

        let enquiries = stats.enquiries_trend(&mut rng);
        assert!(enquiries.iter().all(|v| *v <= 2));
    }
}
