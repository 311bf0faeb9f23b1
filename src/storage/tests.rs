//! Tests for storage module

#[cfg(test)]
mod tests {
    use super::super::AnalysisStore;
    use crate::analysis::ImpactAnalyzer;
    use crate::types::{Country, EventType, ImpactReport, PoliticalEvent};
    use chrono::{Duration, TimeZone, Utc};

    fn make_report(description: &str, minutes: i64) -> ImpactReport {
        let event = PoliticalEvent::new(description, Country::Germany, EventType::FiscalPolicy);
        let mut report = ImpactAnalyzer::default().simulate(&event).unwrap();
        report.created_at =
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        report
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let store = AnalysisStore::in_memory().await.unwrap();
        let report = make_report("Bundestag passes stimulus package", 0);

        store.save(&report).await.unwrap();
        let loaded = store.get(&report.id).await.unwrap().unwrap();

        assert_eq!(loaded, report);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_floats_survive_storage_exactly() {
        let store = AnalysisStore::in_memory().await.unwrap();
        let mut report = make_report("Coalition agrees on spending cuts", 0);
        report.sector_impacts[0].impact = -0.3999471352502929;
        report.context.market_precedent = 0.10673022387654668;

        store.save(&report).await.unwrap();
        let loaded = store.get(&report.id).await.unwrap().unwrap();

        assert_eq!(loaded.sector_impacts[0].impact.to_bits(), (-0.3999471352502929f64).to_bits());
        assert_eq!(
            loaded.context.market_precedent.to_bits(),
            0.10673022387654668f64.to_bits()
        );
        assert_eq!(loaded.impact_score.to_bits(), report.impact_score.to_bits());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = AnalysisStore::in_memory().await.unwrap();
        assert!(store.get("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let store = AnalysisStore::in_memory().await.unwrap();
        let older = make_report("Budget deficit widens", 0);
        let newer = make_report("Debt ceiling deal reached", 30);
        let newest = make_report("Emergency spending bill approved", 60);

        store.save(&newer).await.unwrap();
        store.save(&older).await.unwrap();
        store.save(&newest).await.unwrap();

        let recent = store.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newest.id);
        assert_eq!(recent[1].id, newer.id);
    }

    #[tokio::test]
    async fn test_save_is_idempotent_per_id() {
        let store = AnalysisStore::in_memory().await.unwrap();
        let mut report = make_report("Tax reform announced", 0);

        store.save(&report).await.unwrap();
        report.narrative = "Revised assessment".to_string();
        store.save(&report).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let loaded = store.get(&report.id).await.unwrap().unwrap();
        assert_eq!(loaded.narrative, "Revised assessment");
    }

    #[tokio::test]
    async fn test_file_backed_store() {
        let dir = std::env::temp_dir().join(format!("sentiment-edge-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("analyses.db");

        let report = make_report("Snap election called", 0);
        {
            let store = AnalysisStore::connect(&path).await.unwrap();
            store.save(&report).await.unwrap();
            store.close().await;
        }

        let reopened = AnalysisStore::connect(&path).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
        assert_eq!(reopened.get(&report.id).await.unwrap().unwrap().id, report.id);

        let _ = std::fs::remove_dir_all(dir);
    }
}
