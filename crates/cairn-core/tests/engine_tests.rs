mod common;

use cairn_core::{
    parser, CanonicalDate, Plan, PlanTextSource, StaticTextSource, TaskStatus,
};
use common::{create_test_engine, fixed_base, SAMPLE_RESPONSE};

fn offsets(plan: &Plan) -> Vec<i64> {
    let base = CanonicalDate::from(plan.created_at);
    plan.milestones
        .iter()
        .map(|m| base.days_between(&m.target_date).unwrap())
        .collect()
}

#[test]
fn test_complete_assembly_workflow() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);

    assert_eq!(plan.timeframe_days, 7);
    assert_eq!(plan.title, "7-Day Plan: in 7 days learn to draw");
    assert_eq!(plan.original_intent, "in 7 days learn to draw");

    // Ranges schedule to the end of their windows.
    assert_eq!(offsets(&plan), vec![1, 4, 6, 7]);

    // Tags arrive normalized to the product count.
    assert_eq!(plan.tags, vec!["drawing", "practice"]);

    // Nothing is completed on a fresh plan.
    for milestone in &plan.milestones {
        assert!(!milestone.is_completed);
        assert!(milestone.completed_date.is_absent());
    }
}

#[test]
fn test_milestone_ordering_is_non_decreasing() {
    let engine = create_test_engine();
    let inputs = [
        SAMPLE_RESPONSE,
        "Milestone 1 (day 9): Z\nMilestone 2 (day 1): A\nMilestone 3 (day abc): M",
        "Milestone 1: no range at all\nMilestone 2 (day 2): ranged",
        "garbage with no structure",
    ];

    for raw in inputs {
        let plan = engine.assemble_plan("in 9 days do the thing", raw);
        let days = offsets(&plan);
        assert!(
            days.windows(2).all(|w| w[0] <= w[1]),
            "target dates must be non-decreasing, got {days:?} for {raw:?}"
        );
    }
}

#[test]
fn test_description_round_trip() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);

    let reparsed = parser::parse_response(&plan.description);
    assert_eq!(reparsed.stubs.len(), plan.milestones.len());

    let original: Vec<&str> = plan
        .milestones
        .iter()
        .map(|m| m.day_range.as_str())
        .collect();
    let recovered: Vec<&str> = reparsed
        .stubs
        .iter()
        .map(|s| s.day_range.as_str())
        .collect();
    assert_eq!(recovered, original);
}

#[test]
fn test_unstructured_response_degrades_to_default_plan() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 3 days tidy the garage", "ERROR 503 upstream timeout");

    // Short horizon: one milestone per day, dated base+1..base+3.
    assert_eq!(plan.milestones.len(), 3);
    assert_eq!(offsets(&plan), vec![1, 2, 3]);
    assert_eq!(plan.tags.len(), 2);
    assert!(!plan.description.is_empty());
}

#[test]
fn test_plan_survives_persistence_round_trip() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);

    let json = serde_json::to_string(&plan).unwrap();
    let restored: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);
}

#[test]
fn test_plan_loads_from_store_shaped_record() {
    // A record written by other tooling: timestamp-record dates and a
    // missing completed_date field.
    let record = serde_json::json!({
        "title": "7-Day Plan: learn to draw",
        "description": "Overview: x\n\nMilestones:\nMilestone 1 (day 1): y\n\nTags: #a #b",
        "tags": ["a", "b"],
        "milestones": [{
            "id": "7f2c1b9e-43da-4b2e-9f10-0f2cbb8a1f6d",
            "title": "y",
            "description": "y",
            "target_date": { "seconds": 1641081600, "nanoseconds": 0 },
            "is_completed": false,
            "day_range": "day 1"
        }],
        "original_intent": "learn to draw",
        "timeframe_days": 7,
        "created_at": "2022-01-01T00:00:00Z"
    });

    let plan: Plan = serde_json::from_value(record).unwrap();
    assert_eq!(plan.milestones.len(), 1);
    assert!(plan.milestones[0].target_date.is_present());
    assert!(plan.milestones[0].completed_date.is_absent());
    assert_eq!(
        fixed_base().days_between(&plan.milestones[0].target_date),
        Some(1)
    );
}

#[tokio::test]
async fn test_generate_plan_with_ordered_fallback() {
    struct Failing;

    #[async_trait::async_trait]
    impl PlanTextSource for Failing {
        fn name(&self) -> &str {
            "primary"
        }
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            anyhow::bail!("rate limited")
        }
    }

    let sources: Vec<Box<dyn PlanTextSource>> = vec![
        Box::new(Failing),
        Box::new(StaticTextSource::new("secondary", SAMPLE_RESPONSE)),
    ];

    let engine = create_test_engine();
    let plan = engine.generate_plan("in 7 days learn to draw", &sources).await;

    assert_eq!(plan.milestones.len(), 4);
    assert_eq!(plan.tags, vec!["drawing", "practice"]);
}

#[test]
fn test_fresh_plan_reports_not_started() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);

    let view = cairn_core::TaskProgressView::compute(&plan.milestones, 0);
    assert_eq!(view.status, TaskStatus::NotStarted);
    assert_eq!(view.percentage, 0);
    assert_eq!(view.total_count, 4);
}
