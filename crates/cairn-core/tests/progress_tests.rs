mod common;

use cairn_core::{progress, PlanError, TaskStatus};
use common::{create_test_engine, SAMPLE_RESPONSE};
use uuid::Uuid;

#[test]
fn test_complete_progress_workflow() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);
    let ids: Vec<Uuid> = plan.milestones.iter().map(|m| m.id).collect();

    // Complete the first milestone.
    let snapshot = progress::toggle(&plan.milestones, ids[0], true).unwrap();
    assert_eq!(snapshot.status, TaskStatus::InProgress);
    assert_eq!(snapshot.progress, 25);
    assert!(snapshot.completed_at.is_absent());

    let first = snapshot
        .milestones
        .iter()
        .find(|m| m.id == ids[0])
        .unwrap();
    assert!(first.is_completed);
    assert!(first.completed_date.is_present());

    // Complete the rest; status flips to completed.
    let snapshot = progress::toggle_many(&snapshot.milestones, &ids[1..], true).unwrap();
    assert_eq!(snapshot.status, TaskStatus::Completed);
    assert_eq!(snapshot.progress, 100);
    assert!(snapshot.completed_at.is_present());

    // Reset everything in one step.
    let reset = progress::reset_all(&snapshot.milestones);
    assert_eq!(reset.status, TaskStatus::NotStarted);
    assert_eq!(reset.progress, 0);
    for milestone in &reset.milestones {
        assert!(!milestone.is_completed);
        assert!(milestone.completed_date.is_absent());
    }
}

#[test]
fn test_toggle_back_removes_completion_field_from_record() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);
    let id = plan.milestones[0].id;

    let completed = progress::toggle(&plan.milestones, id, true).unwrap();
    let record = serde_json::to_value(
        completed.milestones.iter().find(|m| m.id == id).unwrap(),
    )
    .unwrap();
    assert!(record.as_object().unwrap().contains_key("completed_date"));

    let reverted = progress::toggle(&completed.milestones, id, false).unwrap();
    let record = serde_json::to_value(
        reverted.milestones.iter().find(|m| m.id == id).unwrap(),
    )
    .unwrap();
    // Cleared by removing the field, not by writing null.
    assert!(!record.as_object().unwrap().contains_key("completed_date"));
}

#[test]
fn test_batch_toggle_equals_sequential() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);
    let ids: Vec<Uuid> = plan.milestones.iter().take(3).map(|m| m.id).collect();

    let batched = progress::toggle_many(&plan.milestones, &ids, true).unwrap();

    let mut milestones = plan.milestones.clone();
    for id in &ids {
        milestones = progress::toggle(&milestones, *id, true).unwrap().milestones;
    }

    for (a, b) in batched.milestones.iter().zip(milestones.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.is_completed, b.is_completed);
        assert_eq!(a.completed_date.is_present(), b.completed_date.is_present());
    }
}

#[test]
fn test_unknown_id_in_batch_leaves_state_untouched() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);
    let mut ids: Vec<Uuid> = plan.milestones.iter().map(|m| m.id).collect();
    ids.insert(1, Uuid::new_v4());

    let err = progress::toggle_many(&plan.milestones, &ids, true).unwrap_err();
    assert!(matches!(err, PlanError::MilestoneNotFound { .. }));

    // No milestone changed: a fresh snapshot still reports not-started.
    let snapshot = progress::ProgressSnapshot::of(plan.milestones, 0);
    assert_eq!(snapshot.status, TaskStatus::NotStarted);
    assert_eq!(snapshot.progress, 0);
}

#[test]
fn test_completion_invariant_holds_through_arbitrary_toggles() {
    let engine = create_test_engine();
    let plan = engine.assemble_plan("in 7 days learn to draw", SAMPLE_RESPONSE);
    let ids: Vec<Uuid> = plan.milestones.iter().map(|m| m.id).collect();

    let mut milestones = plan.milestones;
    let script = [
        (0usize, true),
        (1, true),
        (0, false),
        (2, true),
        (2, true),
        (1, false),
    ];
    for (index, state) in script {
        milestones = progress::toggle(&milestones, ids[index], state)
            .unwrap()
            .milestones;
        for milestone in &milestones {
            assert_eq!(
                milestone.is_completed,
                milestone.completed_date.is_present(),
                "completion flag and date must agree for {}",
                milestone.id
            );
        }
    }
}
