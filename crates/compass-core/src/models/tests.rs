#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{
        CheckStatus, CheckType, ChecklistItem, ImplementationTask, Intent, IntentStatus, Plan,
        PlanStatus, PlanStep, Priority, StepAction, StepStatus, TaskBreakdown, TaskProgress,
        TaskStatus, TaskType, VerificationChecklist,
    };

    fn create_test_intent() -> Intent {
        let mut intent = Intent::new("Add login");
        intent.scope = vec!["src/auth.rs".to_string()];
        intent
    }

    fn create_test_plan(step_count: u32) -> Plan {
        Plan {
            id: "p1".to_string(),
            intent_id: "i1".to_string(),
            summary: "Implementation plan for: Add login".to_string(),
            steps: (1..=step_count)
                .map(|n| PlanStep::new(n, StepAction::Modify, format!("Step {n}")))
                .collect(),
            affected_files: vec![],
            risks: vec![],
            dependencies: vec![],
            status: PlanStatus::Ready,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    fn create_test_task(id: &str, status: TaskStatus, depends_on: &[&str]) -> ImplementationTask {
        ImplementationTask {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: "Description".to_string(),
            task_type: TaskType::Implement,
            status,
            target: None,
            acceptance_criteria: vec![],
            depends_on: depends_on.iter().map(|dep| dep.to_string()).collect(),
            complexity: 2,
        }
    }

    fn create_test_breakdown(tasks: Vec<ImplementationTask>) -> TaskBreakdown {
        let progress = TaskProgress::compute(&tasks);
        TaskBreakdown {
            intent_id: "i1".to_string(),
            goal: "Add login".to_string(),
            tasks,
            progress,
        }
    }

    fn create_test_item(criterion: &str) -> ChecklistItem {
        ChecklistItem {
            id: criterion.to_lowercase(),
            criterion: criterion.to_string(),
            check_type: CheckType::Manual,
            status: CheckStatus::Pending,
            notes: None,
            is_constraint: false,
            completed_at: None,
        }
    }

    // Intent

    #[test]
    fn test_intent_new_has_id_and_defaults() {
        let intent = Intent::new("Goal");
        assert_eq!(intent.id.len(), 8);
        assert_eq!(intent.priority, Priority::Medium);
        assert_eq!(intent.status, IntentStatus::Pending);
        assert!(intent.created_at.is_some());
        assert_ne!(Intent::new("Goal").id, intent.id);
    }

    #[test]
    fn test_intent_validation_collects_every_error() {
        let mut intent = Intent::new("   ");
        intent.id = String::new();

        let result = intent.validate();
        assert_eq!(
            result.errors,
            vec![
                "Id is required",
                "Goal is required",
                "Scope must contain at least one item",
            ]
        );
    }

    #[test]
    fn test_intent_validation_flags_blank_scope_items() {
        let mut intent = create_test_intent();
        intent.scope.push("  ".to_string());

        let result = intent.validate();
        assert_eq!(result.errors, vec!["Scope item 2 is empty"]);

        let err = intent.ensure_valid().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Scope item 2 is empty"));
    }

    #[test]
    fn test_intent_status_is_not_serialized() {
        let mut intent = create_test_intent();
        intent.status = IntentStatus::Completed;

        let yaml = serde_yaml::to_string(&intent).unwrap();
        assert!(!yaml.contains("status"));

        let decoded: Intent = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(decoded.status, IntentStatus::Pending);
        assert_eq!(decoded.goal, intent.goal);
    }

    #[test]
    fn test_intent_missing_id_gets_generated() {
        let intent: Intent = serde_yaml::from_str("goal: Add login\nscope: [a.rs]\n").unwrap();
        assert_eq!(intent.id.len(), 8);
        assert!(intent.validate().is_valid());
    }

    // Plan

    #[test]
    fn test_plan_set_step_status_and_progress() {
        let mut plan = create_test_plan(3);
        assert!(plan.set_step_status(2, StepStatus::Completed));
        assert!(plan.set_step_status(3, StepStatus::Skipped));
        assert!(!plan.set_step_status(4, StepStatus::Completed));

        let progress = plan.progress();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(plan.step(2).map(|step| step.status), Some(StepStatus::Completed));
    }

    #[test]
    fn test_plan_step_contiguity() {
        let mut plan = create_test_plan(3);
        assert!(plan.is_step_contiguous());

        plan.steps.remove(1);
        assert!(!plan.is_step_contiguous());

        assert!(create_test_plan(0).is_step_contiguous());
    }

    // Tasks

    #[test]
    fn test_progress_buckets_sum_to_total() {
        let tasks = vec![
            create_test_task("T1", TaskStatus::Completed, &[]),
            create_test_task("T2", TaskStatus::Skipped, &[]),
            create_test_task("T3", TaskStatus::InProgress, &[]),
            create_test_task("T4", TaskStatus::Blocked, &[]),
            create_test_task("T5", TaskStatus::Pending, &[]),
            create_test_task("T6", TaskStatus::Pending, &[]),
        ];
        let progress = TaskProgress::compute(&tasks);

        assert_eq!(progress.completed, 2);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.blocked, 1);
        assert_eq!(progress.pending, 2);
        assert_eq!(
            progress.completed + progress.in_progress + progress.pending + progress.blocked,
            progress.total
        );
        assert_eq!(progress.percentage, 33);
    }

    #[test]
    fn test_progress_of_empty_breakdown() {
        let progress = TaskProgress::compute(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percentage, 0);
    }

    #[test]
    fn test_set_task_status_recomputes_progress() {
        let mut breakdown = create_test_breakdown(vec![
            create_test_task("T1", TaskStatus::Pending, &[]),
            create_test_task("T2", TaskStatus::Pending, &["T1"]),
        ]);

        assert!(breakdown.set_task_status("T1", TaskStatus::Completed));
        assert_eq!(breakdown.progress.completed, 1);
        assert_eq!(breakdown.progress.percentage, 50);
        assert!(!breakdown.set_task_status("T9", TaskStatus::Completed));
    }

    #[test]
    fn test_ready_tasks_follow_dependencies() {
        let mut breakdown = create_test_breakdown(vec![
            create_test_task("T1", TaskStatus::Pending, &[]),
            create_test_task("T2", TaskStatus::Pending, &["T1"]),
            create_test_task("T3", TaskStatus::Pending, &["T1", "T2"]),
        ]);

        let ready: Vec<&str> = breakdown.ready_tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ready, vec!["T1"]);

        breakdown.set_task_status("T1", TaskStatus::Skipped);
        let ready: Vec<&str> = breakdown.ready_tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ready, vec!["T2"]);
    }

    #[test]
    fn test_validate_dependencies_rejects_forward_references() {
        let good = create_test_breakdown(vec![
            create_test_task("T1", TaskStatus::Pending, &[]),
            create_test_task("T2", TaskStatus::Pending, &["T1"]),
        ]);
        assert!(good.validate_dependencies().is_empty());

        let bad = create_test_breakdown(vec![
            create_test_task("T1", TaskStatus::Pending, &["T2"]),
            create_test_task("T2", TaskStatus::Pending, &["T2", "T7"]),
        ]);
        assert_eq!(bad.validate_dependencies().len(), 3);
    }

    #[test]
    fn test_task_type_serializes_as_type() {
        let task = create_test_task("T1", TaskStatus::InProgress, &[]);
        let yaml = serde_yaml::to_string(&task).unwrap();
        assert!(yaml.contains("type: implement"));
        assert!(yaml.contains("status: in_progress"));
        assert!(!yaml.contains("target"));
    }

    #[test]
    fn test_task_type_changes_code() {
        assert!(TaskType::Implement.changes_code());
        assert!(TaskType::Create.changes_code());
        assert!(!TaskType::Test.changes_code());
        assert!(!TaskType::Analyze.changes_code());
    }

    // Checklist

    #[test]
    fn test_checklist_mark_first_match_only() {
        let mut checklist = VerificationChecklist {
            intent_id: "i1".to_string(),
            items: vec![create_test_item("Unit test A"), create_test_item("Unit test B")],
            created_at: Timestamp::now(),
        };

        assert!(checklist.mark("UNIT TEST", CheckStatus::Passed, None));
        assert!(checklist.mark("unit test", CheckStatus::Failed, Some("x".to_string())));
        assert_eq!(checklist.items[0].status, CheckStatus::Failed);
        assert_eq!(checklist.items[1].status, CheckStatus::Pending);
        assert!(checklist.items[0].completed_at.is_some());
        assert!(!checklist.mark("missing", CheckStatus::Passed, None));
    }

    #[test]
    fn test_checklist_completeness_accepts_skipped() {
        let mut checklist = VerificationChecklist {
            intent_id: "i1".to_string(),
            items: vec![create_test_item("Lint"), create_test_item("Build")],
            created_at: Timestamp::now(),
        };
        assert!(!checklist.is_complete());

        checklist.mark("lint", CheckStatus::Passed, None);
        checklist.mark("build", CheckStatus::Skipped, None);
        assert!(checklist.is_complete());
        assert_eq!(checklist.count(CheckStatus::Passed), 1);
        assert_eq!(checklist.count(CheckStatus::Skipped), 1);

        let empty = VerificationChecklist {
            intent_id: "i1".to_string(),
            items: vec![],
            created_at: Timestamp::now(),
        };
        assert!(empty.is_complete());
    }

    // Statuses

    #[test]
    fn test_status_parsing() {
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("Skipped".parse::<StepStatus>(), Ok(StepStatus::Skipped));
        assert_eq!("canceled".parse::<IntentStatus>(), Ok(IntentStatus::Cancelled));
        assert_eq!("CRITICAL".parse::<Priority>(), Ok(Priority::Critical));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_display_matches_serialized_form() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Blocked,
            TaskStatus::Skipped,
        ] {
            let yaml = serde_yaml::to_string(&status).unwrap();
            assert_eq!(yaml.trim(), status.to_string());
        }
    }
}
