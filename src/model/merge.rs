// File: src/model/merge.rs
use crate::model::item::{Priority, StoredTask, TaskDraft};

/// Longest title the store accepts; derived titles are cut at this bound.
pub const MAX_TITLE_LEN: usize = 500;

/// Applies a draft to a stored record. Fields present in the draft
/// overwrite, absent fields are left untouched - except priority, which is
/// forced back to `P3` whenever the draft does not carry one. That is the
/// one deliberate asymmetry in the merge policy; both the create and the
/// update path flow through here so they cannot drift apart.
pub fn apply_draft(task: &mut StoredTask, draft: &TaskDraft) {
    if let Some(title) = &draft.title {
        task.title = title.clone();
    } else if task.title.is_empty()
        && let Some(derived) = derive_title(draft.description.as_deref())
    {
        task.title = derived;
    }
    if let Some(description) = &draft.description {
        task.description = Some(description.clone());
    }
    if let Some(assignee) = &draft.assignee {
        task.assignee = Some(assignee.clone());
    }
    if let Some(due) = draft.due_date {
        task.due_date = Some(due);
    }
    if let Some(status) = draft.status {
        task.status = status;
    }
    task.priority = draft.priority.unwrap_or(Priority::P3);
}

/// Derives a title from a description, truncated to [`MAX_TITLE_LEN`]
/// characters. Counting chars means the cut can never split a code point.
pub fn derive_title(description: Option<&str>) -> Option<String> {
    description.map(|d| truncate_chars(d, MAX_TITLE_LEN))
}

fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_task() -> StoredTask {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut task = StoredTask::new(now);
        task.title = "Ship the importer".to_string();
        task.description = Some("Ship the importer".to_string());
        task.assignee = Some("Maya".to_string());
        task.priority = Priority::P1;
        task
    }

    #[test]
    fn test_absent_priority_forces_p3_but_leaves_other_fields() {
        let mut task = base_task();
        let draft = TaskDraft {
            description: Some("Ship the importer, with tests".to_string()),
            ..TaskDraft::default()
        };

        apply_draft(&mut task, &draft);

        assert_eq!(task.priority, Priority::P3, "absent priority must reset");
        assert_eq!(task.assignee, Some("Maya".to_string()));
        assert_eq!(task.title, "Ship the importer");
        assert_eq!(
            task.description,
            Some("Ship the importer, with tests".to_string())
        );
    }

    #[test]
    fn test_explicit_title_is_never_replaced_by_derivation() {
        let mut task = base_task();
        let draft = TaskDraft {
            description: Some("A much longer description".to_string()),
            priority: Some(Priority::P2),
            ..TaskDraft::default()
        };

        apply_draft(&mut task, &draft);

        assert_eq!(task.title, "Ship the importer");
        assert_eq!(task.priority, Priority::P2);
    }

    #[test]
    fn test_derive_title_truncates_at_bound() {
        let long = "x".repeat(MAX_TITLE_LEN + 40);
        let derived = derive_title(Some(&long)).unwrap();
        assert_eq!(derived.chars().count(), MAX_TITLE_LEN);

        let short = "fits as-is";
        assert_eq!(derive_title(Some(short)).unwrap(), short);
    }
}
