#[cfg(test)]
mod tests {
    use crate::cli::tasks::LoadMode;
    use crate::heap::HeapError;
    use crate::task::manager::*;
    use crate::task::types::*;
    use std::cmp::Ordering;
    use std::fs;
    use tempfile::TempDir;

    fn task(priority: i32, description: &str) -> Task {
        Task::new(priority, description).unwrap()
    }

    fn create_test_list() -> TaskList {
        let mut list = TaskList::with_capacity(2).unwrap();
        list.add(task(3, "Buy milk")).unwrap();
        list.add(task(1, "Call mom")).unwrap();
        list.add(task(2, "Write report")).unwrap();
        list
    }

    #[test]
    fn test_task_creation() {
        let task = task(-4, "Renew passport");
        assert_eq!(task.priority(), -4);
        assert_eq!(task.description(), "Renew passport");
        assert_eq!(task.to_string(), "-4\tRenew passport");
    }

    #[test]
    fn test_description_length_limit() {
        let longest = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(Task::new(0, longest).is_ok());

        let too_long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_eq!(
            Task::new(0, too_long),
            Err(TaskError::DescriptionTooLong {
                len: MAX_DESCRIPTION_LEN + 1,
                max: MAX_DESCRIPTION_LEN,
            })
        );
    }

    #[test]
    fn test_description_limit_counts_bytes() {
        // 64 two-byte characters
        let wide = "é".repeat(64);
        assert!(matches!(
            Task::new(1, wide),
            Err(TaskError::DescriptionTooLong { len: 128, .. })
        ));
    }

    #[test]
    fn test_description_rejects_line_breaks() {
        assert_eq!(
            Task::new(1, "two\nlines"),
            Err(TaskError::InvalidDescription)
        );
        assert_eq!(
            Task::new(1, "carriage\rreturn"),
            Err(TaskError::InvalidDescription)
        );
        assert!(Task::new(1, "tabs\tare fine").is_ok());
        assert!(Task::new(1, "").is_ok());
    }

    #[test]
    fn test_compare_priority_ignores_description() {
        assert_eq!(
            Task::compare_priority(&task(1, "b"), &task(2, "a")),
            Ordering::Less
        );
        assert_eq!(
            Task::compare_priority(&task(5, "a"), &task(5, "z")),
            Ordering::Equal
        );
        assert_eq!(
            Task::compare_priority(&task(0, "a"), &task(-1, "a")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_task_list_priority_order() {
        let mut list = create_test_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.first().unwrap(), &task(1, "Call mom"));

        assert_eq!(list.remove_first().unwrap(), task(1, "Call mom"));
        assert_eq!(list.remove_first().unwrap(), task(2, "Write report"));
        assert_eq!(list.remove_first().unwrap(), task(3, "Buy milk"));
        assert!(matches!(
            list.remove_first(),
            Err(TaskListError::Heap(HeapError::EmptyHeap))
        ));
    }

    #[test]
    fn test_empty_list_first_fails() {
        let list = TaskList::new().unwrap();
        assert!(list.is_empty());
        assert!(matches!(
            list.first(),
            Err(TaskListError::Heap(HeapError::EmptyHeap))
        ));
    }

    #[test]
    fn test_sorted_does_not_modify_list() {
        let list = create_test_list();
        let before = list.tasks().to_vec();

        let sorted = list.sorted().unwrap();
        let priorities: Vec<i32> = sorted.iter().map(Task::priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_print_writes_sorted_records() {
        let list = create_test_list();
        let mut out: Vec<u8> = Vec::new();

        let printed = list.print(&mut out).unwrap();

        assert_eq!(printed, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\tCall mom\n2\tWrite report\n3\tBuy milk\n"
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_all_reports_and_empties() {
        let mut list = create_test_list();
        let mut out: Vec<u8> = Vec::new();

        let removed = list.delete_all(Some(&mut out)).unwrap();

        assert_eq!(removed, 3);
        assert!(list.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\tCall mom\n2\tWrite report\n3\tBuy milk\n"
        );
    }

    #[test]
    fn test_delete_all_without_reporter() {
        let mut list = create_test_list();
        assert_eq!(list.delete_all(None).unwrap(), 3);
        assert_eq!(list.delete_all(None).unwrap(), 0);
    }

    #[test]
    fn test_load_builds_heap_from_unsorted_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.txt");
        fs::write(&path, "5\tA\n2\tB\n2\tC\n").unwrap();

        let mut list = TaskList::new().unwrap();
        let loaded = list.load(&path, LoadMode::Strict).unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.first().unwrap().priority(), 2);
    }

    #[test]
    fn test_load_appends_to_existing_tasks() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.txt");
        fs::write(&path, "4\tLater\n0\tNow\n").unwrap();

        let mut list = create_test_list();
        list.load(&path, LoadMode::Strict).unwrap();

        let descriptions: Vec<String> = list
            .sorted()
            .unwrap()
            .iter()
            .map(|t| t.description().to_string())
            .collect();
        assert_eq!(
            descriptions,
            vec!["Now", "Call mom", "Write report", "Buy milk", "Later"]
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.txt");

        let list = create_test_list();
        list.save(&path).unwrap();

        let mut reloaded = TaskList::new().unwrap();
        reloaded.load(&path, LoadMode::Strict).unwrap();

        let mut expected = list.tasks().to_vec();
        let mut actual = reloaded.tasks().to_vec();
        expected.sort_by_key(|t| (t.priority(), t.description().to_string()));
        actual.sort_by_key(|t| (t.priority(), t.description().to_string()));
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_failed_load_leaves_list_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.txt");
        fs::write(&path, "1\tFine\nnot a record\n").unwrap();

        let mut list = create_test_list();
        assert!(list.load(&path, LoadMode::Strict).is_err());
        assert_eq!(list.len(), 3);

        assert_eq!(list.load(&path, LoadMode::Lenient).unwrap(), 1);
        assert_eq!(list.len(), 4);
    }
}
